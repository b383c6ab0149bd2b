use super::write_call_body;
use alloy_primitives::{Bytes, TxKind, U256};
use txenc_rlp::RlpWriter;

/// Legacy transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TxLegacy {
    /// Added as EIP-155: Simple replay attack protection.
    ///
    /// Only used when encoding without a signature; a signed legacy transaction takes its chain
    /// binding from the signature's `v`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub chain_id: Option<u64>,
    /// A scalar value equal to the number of transactions sent by the sender; formally Tn.
    pub nonce: u64,
    /// A scalar value equal to the number of
    /// Wei to be paid per unit of gas for all computation
    /// costs incurred as a result of the execution of this transaction; formally Tp.
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_helper::quantity"))]
    pub gas_price: u128,
    /// A scalar value equal to the maximum
    /// amount of gas that should be used in executing
    /// this transaction. This is paid up-front, before any
    /// computation is done and may not be increased
    /// later; formally Tg.
    pub gas_limit: u64,
    /// The 160-bit address of the message call’s recipient or, for a contract creation
    /// transaction, ∅, used here to denote the only member of B0 ; formally Tt.
    #[cfg_attr(feature = "serde", serde(default))]
    pub to: TxKind,
    /// A scalar value equal to the number of Wei to
    /// be transferred to the message call’s recipient or,
    /// in the case of contract creation, as an endowment
    /// to the newly created account; formally Tv.
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: U256,
    /// Call data, or the init code of a contract creation when `to` is `TxKind::Create`;
    /// formally Td.
    #[cfg_attr(feature = "serde", serde(default))]
    pub input: Bytes,
}

impl TxLegacy {
    /// Writes `nonce, gas_price, gas_limit, to, value, input`.
    pub(crate) fn write_fields(&self, w: &mut RlpWriter) {
        w.write(&self.nonce).write(&self.gas_price).write(&self.gas_limit);
        write_call_body(w, &self.to, &self.value, &self.input);
    }
}
