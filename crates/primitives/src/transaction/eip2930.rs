use super::{write_call_body, AccessList};
use alloy_primitives::{Bytes, TxKind, U256};
use txenc_rlp::{RlpError, RlpWriter};

/// Transaction with an [`AccessList`] ([EIP-2930](https://eips.ethereum.org/EIPS/eip-2930)).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TxEip2930 {
    /// Added as EIP-155: Simple replay attack protection
    pub chain_id: u64,
    /// A scalar value equal to the number of transactions sent by the sender; formally Tn.
    pub nonce: u64,
    /// Wei paid per unit of gas; formally Tp.
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_helper::quantity"))]
    pub gas_price: u128,
    /// Maximum amount of gas that should be used in executing this transaction; formally Tg.
    pub gas_limit: u64,
    /// Recipient, or [`TxKind::Create`] for contract creation; formally Tt.
    #[cfg_attr(feature = "serde", serde(default))]
    pub to: TxKind,
    /// Wei transferred to the recipient; formally Tv.
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: U256,
    /// The accessList specifies a list of addresses and storage keys;
    /// these addresses and storage keys are added into the `accessed_addresses`
    /// and `accessed_storage_keys` global sets (introduced in EIP-2929).
    /// A gas cost is charged, though at a discount relative to the cost of
    /// accessing outside the list.
    #[cfg_attr(feature = "serde", serde(default))]
    pub access_list: AccessList,
    /// Call data, or init code for a contract creation; formally Td.
    #[cfg_attr(feature = "serde", serde(default))]
    pub input: Bytes,
}

impl TxEip2930 {
    /// Writes `chain_id, nonce, gas_price, gas_limit, to, value, input, access_list`.
    pub(crate) fn write_fields(&self, w: &mut RlpWriter) -> Result<(), RlpError> {
        w.write(&self.chain_id).write(&self.nonce).write(&self.gas_price).write(&self.gas_limit);
        write_call_body(w, &self.to, &self.value, &self.input);
        self.access_list.write_to(w)
    }
}
