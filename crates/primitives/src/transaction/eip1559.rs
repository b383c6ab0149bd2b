use super::{write_call_body, AccessList};
use alloy_primitives::{Bytes, TxKind, U256};
use txenc_rlp::{RlpError, RlpWriter};

/// A transaction with a priority fee ([EIP-1559](https://eips.ethereum.org/EIPS/eip-1559)).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TxEip1559 {
    /// Added as EIP-155: Simple replay attack protection
    pub chain_id: u64,
    /// A scalar value equal to the number of transactions sent by the sender; formally Tn.
    pub nonce: u64,
    /// A scalar value equal to the maximum
    /// amount of gas that should be used in executing
    /// this transaction. This is paid up-front, before any
    /// computation is done and may not be increased
    /// later; formally Tg.
    pub gas_limit: u64,
    /// Upper bound on the total fee per unit of gas, base fee included.
    ///
    /// As ethereum circulation is around 120mil eth as of 2022 that is around
    /// 120000000000000000000000000 wei we are safe to use u128 as its max number is:
    /// 340282366920938463463374607431768211455
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_helper::quantity"))]
    pub max_fee_per_gas: u128,
    /// Max Priority fee that transaction is paying
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_helper::quantity"))]
    pub max_priority_fee_per_gas: u128,
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
    /// The accessList specifies a list of addresses and storage keys;
    /// these addresses and storage keys are added into the `accessed_addresses`
    /// and `accessed_storage_keys` global sets (introduced in EIP-2929).
    /// A gas cost is charged, though at a discount relative to the cost of
    /// accessing outside the list.
    #[cfg_attr(feature = "serde", serde(default))]
    pub access_list: AccessList,
    /// Call data, or the init code of a contract creation when `to` is `TxKind::Create`;
    /// formally Td.
    #[cfg_attr(feature = "serde", serde(default))]
    pub input: Bytes,
}

impl TxEip1559 {
    /// Writes the fields shared by every fee-market transaction:
    /// `chain_id, nonce, max_priority_fee_per_gas, max_fee_per_gas, gas_limit, to, value, input,
    /// access_list`.
    pub(crate) fn write_fields(&self, w: &mut RlpWriter) -> Result<(), RlpError> {
        write_fee_market_fields(
            w,
            FeeMarketFields {
                chain_id: self.chain_id,
                nonce: self.nonce,
                max_priority_fee_per_gas: self.max_priority_fee_per_gas,
                max_fee_per_gas: self.max_fee_per_gas,
                gas_limit: self.gas_limit,
                to: &self.to,
                value: &self.value,
                input: &self.input,
                access_list: &self.access_list,
            },
        )
    }
}

/// Borrowed view of the leading fields that EIP-1559, EIP-4844 and EIP-7702 share.
pub(crate) struct FeeMarketFields<'a> {
    pub(crate) chain_id: u64,
    pub(crate) nonce: u64,
    pub(crate) max_priority_fee_per_gas: u128,
    pub(crate) max_fee_per_gas: u128,
    pub(crate) gas_limit: u64,
    pub(crate) to: &'a TxKind,
    pub(crate) value: &'a U256,
    pub(crate) input: &'a Bytes,
    pub(crate) access_list: &'a AccessList,
}

pub(crate) fn write_fee_market_fields(
    w: &mut RlpWriter,
    fields: FeeMarketFields<'_>,
) -> Result<(), RlpError> {
    w.write(&fields.chain_id)
        .write(&fields.nonce)
        .write(&fields.max_priority_fee_per_gas)
        .write(&fields.max_fee_per_gas)
        .write(&fields.gas_limit);
    write_call_body(w, fields.to, fields.value, fields.input);
    fields.access_list.write_to(w)
}
