use super::{
    authorization::write_authorization_list,
    eip1559::{write_fee_market_fields, FeeMarketFields},
    AccessList, SignedAuthorization,
};
use alloy_primitives::{Bytes, TxKind, U256};
use txenc_rlp::{RlpError, RlpWriter};

/// [EIP-7702 Set Code Transaction](https://eips.ethereum.org/EIPS/eip-7702)
///
/// Lets externally owned accounts delegate to contract code through a list of signed
/// authorizations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TxEip7702 {
    /// EIP-155: Simple replay attack protection
    pub chain_id: u64,
    /// A scalar value equal to the number of transactions sent by the sender; formally Tn.
    pub nonce: u64,
    /// Maximum amount of gas that should be used in executing this transaction; formally Tg.
    pub gas_limit: u64,
    /// Upper bound on the total fee per unit of gas, base fee included.
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_helper::quantity"))]
    pub max_fee_per_gas: u128,
    /// Max Priority fee that transaction is paying
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_helper::quantity"))]
    pub max_priority_fee_per_gas: u128,
    /// Recipient of the call.
    #[cfg_attr(feature = "serde", serde(default))]
    pub to: TxKind,
    /// Wei transferred to the recipient; formally Tv.
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: U256,
    /// Addresses and storage keys the transaction plans to access.
    #[cfg_attr(feature = "serde", serde(default))]
    pub access_list: AccessList,
    /// Authorizations are used to temporarily set the code of its signer to
    /// the code referenced by `address`. These also include a `chain_id` (which
    /// can be set to zero and not evaluated) as well as an optional `nonce`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub authorization_list: Vec<SignedAuthorization>,
    /// Call data; formally Td.
    #[cfg_attr(feature = "serde", serde(default))]
    pub input: Bytes,
}

impl TxEip7702 {
    /// Writes the fee-market fields followed by `authorization_list`.
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
        )?;
        write_authorization_list(w, &self.authorization_list)
    }
}
