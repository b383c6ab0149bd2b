use super::{
    eip1559::{write_fee_market_fields, FeeMarketFields},
    AccessList,
};
use alloy_primitives::{Bytes, TxKind, B256, U256};
use txenc_rlp::{RlpError, RlpWriter};

/// [EIP-4844 Blob Transaction](https://eips.ethereum.org/EIPS/eip-4844#blob-transaction)
///
/// A transaction with blob hashes and max blob fee. The blobs themselves travel in a sidecar
/// that is not part of this encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TxEip4844 {
    /// Added as EIP-155: Simple replay attack protection
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
    /// It contains a vector of fixed size hash(32 bytes)
    #[cfg_attr(feature = "serde", serde(default))]
    pub blob_versioned_hashes: Vec<B256>,
    /// Max fee per data gas
    ///
    /// aka BlobFeeCap or blobGasFeeCap
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_helper::quantity"))]
    pub max_fee_per_blob_gas: u128,
    /// Call data; formally Td.
    #[cfg_attr(feature = "serde", serde(default))]
    pub input: Bytes,
}

impl TxEip4844 {
    /// Writes the fee-market fields followed by `max_fee_per_blob_gas, blob_versioned_hashes`.
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
        w.write(&self.max_fee_per_blob_gas);
        w.write_list(&self.blob_versioned_hashes)?;
        Ok(())
    }
}
