//! Ethereum transaction types and their canonical wire encoding.
//!
//! A [`Transaction`] is one of the five network-recognized shapes (legacy plus the EIP-2718
//! typed envelopes 0x01 through 0x04). Paired with an optional [`Signature`] it forms a
//! [`TransactionEnvelope`], which [`TransactionEncoder`] turns into the exact bytes that are
//! hashed, signed and broadcast.
//!
//! ## Feature Flags
//!
//! - `serde`: Enables serde support for all transaction and signature types.

#![doc(issue_tracker_base_url = "https://github.com/txenc/txenc/issues/")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[cfg(feature = "serde")]
pub mod serde_helper;
mod transaction;

pub use transaction::{
    AccessList, AccessListItem, EncodeError, Signature, SignatureError, SignatureKind,
    SignedAuthorization, Transaction, TransactionEncoder, TransactionEnvelope, TxEip1559,
    TxEip2930, TxEip4844, TxEip7702, TxLegacy, TxType, EIP1559_TX_TYPE_ID, EIP2930_TX_TYPE_ID,
    EIP4844_TX_TYPE_ID, EIP7702_TX_TYPE_ID, LEGACY_TX_TYPE_ID,
};

pub use alloy_primitives::{
    self, address, b256, bytes, hex, keccak256, Address, Bytes, TxKind, B256, U256,
};
