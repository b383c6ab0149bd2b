use super::{SignatureKind, TxType};
use txenc_rlp::RlpError;

/// Represents error variants that can happen when encoding a
/// [`TransactionEnvelope`](crate::TransactionEnvelope).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// A signed encoding was requested but no signature is attached.
    #[error("{0} transaction has no signature")]
    MissingSignature(TxType),
    /// An unsigned legacy encoding needs a chain id, but neither the transaction nor its
    /// signature carries one.
    #[error("unsigned legacy transaction has neither a chain id nor an EIP-155 signature")]
    MissingChainId,
    /// The signature shape cannot be attached to this transaction type.
    #[error("{signature} signature cannot be used with a {tx_type} transaction")]
    SignatureMismatch {
        /// Type of the transaction.
        tx_type: TxType,
        /// Shape of the attached signature.
        signature: SignatureKind,
    },
    /// The legacy transaction's chain id disagrees with the chain its signature is bound to.
    #[error("transaction chain id {transaction} does not match signature chain id {signature:?}")]
    ChainIdMismatch {
        /// Chain id set on the transaction.
        transaction: u64,
        /// Chain id derived from the signature, `None` for a pre-EIP-155 signature.
        signature: Option<u64>,
    },
    /// The writer was left unbalanced.
    #[error(transparent)]
    Rlp(#[from] RlpError),
}
