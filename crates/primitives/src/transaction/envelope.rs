use super::{EncodeError, Signature, SignatureKind, Transaction, TransactionEncoder, TxType};
use alloy_primitives::{hex, keccak256, Bytes, B256};

/// A [`Transaction`] together with the signature that authorizes it, if any.
///
/// The pairing is checked on construction, so an envelope never holds a signature that cannot
/// be written for its transaction type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransactionEnvelope {
    transaction: Transaction,
    signature: Option<Signature>,
}

impl TransactionEnvelope {
    /// Wraps a transaction that has not been signed yet.
    pub fn unsigned(transaction: impl Into<Transaction>) -> Self {
        Self { transaction: transaction.into(), signature: None }
    }

    /// Pairs a transaction with its signature.
    ///
    /// Legacy transactions accept pre-EIP-155 and EIP-155 signatures, typed transactions accept
    /// only `y_parity` signatures. A legacy transaction that names a chain id must be signed for
    /// that same chain.
    pub fn signed(
        transaction: impl Into<Transaction>,
        signature: Signature,
    ) -> Result<Self, EncodeError> {
        let transaction = transaction.into();
        check_pairing(&transaction, &signature)?;
        Ok(Self { transaction, signature: Some(signature) })
    }

    /// Replaces the signature, validating it against the transaction.
    pub fn with_signature(self, signature: Signature) -> Result<Self, EncodeError> {
        Self::signed(self.transaction, signature)
    }

    /// The wrapped transaction.
    pub const fn transaction(&self) -> &Transaction {
        &self.transaction
    }

    /// The attached signature, if any.
    pub const fn signature(&self) -> Option<&Signature> {
        self.signature.as_ref()
    }

    /// Returns true if a signature is attached.
    pub const fn is_signed(&self) -> bool {
        self.signature.is_some()
    }

    /// Splits the envelope into its transaction and signature.
    pub fn into_parts(self) -> (Transaction, Option<Signature>) {
        (self.transaction, self.signature)
    }

    /// Get the transaction's type
    pub const fn tx_type(&self) -> TxType {
        self.transaction.tx_type()
    }

    /// Encodes the envelope with [`TransactionEncoder`].
    pub fn encode(&self, include_signature: bool) -> Result<Bytes, EncodeError> {
        TransactionEncoder::DEFAULT.encode(self, include_signature)
    }

    /// Encodes the envelope as a `0x`-prefixed hex string, the form a raw transaction is
    /// submitted in.
    pub fn encoded_hex(&self, include_signature: bool) -> Result<String, EncodeError> {
        self.encode(include_signature).map(hex::encode_prefixed)
    }

    /// Calculate transaction hash that is the digest a signer signs.
    ///
    /// This is the keccak256 of the unsigned encoding.
    pub fn signature_hash(&self) -> Result<B256, EncodeError> {
        self.encode(false).map(keccak256)
    }

    /// Transaction hash: keccak256 of the signed encoding.
    pub fn hash(&self) -> Result<B256, EncodeError> {
        self.encode(true).map(keccak256)
    }
}

impl From<Transaction> for TransactionEnvelope {
    fn from(transaction: Transaction) -> Self {
        Self::unsigned(transaction)
    }
}

fn check_pairing(transaction: &Transaction, signature: &Signature) -> Result<(), EncodeError> {
    match (transaction, signature) {
        (Transaction::Legacy(tx), Signature::Legacy { .. }) => match tx.chain_id {
            Some(chain_id) => {
                Err(EncodeError::ChainIdMismatch { transaction: chain_id, signature: None })
            }
            None => Ok(()),
        },
        (Transaction::Legacy(tx), Signature::Eip155 { chain_id, .. }) => match tx.chain_id {
            Some(tx_chain) if tx_chain != *chain_id => Err(EncodeError::ChainIdMismatch {
                transaction: tx_chain,
                signature: Some(*chain_id),
            }),
            _ => Ok(()),
        },
        (Transaction::Legacy(_), Signature::Eip2930 { .. }) => {
            Err(mismatch(TxType::Legacy, SignatureKind::Eip2930))
        }
        (
            Transaction::Eip2930(_) |
            Transaction::Eip1559(_) |
            Transaction::Eip4844(_) |
            Transaction::Eip7702(_),
            Signature::Eip2930 { .. },
        ) => Ok(()),
        (tx, sig) => Err(mismatch(tx.tx_type(), sig.kind())),
    }
}

const fn mismatch(tx_type: TxType, signature: SignatureKind) -> EncodeError {
    EncodeError::SignatureMismatch { tx_type, signature }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TxEip1559, TxLegacy};
    use alloy_primitives::U256;
    use assert_matches::assert_matches;

    fn eip155(chain_id: u64) -> Signature {
        Signature::Eip155 { chain_id, odd_y_parity: false, r: U256::from(1u64), s: U256::from(2u64) }
    }

    fn typed() -> Signature {
        Signature::Eip2930 { odd_y_parity: true, r: U256::from(1u64), s: U256::from(2u64) }
    }

    #[test]
    fn legacy_accepts_legacy_shapes() {
        let pre = Signature::Legacy { odd_y_parity: false, r: U256::ZERO, s: U256::ZERO };
        assert!(TransactionEnvelope::signed(TxLegacy::default(), pre).is_ok());
        assert!(TransactionEnvelope::signed(TxLegacy::default(), eip155(1)).is_ok());

        let tx = TxLegacy { chain_id: Some(1), ..Default::default() };
        let envelope = TransactionEnvelope::signed(tx, eip155(1)).unwrap();
        assert!(envelope.is_signed());
        assert_eq!(envelope.signature(), Some(&eip155(1)));
    }

    #[test]
    fn legacy_rejects_typed_signature() {
        assert_matches!(
            TransactionEnvelope::signed(TxLegacy::default(), typed()),
            Err(EncodeError::SignatureMismatch {
                tx_type: TxType::Legacy,
                signature: SignatureKind::Eip2930
            })
        );
    }

    #[test]
    fn legacy_chain_must_match_signature() {
        let tx = TxLegacy { chain_id: Some(1), ..Default::default() };
        assert_matches!(
            TransactionEnvelope::signed(tx.clone(), eip155(5)),
            Err(EncodeError::ChainIdMismatch { transaction: 1, signature: Some(5) })
        );
        let pre = Signature::Legacy { odd_y_parity: true, r: U256::ZERO, s: U256::ZERO };
        assert_matches!(
            TransactionEnvelope::signed(tx, pre),
            Err(EncodeError::ChainIdMismatch { transaction: 1, signature: None })
        );
    }

    #[test]
    fn typed_rejects_legacy_signatures() {
        assert_matches!(
            TransactionEnvelope::signed(TxEip1559::default(), eip155(1)),
            Err(EncodeError::SignatureMismatch {
                tx_type: TxType::Eip1559,
                signature: SignatureKind::Eip155
            })
        );
        let envelope = TransactionEnvelope::signed(TxEip1559::default(), typed()).unwrap();
        assert_eq!(envelope.tx_type(), TxType::Eip1559);
    }

    #[test]
    fn with_signature_revalidates() {
        let envelope = TransactionEnvelope::unsigned(TxEip1559::default());
        assert!(!envelope.is_signed());
        assert_matches!(
            envelope.clone().with_signature(eip155(1)),
            Err(EncodeError::SignatureMismatch { .. })
        );
        let (tx, sig) = envelope.with_signature(typed()).unwrap().into_parts();
        assert_eq!(tx.tx_type(), TxType::Eip1559);
        assert_eq!(sig, Some(typed()));
    }
}
