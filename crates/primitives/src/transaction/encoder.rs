use super::{EncodeError, Signature, Transaction, TransactionEnvelope, TxLegacy, TxType};
use alloy_primitives::Bytes;
use tracing::{debug, trace};
use txenc_rlp::RlpWriter;

/// How the trailing signature fields are written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SignatureMode {
    /// The attached signature; an envelope without one is an error.
    Signed,
    /// The signing payload.
    Unsigned,
    /// The attached signature, or zeros standing in for it.
    Placeholder,
}

/// Encodes [`TransactionEnvelope`]s into their canonical network form.
///
/// Legacy transactions are a bare RLP list. Typed transactions are the EIP-2718 type flag
/// followed by the RLP list of their fields. Every call owns its writer, so one encoder can be
/// shared freely between threads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransactionEncoder;

impl TransactionEncoder {
    /// The encoder instance.
    pub const DEFAULT: Self = Self;

    /// Encodes `envelope`.
    ///
    /// With `include_signature` the result is the signed transaction as broadcast. Without it the
    /// result is the payload that gets signed: typed transactions drop the signature fields,
    /// legacy transactions end with `chain_id, 0, 0` as defined by EIP-155.
    pub fn encode(
        &self,
        envelope: &TransactionEnvelope,
        include_signature: bool,
    ) -> Result<Bytes, EncodeError> {
        let mode = if include_signature { SignatureMode::Signed } else { SignatureMode::Unsigned };
        self.encode_with_mode(envelope, mode)
    }

    /// Encodes `envelope` with a signature even if it has none yet.
    ///
    /// A typed transaction without a signature gets the triple `0, 0, 0` in its place, which
    /// gives the transaction's shape before signing. A legacy transaction without a signature is
    /// written the same way as its unsigned encoding.
    pub fn encode_with_placeholder_signature(
        &self,
        envelope: &TransactionEnvelope,
    ) -> Result<Bytes, EncodeError> {
        self.encode_with_mode(envelope, SignatureMode::Placeholder)
    }

    fn encode_with_mode(
        &self,
        envelope: &TransactionEnvelope,
        mode: SignatureMode,
    ) -> Result<Bytes, EncodeError> {
        let tx_type = envelope.tx_type();
        let result = write_envelope(envelope, mode);
        match &result {
            Ok(encoded) => {
                trace!(target: "txenc::encoder", %tx_type, ?mode, len = encoded.len(), "Encoded transaction")
            }
            Err(err) => {
                debug!(target: "txenc::encoder", %tx_type, ?mode, %err, "Failed to encode transaction")
            }
        }
        result
    }
}

fn write_envelope(
    envelope: &TransactionEnvelope,
    mode: SignatureMode,
) -> Result<Bytes, EncodeError> {
    let transaction = envelope.transaction();
    let signature = envelope.signature();
    let tx_type = transaction.tx_type();

    let mut w = match tx_type.flag() {
        Some(flag) => RlpWriter::with_prefix(&[flag]),
        None => RlpWriter::new(),
    };
    w.list(|w| {
        match transaction {
            Transaction::Legacy(tx) => {
                tx.write_fields(w);
                return write_legacy_signature(w, tx, signature, mode)
            }
            Transaction::Eip2930(tx) => tx.write_fields(w)?,
            Transaction::Eip1559(tx) => tx.write_fields(w)?,
            Transaction::Eip4844(tx) => tx.write_fields(w)?,
            Transaction::Eip7702(tx) => tx.write_fields(w)?,
        }
        write_typed_signature(w, tx_type, signature, mode)
    })?;
    Ok(w.finish()?.into())
}

/// Writes `v, r, s`, or `chain_id, 0, 0` for the signing payload.
fn write_legacy_signature(
    w: &mut RlpWriter,
    tx: &TxLegacy,
    signature: Option<&Signature>,
    mode: SignatureMode,
) -> Result<(), EncodeError> {
    match (mode, signature) {
        (SignatureMode::Signed | SignatureMode::Placeholder, Some(signature)) => {
            let v = signature.legacy_v().ok_or_else(|| EncodeError::SignatureMismatch {
                tx_type: TxType::Legacy,
                signature: signature.kind(),
            })?;
            w.write(&v).write(&signature.r()).write(&signature.s());
        }
        (SignatureMode::Signed, None) => return Err(EncodeError::MissingSignature(TxType::Legacy)),
        (SignatureMode::Unsigned | SignatureMode::Placeholder, _) => {
            let chain_id = tx
                .chain_id
                .or_else(|| signature.and_then(Signature::chain_id))
                .ok_or(EncodeError::MissingChainId)?;
            w.write(&chain_id).write(&0u8).write(&0u8);
        }
    }
    Ok(())
}

/// Writes `y_parity, r, s`. Even parity is the integer zero and so the empty string `0x80`.
fn write_typed_signature(
    w: &mut RlpWriter,
    tx_type: TxType,
    signature: Option<&Signature>,
    mode: SignatureMode,
) -> Result<(), EncodeError> {
    match (mode, signature) {
        (SignatureMode::Unsigned, _) => {}
        (_, Some(Signature::Eip2930 { odd_y_parity, r, s })) => {
            w.write(odd_y_parity).write(r).write(s);
        }
        (_, Some(signature)) => {
            return Err(EncodeError::SignatureMismatch { tx_type, signature: signature.kind() })
        }
        (SignatureMode::Signed, None) => return Err(EncodeError::MissingSignature(tx_type)),
        (SignatureMode::Placeholder, None) => {
            w.write(&0u8).write(&0u8).write(&0u8);
        }
    }
    Ok(())
}
