//! Command that encodes a transaction description into a raw transaction.

use crate::config::Config;
use clap::Parser;
use eyre::WrapErr;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::debug;
use txenc_primitives::{
    hex, keccak256, Bytes, Signature, Transaction, TransactionEncoder, TransactionEnvelope, B256,
};

/// `txenc encode` command
#[derive(Debug, Parser)]
pub struct Command {
    /// The TOML file describing the transaction.
    ///
    /// It holds a `[transaction]` table tagged with its `type` (`legacy`, `eip2930`, `eip1559`,
    /// `eip4844` or `eip7702`) and an optional `[signature]` table.
    #[arg(value_name = "FILE", verbatim_doc_comment)]
    file: PathBuf,

    /// Encode the payload that gets signed instead of the signed transaction.
    #[arg(long)]
    unsigned: bool,

    /// Write a zero signature for typed transactions that have none.
    #[arg(long, conflicts_with = "unsigned")]
    placeholder: bool,

    /// Also print the keccak256 hash of the encoding: the signing hash with `--unsigned`, the
    /// transaction hash otherwise.
    #[arg(long)]
    hash: bool,
}

impl Command {
    /// Execute `encode` command
    pub fn execute(self, config: &Config) -> eyre::Result<()> {
        let contents = fs::read_to_string(&self.file)
            .wrap_err_with(|| format!("Could not read {}", self.file.display()))?;
        let envelope = parse_transaction_file(&contents)
            .wrap_err_with(|| format!("Invalid transaction file {}", self.file.display()))?;

        let (encoded, hash) = self.encode(&envelope)?;
        debug!(
            target: "txenc::cli",
            tx_type = %envelope.tx_type(),
            signed = envelope.is_signed(),
            len = encoded.len(),
            "Encoded transaction"
        );

        println!("{}", format_hex(&encoded, config.output.hex_prefix));
        if self.hash {
            println!("{}", format_hex(hash.as_slice(), config.output.hex_prefix));
        }
        Ok(())
    }

    fn encode(&self, envelope: &TransactionEnvelope) -> eyre::Result<(Bytes, B256)> {
        if self.placeholder {
            let encoded = TransactionEncoder::DEFAULT.encode_with_placeholder_signature(envelope)?;
            let hash = keccak256(&encoded);
            return Ok((encoded, hash))
        }
        let include_signature = !self.unsigned;
        let encoded = envelope.encode(include_signature)?;
        let hash = if include_signature { envelope.hash()? } else { envelope.signature_hash()? };
        Ok((encoded, hash))
    }
}

/// Contents of a transaction description file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TransactionFile {
    transaction: Transaction,
    #[serde(default)]
    signature: Option<Signature>,
}

/// Parses a transaction description and pairs the transaction with its signature.
pub fn parse_transaction_file(contents: &str) -> eyre::Result<TransactionEnvelope> {
    let TransactionFile { transaction, signature } = toml::from_str(contents)?;
    let envelope = match signature {
        Some(signature) => TransactionEnvelope::signed(transaction, signature)?,
        None => TransactionEnvelope::unsigned(transaction),
    };
    Ok(envelope)
}

fn format_hex(bytes: &[u8], prefix: bool) -> String {
    if prefix {
        hex::encode_prefixed(bytes)
    } else {
        hex::encode(bytes)
    }
}
