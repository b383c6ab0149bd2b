//! Command line interface for encoding Ethereum transactions.
//!
//! `txenc encode <FILE>` reads a TOML transaction description and prints the raw transaction
//! as hex. `txenc config` prints the configuration in effect.

#![doc(issue_tracker_base_url = "https://github.com/txenc/txenc/issues/")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod cli;
pub mod commands;
pub mod config;
