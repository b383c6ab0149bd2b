//! This module contains all the commands for the CLI.

pub mod config;
pub mod encode;
