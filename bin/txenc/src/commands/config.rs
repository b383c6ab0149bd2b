//! Command that prints the configuration in effect.

use crate::config::Config;
use clap::Parser;

/// `txenc config` command
#[derive(Debug, Parser)]
pub struct Command {
    /// Print the default configuration instead of the loaded one.
    #[arg(long)]
    default: bool,
}

impl Command {
    /// Execute `config` command
    pub fn execute(self, config: &Config) -> eyre::Result<()> {
        let rendered = if self.default { Config::default().to_toml()? } else { config.to_toml()? };
        println!("{rendered}");
        Ok(())
    }
}
