//! CLI definition and entrypoint to executable

use crate::{commands, config::Config};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::{ffi::OsString, path::PathBuf};
use txenc_tracing::{
    tracing::{metadata::LevelFilter, Level},
    ColorMode, LayerInfo, LogFormat, Tracer, TxencTracer,
};

/// Parse CLI options, set up logging and run the chosen command.
///
/// Errors are returned to the caller rather than logged, since they may occur before the
/// subscriber is installed or while logging is silenced.
pub fn run() -> eyre::Result<()> {
    run_from(std::env::args_os())
}

/// Same as [`run`], with the arguments given explicitly.
pub fn run_from<I, T>(args: I) -> eyre::Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let opt = Cli::try_parse_from(args).unwrap_or_else(|err| err.exit());

    let config = match &opt.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    TxencTracer::new().with_stdout(opt.logs.layer_info(&config, &opt.verbosity)).init()?;

    match opt.command {
        Commands::Encode(command) => command.execute(&config),
        Commands::Config(command) => command.execute(&config),
    }
}

/// Commands to be executed
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Encode a transaction described in a TOML file
    #[command(name = "encode")]
    Encode(commands::encode::Command),
    /// Print the configuration in effect
    #[command(name = "config")]
    Config(commands::config::Command),
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Ethereum transaction encoder", long_about = None)]
struct Cli {
    /// The command to run
    #[clap(subcommand)]
    command: Commands,

    /// The path to the configuration file to use.
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[clap(flatten)]
    logs: Logs,

    #[clap(flatten)]
    verbosity: Verbosity,
}

#[derive(Debug, Args)]
#[command(next_help_heading = "Logging")]
struct Logs {
    /// The format to use for logs written to stdout.
    #[arg(long = "log.format", value_name = "FORMAT", global = true)]
    format: Option<LogFormat>,

    /// Additional filter directives for logs written to stdout.
    #[arg(long = "log.filter", value_name = "FILTER", global = true)]
    filter: Option<String>,

    /// Sets whether or not the formatter emits ANSI terminal escape codes for colors and other
    /// text formatting.
    #[arg(long, value_name = "COLOR", global = true)]
    color: Option<ColorMode>,
}

impl Logs {
    /// Builds the stdout layer from the command line, falling back to the config file.
    fn layer_info(&self, config: &Config, verbosity: &Verbosity) -> LayerInfo {
        let format = self.format.unwrap_or(config.log.format);
        let filters = [config.log.filter.as_str(), self.filter.as_deref().unwrap_or_default()]
            .into_iter()
            .filter(|filter| !filter.is_empty())
            .collect::<Vec<_>>()
            .join(",");
        let color = self.color.unwrap_or(config.log.color);

        LayerInfo::new(format, verbosity.directive().to_string(), filters, Some(color.to_string()))
    }
}

#[derive(Debug, Args)]
#[command(next_help_heading = "Display")]
struct Verbosity {
    /// Set the minimum log level.
    ///
    /// -v      Errors
    /// -vv     Warnings
    /// -vvv    Info
    /// -vvvv   Debug
    /// -vvvvv  Traces (warning: very verbose!)
    #[clap(short, long, action = ArgAction::Count, global = true, default_value_t = 3, verbatim_doc_comment, help_heading = "Display")]
    verbosity: u8,

    /// Silence all log output.
    #[clap(long, alias = "silent", short = 'q', global = true, help_heading = "Display")]
    quiet: bool,
}

impl Verbosity {
    /// Get the corresponding [`LevelFilter`] for the given verbosity, which is `OFF` when the
    /// output is silenced.
    fn directive(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::OFF
        } else {
            let level = match self.verbosity.saturating_sub(1) {
                0 => Level::ERROR,
                1 => Level::WARN,
                2 => Level::INFO,
                3 => Level::DEBUG,
                _ => Level::TRACE,
            };
            LevelFilter::from_level(level)
        }
    }
}
