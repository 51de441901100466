//! CLI command implementations

use crate::config::CliConfig;
use crate::output::{self, OutputFormat, OutputFormatter};
use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

pub mod check;
pub mod list;
pub mod scan;
pub mod verify;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify code points or characters
    Check(check::CheckArgs),

    /// Scan text files for characters that are not printable
    Scan(scan::ScanArgs),

    /// List the contents of the classification tables
    List(list::ListArgs),

    /// Check the classification tables for broken invariants
    Verify(verify::VerifyArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Check(args) => args.execute(),
            Commands::Scan(args) => args.execute(),
            Commands::List(args) => args.execute(),
            Commands::Verify(args) => args.execute(),
        }
    }

    /// Whether the command was asked to stay quiet
    pub fn is_quiet(&self) -> bool {
        matches!(self, Commands::Scan(args) if args.quiet)
    }
}

/// Output options shared by every command
#[derive(Debug, Clone, Default, Args)]
pub struct OutputArgs {
    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl OutputArgs {
    /// Load the configuration file, or defaults when none was given
    pub fn load_config(&self) -> Result<CliConfig> {
        CliConfig::load(self.config.as_deref())
    }

    /// Command-line format, falling back to the configured default
    pub fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        match self.format {
            Some(format) => Ok(format),
            None => config.output.format(),
        }
    }

    /// Build a record formatter for these options
    pub fn formatter(&self, config: &CliConfig) -> Result<Box<dyn OutputFormatter>> {
        let format = self.resolve_format(config)?;
        log::debug!("Output format: {}", format.as_str());
        output::create_formatter(format, self.output.as_deref(), config.output.pretty_json)
    }
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        // A logger may already be installed when running under a test harness
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}
