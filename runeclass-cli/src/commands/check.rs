//! Check command implementation

use super::OutputArgs;
use crate::input::parse_arguments;
use crate::output::{CodePointRecord, OutputFormatter};
use anyhow::Result;
use clap::Args;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Code points (U+00A0, 0xA0, 160), single characters, or ranges (U+0020..U+007E)
    #[arg(value_name = "CODEPOINT", required = true)]
    pub code_points: Vec<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> Result<()> {
        let config = self.output.load_config()?;
        let code_points = parse_arguments(&self.code_points)?;
        log::info!("Classifying {} code point(s)", code_points.len());

        let mut formatter = self.output.formatter(&config)?;
        write_records(formatter.as_mut(), &code_points)
    }
}

/// Classify each code point and hand it to the formatter
pub fn write_records(formatter: &mut dyn OutputFormatter, code_points: &[u32]) -> Result<()> {
    for &cp in code_points {
        let record = CodePointRecord::new(cp);
        log::trace!("{} -> {}", record.code_point, record.class);
        formatter.format_record(&record)?;
    }
    formatter.finish()
}
