//! Verify command implementation

use super::OutputArgs;
use crate::output::{open_writer, OutputFormat};
use anyhow::Result;
use clap::Args;
use runeclass_core::{verify_tables, Summary, TableError};
use std::io::Write;

/// Arguments for the verify command
#[derive(Debug, Args)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub output: OutputArgs,
}

impl VerifyArgs {
    /// Execute the verify command
    pub fn execute(&self) -> Result<()> {
        let config = self.output.load_config()?;
        let format = self.output.resolve_format(&config)?;
        let mut writer = open_writer(self.output.output.as_deref())?;

        match verify_tables() {
            Ok(summary) => {
                log::info!("Table verification passed");
                write_summary(&mut writer, &summary, format)?;
                writer.flush()?;
                Ok(())
            }
            Err(e) => {
                write_failure(&mut writer, &e, format)?;
                writer.flush()?;
                Err(anyhow::anyhow!("Verification failed: {}", e))
            }
        }
    }
}

/// Render a verification summary
pub fn write_summary<W: Write + ?Sized>(
    writer: &mut W,
    summary: &Summary,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, summary)?;
            writeln!(writer)?;
        }
        OutputFormat::Text => {
            writeln!(writer, "✓ Tables are valid!")?;
            writeln!(writer, "  Basic plane ranges:         {}", summary.ranges_16)?;
            writeln!(writer, "  Basic plane exclusions:     {}", summary.exclusions_16)?;
            writeln!(writer, "  Supplementary ranges:       {}", summary.ranges_32)?;
            writeln!(writer, "  Supplementary exclusions:   {}", summary.exclusions_32)?;
            writeln!(writer, "  Graphic extras:             {}", summary.graphic_extras)?;
            writeln!(writer, "  Printable code points:      {}", summary.printable_code_points)?;
            writeln!(writer, "  Graphic code points:        {}", summary.graphic_code_points())?;
        }
        OutputFormat::Markdown => {
            writeln!(writer, "| Table | Entries |")?;
            writeln!(writer, "|---|---|")?;
            writeln!(writer, "| Basic plane ranges | {} |", summary.ranges_16)?;
            writeln!(writer, "| Basic plane exclusions | {} |", summary.exclusions_16)?;
            writeln!(writer, "| Supplementary ranges | {} |", summary.ranges_32)?;
            writeln!(writer, "| Supplementary exclusions | {} |", summary.exclusions_32)?;
            writeln!(writer, "| Graphic extras | {} |", summary.graphic_extras)?;
            writeln!(writer)?;
            writeln!(
                writer,
                "*Printable code points: {}*",
                summary.printable_code_points
            )?;
        }
    }
    Ok(())
}

/// Render a verification failure
pub fn write_failure<W: Write + ?Sized>(
    writer: &mut W,
    error: &TableError,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "valid": false,
                "error": error.to_string(),
            });
            serde_json::to_writer_pretty(&mut *writer, &report)?;
            writeln!(writer)?;
        }
        OutputFormat::Text => {
            writeln!(writer, "✗ Tables are invalid!")?;
            writeln!(writer, "  Error: {error}")?;
        }
        OutputFormat::Markdown => {
            writeln!(writer, "**✗ Tables are invalid**")?;
            writeln!(writer)?;
            writeln!(writer, "- {error}")?;
        }
    }
    Ok(())
}
