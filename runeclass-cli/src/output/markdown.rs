//! Markdown output formatter

use super::{CodePointRecord, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs records as a markdown table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    record_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            record_count: 0,
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_record(&mut self, record: &CodePointRecord) -> Result<()> {
        if self.record_count == 0 {
            writeln!(self.writer, "| Code point | Char | Class | Plane | Location |")?;
            writeln!(self.writer, "|---|---|---|---|---|")?;
        }
        self.record_count += 1;

        let location = record
            .location
            .as_ref()
            .map(|loc| format!("{}:{}:{}", loc.file, loc.line, loc.column))
            .unwrap_or_default();
        writeln!(
            self.writer,
            "| {} | `{}` | {} | {} | {} |",
            record.code_point,
            escape_cell(&record.display),
            record.class,
            record.plane,
            escape_cell(&location)
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total code points: {}*", self.record_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
