//! JSON output formatter

use super::{CodePointRecord, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs records as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<CodePointRecord>,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            records: Vec::new(),
            pretty,
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_record(&mut self, record: &CodePointRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter.format_record(&CodePointRecord::new(0xa0)).unwrap();
        formatter.format_record(&CodePointRecord::new(0x7f)).unwrap();
        formatter.finish().unwrap();

        let out = String::from_utf8(formatter.into_inner()).unwrap();
        let parsed: Vec<CodePointRecord> = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].code_point, "U+00A0");
        assert!(out.contains(r#""class":"graphic""#));
        assert!(out.contains(r#""class":"other""#));
        assert!(!out.contains("location"));
    }

    #[test]
    fn test_empty_json_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), true);
        formatter.finish().unwrap();
        let out = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(out.trim(), "[]");
    }
}
