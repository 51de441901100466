//! Plain text output formatter

use super::{CodePointRecord, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one code point per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_record(&mut self, record: &CodePointRecord) -> Result<()> {
        if let Some(loc) = &record.location {
            write!(self.writer, "{}:{}:{}: ", loc.file, loc.line, loc.column)?;
        }
        writeln!(
            self.writer,
            "{}\t{}\t{}\t{}",
            record.code_point, record.display, record.class, record.plane
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Location;

    #[test]
    fn test_text_line() {
        let mut formatter = TextFormatter::new(Vec::new());
        formatter.format_record(&CodePointRecord::new(0x41)).unwrap();
        formatter.finish().unwrap();
        let out = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(out, "U+0041\tA\tprintable\tbasic\n");
    }

    #[test]
    fn test_text_line_with_location() {
        let mut formatter = TextFormatter::new(Vec::new());
        let record = CodePointRecord::new(0x1000c).at(Location {
            file: "notes.txt".to_string(),
            line: 3,
            column: 7,
        });
        formatter.format_record(&record).unwrap();
        let out = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(out, "notes.txt:3:7: U+1000C\t\\u{1000c}\tother\tsupplementary\n");
    }
}
