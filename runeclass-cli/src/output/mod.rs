//! Output formatting module

use anyhow::{Context, Result};
use runeclass_core::{classify, is_printable, Class, Plane};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single classified code point
    fn format_record(&mut self, record: &CodePointRecord) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per code point
    Text,
    /// JSON array of records
    Json,
    /// Markdown table
    Markdown,
}

impl OutputFormat {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Where a code point was found in a scanned file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// File path as given
    pub file: String,
    /// 1-based line number
    pub line: usize,
    /// 1-based column, counted in characters
    pub column: usize,
}

/// One classified code point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodePointRecord {
    /// `U+XXXX` notation
    pub code_point: String,
    /// Numeric value
    pub value: u32,
    /// The character itself when printable, otherwise an escape
    pub display: String,
    /// Classification result
    pub class: Class,
    /// Table pair used for the lookup
    pub plane: Plane,
    /// Position in a scanned file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl CodePointRecord {
    /// Classify a code point and build its record
    pub fn new(value: u32) -> Self {
        Self {
            code_point: format_code_point(value),
            value,
            display: display_form(value),
            class: classify(value),
            plane: Plane::of(value),
            location: None,
        }
    }

    /// Attach a file position
    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }
}

/// `U+` notation with at least four hex digits
pub fn format_code_point(value: u32) -> String {
    format!("U+{value:04X}")
}

/// Literal character when printable, `\u{..}` escape otherwise
pub fn display_form(value: u32) -> String {
    match char::from_u32(value) {
        Some(ch) if is_printable(value) => ch.to_string(),
        _ => format!("\\u{{{value:x}}}"),
    }
}

/// Open the output destination, stdout when no path is given
pub fn open_writer(output: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Build the formatter for a format and destination
pub fn create_formatter(
    format: OutputFormat,
    output: Option<&Path>,
    pretty_json: bool,
) -> Result<Box<dyn OutputFormatter>> {
    let writer = open_writer(output)?;
    Ok(match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    })
}
