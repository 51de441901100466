//! List command implementation

use super::OutputArgs;
use crate::output::{format_code_point, open_writer, CodePointRecord, OutputFormat};
use anyhow::Result;
use clap::{Args, ValueEnum};
use runeclass_core::{tables, Plane};
use serde::Serialize;
use std::io::Write;

/// Plane selector for listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlaneArg {
    /// Below U+10000
    Basic,
    /// U+10000 and above
    Supplementary,
}

impl From<PlaneArg> for Plane {
    fn from(arg: PlaneArg) -> Self {
        match arg {
            PlaneArg::Basic => Plane::Basic,
            PlaneArg::Supplementary => Plane::Supplementary,
        }
    }
}

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only list one plane
    #[arg(long, value_enum)]
    pub plane: Option<PlaneArg>,

    /// List excluded code points instead of printable ranges
    #[arg(short = 'x', long, conflicts_with = "graphic")]
    pub exclusions: bool,

    /// List graphic code points that are not printable
    #[arg(short, long)]
    pub graphic: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// One printable range
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeEntry {
    /// First code point, `U+` notation
    pub lo: String,
    /// Last code point, `U+` notation
    pub hi: String,
    /// Number of code points covered, exclusions included
    pub len: u32,
    /// Table the range came from
    pub plane: Plane,
}

impl ListArgs {
    fn wants(&self, plane: Plane) -> bool {
        self.plane.map_or(true, |p| Plane::from(p) == plane)
    }

    /// Printable ranges for the selected planes
    pub fn ranges(&self) -> Vec<RangeEntry> {
        let t = tables();
        t.print_16
            .iter()
            .chain(t.print_32.iter())
            .filter(|&(lo, _)| self.wants(Plane::of(lo)))
            .map(|(lo, hi)| RangeEntry {
                lo: format_code_point(lo),
                hi: format_code_point(hi),
                len: hi - lo + 1,
                plane: Plane::of(lo),
            })
            .collect()
    }

    /// Singleton code points for the selected table and planes
    pub fn singletons(&self) -> Vec<u32> {
        let t = tables();
        let values: Vec<u32> = if self.graphic {
            t.graphic_16.iter().collect()
        } else {
            t.not_print_16.iter().chain(t.not_print_32.iter()).collect()
        };
        values
            .into_iter()
            .filter(|&cp| self.wants(Plane::of(cp)))
            .collect()
    }

    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        let config = self.output.load_config()?;

        if self.exclusions || self.graphic {
            let mut formatter = self.output.formatter(&config)?;
            for cp in self.singletons() {
                formatter.format_record(&CodePointRecord::new(cp))?;
            }
            return formatter.finish();
        }

        let ranges = self.ranges();
        log::info!("Listing {} range(s)", ranges.len());
        let format = self.output.resolve_format(&config)?;
        let mut writer = open_writer(self.output.output.as_deref())?;
        write_ranges(&mut writer, &ranges, format, config.output.pretty_json)?;
        writer.flush()?;
        Ok(())
    }
}

/// Render ranges in the requested format
pub fn write_ranges<W: Write + ?Sized>(
    writer: &mut W,
    ranges: &[RangeEntry],
    format: OutputFormat,
    pretty_json: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for r in ranges {
                writeln!(writer, "{}..{}\t{}\t{}", r.lo, r.hi, r.len, r.plane)?;
            }
        }
        OutputFormat::Json => {
            if pretty_json {
                serde_json::to_writer_pretty(&mut *writer, ranges)?;
            } else {
                serde_json::to_writer(&mut *writer, ranges)?;
            }
            writeln!(writer)?;
        }
        OutputFormat::Markdown => {
            writeln!(writer, "| First | Last | Length | Plane |")?;
            writeln!(writer, "|---|---|---|---|")?;
            for r in ranges {
                writeln!(writer, "| {} | {} | {} | {} |", r.lo, r.hi, r.len, r.plane)?;
            }
            writeln!(writer)?;
            writeln!(writer, "---")?;
            writeln!(writer, "*Total ranges: {}*", ranges.len())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(plane: Option<PlaneArg>, exclusions: bool, graphic: bool) -> ListArgs {
        ListArgs {
            plane,
            exclusions,
            graphic,
            output: OutputArgs::default(),
        }
    }

    #[test]
    fn test_all_ranges() {
        let ranges = args(None, false, false).ranges();
        assert_eq!(ranges.len(), 228 + 198);
        assert_eq!(ranges[0].lo, "U+0020");
        assert_eq!(ranges[0].hi, "U+007E");
        assert_eq!(ranges[0].len, 95);
    }

    #[test]
    fn test_plane_filter() {
        let basic = args(Some(PlaneArg::Basic), false, false).ranges();
        assert_eq!(basic.len(), 228);
        assert!(basic.iter().all(|r| r.plane == Plane::Basic));

        let supplementary = args(Some(PlaneArg::Supplementary), false, false).ranges();
        assert_eq!(supplementary.len(), 198);
        assert_eq!(supplementary[0].lo, "U+10000");
    }

    #[test]
    fn test_exclusion_singletons() {
        let all = args(None, true, false).singletons();
        assert_eq!(all.len(), 140 + 86);
        assert_eq!(all[0], 0xad);

        let supplementary = args(Some(PlaneArg::Supplementary), true, false).singletons();
        assert_eq!(supplementary.len(), 86);
        assert_eq!(supplementary[0], 0x1000c);
    }

    #[test]
    fn test_graphic_singletons() {
        let graphic = args(None, false, true).singletons();
        assert_eq!(graphic.len(), 16);
        assert_eq!(graphic[0], 0xa0);
        assert_eq!(*graphic.last().unwrap(), 0x3000);
        assert!(args(Some(PlaneArg::Supplementary), false, true)
            .singletons()
            .is_empty());
    }

    #[test]
    fn test_write_ranges_text_and_markdown() {
        let ranges = args(Some(PlaneArg::Basic), false, false).ranges();

        let mut buf = Vec::new();
        write_ranges(&mut buf, &ranges[..2], OutputFormat::Text, true).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "U+0020..U+007E\t95\tbasic\nU+00A1..U+0377\t727\tbasic\n");

        let mut buf = Vec::new();
        write_ranges(&mut buf, &ranges[..1], OutputFormat::Markdown, true).unwrap();
        let md = String::from_utf8(buf).unwrap();
        assert!(md.contains("| U+0020 | U+007E | 95 | basic |"));
        assert!(md.contains("*Total ranges: 1*"));
    }

    #[test]
    fn test_write_ranges_json() {
        let ranges = args(None, false, false).ranges();
        let mut buf = Vec::new();
        write_ranges(&mut buf, &ranges[..1], OutputFormat::Json, false).unwrap();
        let json = String::from_utf8(buf).unwrap();
        assert_eq!(
            json.trim(),
            r#"[{"lo":"U+0020","hi":"U+007E","len":95,"plane":"basic"}]"#
        );
    }
}
