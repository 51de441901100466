//! Table integrity checks
//!
//! The tables are generated data; a single transcription error silently
//! changes classification results. [`verify_tables`] checks the compiled
//! data and [`verify`] checks any other set of tables.

use crate::classify::{tables, Tables, SUPPLEMENTARY_START};
use crate::error::{Result, TableError};
use crate::range_table::{RangeTable, SingletonTable, TableValue};

/// Counts gathered while verifying
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Printable ranges below `0x10000`
    pub ranges_16: usize,
    /// Exclusions below `0x10000`
    pub exclusions_16: usize,
    /// Printable ranges at or above `0x10000`
    pub ranges_32: usize,
    /// Exclusions at or above `0x10000`
    pub exclusions_32: usize,
    /// Graphic but not printable code points
    pub graphic_extras: usize,
    /// Total number of printable code points
    pub printable_code_points: u64,
}

impl Summary {
    /// Printable plus graphic extras
    pub fn graphic_code_points(&self) -> u64 {
        self.printable_code_points + self.graphic_extras as u64
    }
}

/// Verify the compiled-in tables
pub fn verify_tables() -> Result<Summary> {
    verify(tables())
}

/// Verify every invariant of a set of tables
pub fn verify(t: &Tables<'_>) -> Result<Summary> {
    check_ranges("print_16", &t.print_16)?;
    check_ranges("print_32", &t.print_32)?;
    if let Some((lo, _)) = t.print_32.iter().next() {
        if lo < SUPPLEMENTARY_START {
            return Err(TableError::PlaneMismatch {
                table: "print_32",
                code_point: lo,
                expected: "basic",
            });
        }
    }

    check_singletons("not_print_16", &t.not_print_16)?;
    check_singletons("not_print_32", &t.not_print_32)?;
    check_singletons("graphic_16", &t.graphic_16)?;

    check_exclusions("not_print_16", &t.not_print_16, &t.print_16)?;
    check_exclusions("not_print_32", &t.not_print_32, &t.print_32)?;

    for code_point in t.graphic_16.iter() {
        if code_point >= SUPPLEMENTARY_START {
            return Err(TableError::PlaneMismatch {
                table: "graphic_16",
                code_point,
                expected: "supplementary",
            });
        }
        if t.is_printable(code_point) {
            return Err(TableError::GraphicAlreadyPrintable {
                table: "graphic_16",
                code_point,
            });
        }
    }

    let covered: u64 = t
        .print_16
        .iter()
        .chain(t.print_32.iter())
        .map(|(lo, hi)| u64::from(hi - lo) + 1)
        .sum();
    let excluded = (t.not_print_16.len() + t.not_print_32.len()) as u64;

    Ok(Summary {
        ranges_16: t.print_16.len(),
        exclusions_16: t.not_print_16.len(),
        ranges_32: t.print_32.len(),
        exclusions_32: t.not_print_32.len(),
        graphic_extras: t.graphic_16.len(),
        printable_code_points: covered - excluded,
    })
}

fn check_ranges<T: TableValue>(table: &'static str, ranges: &RangeTable<'_, T>) -> Result<()> {
    let len = ranges.bounds().len();
    if len % 2 != 0 {
        return Err(TableError::OddLength { table, len });
    }

    let mut prev_hi: Option<u32> = None;
    for (lo, hi) in ranges.iter() {
        if lo > hi {
            return Err(TableError::InvertedRange { table, lo, hi });
        }
        if let Some(prev_hi) = prev_hi {
            if prev_hi >= lo {
                return Err(TableError::Overlap {
                    table,
                    prev_hi,
                    next_lo: lo,
                });
            }
        }
        prev_hi = Some(hi);
    }
    Ok(())
}

fn check_singletons<T: TableValue>(
    table: &'static str,
    entries: &SingletonTable<'_, T>,
) -> Result<()> {
    let mut prev: Option<u32> = None;
    for next in entries.iter() {
        if let Some(prev) = prev {
            if prev >= next {
                return Err(TableError::Unsorted { table, prev, next });
            }
        }
        prev = Some(next);
    }
    Ok(())
}

fn check_exclusions<R: TableValue, S: TableValue>(
    table: &'static str,
    exclusions: &SingletonTable<'_, S>,
    ranges: &RangeTable<'_, R>,
) -> Result<()> {
    for code_point in exclusions.iter() {
        if ranges.find_code_point(code_point).is_none() {
            return Err(TableError::DeadExclusion { table, code_point });
        }
    }
    Ok(())
}
