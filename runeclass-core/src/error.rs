//! Error types
//!
//! Classification itself never fails. Errors only come from checking table
//! integrity and from parsing classification names.

use thiserror::Error;

/// A broken invariant in one of the classification tables
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Range table has a lo without a matching hi
    #[error("{table}: odd number of bounds ({len})")]
    OddLength {
        /// Table name
        table: &'static str,
        /// Number of raw bounds
        len: usize,
    },

    /// A pair with lo > hi
    #[error("{table}: inverted range {lo:#06x}..={hi:#06x}")]
    InvertedRange {
        /// Table name
        table: &'static str,
        /// Lower bound
        lo: u32,
        /// Upper bound
        hi: u32,
    },

    /// Two adjacent pairs touch or overlap
    #[error("{table}: range ending at {prev_hi:#06x} overlaps range starting at {next_lo:#06x}")]
    Overlap {
        /// Table name
        table: &'static str,
        /// Upper bound of the earlier range
        prev_hi: u32,
        /// Lower bound of the later range
        next_lo: u32,
    },

    /// Singleton entries out of order or duplicated
    #[error("{table}: entry {next:#06x} does not follow {prev:#06x}")]
    Unsorted {
        /// Table name
        table: &'static str,
        /// Earlier entry
        prev: u32,
        /// Entry that should be greater than `prev`
        next: u32,
    },

    /// An exclusion that no range covers
    #[error("{table}: excluded code point {code_point:#06x} is not inside any printable range")]
    DeadExclusion {
        /// Table name
        table: &'static str,
        /// Offending code point
        code_point: u32,
    },

    /// A graphic extra that is already printable
    #[error("{table}: {code_point:#06x} is already printable")]
    GraphicAlreadyPrintable {
        /// Table name
        table: &'static str,
        /// Offending code point
        code_point: u32,
    },

    /// A value stored in the table for the other plane
    #[error("{table}: {code_point:#06x} belongs to the {expected} plane table")]
    PlaneMismatch {
        /// Table name
        table: &'static str,
        /// Offending code point
        code_point: u32,
        /// Plane the value should have been in
        expected: &'static str,
    },
}

/// Unknown classification name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown class '{0}', expected one of: printable, graphic, other")]
pub struct ParseClassError(pub String);

/// Result type for table checks
pub type Result<T> = core::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_error_display() {
        let err = TableError::Overlap {
            table: "print_16",
            prev_hi: 0x7e,
            next_lo: 0x7e,
        };
        assert_eq!(
            err.to_string(),
            "print_16: range ending at 0x007e overlaps range starting at 0x007e"
        );

        let err = TableError::DeadExclusion {
            table: "not_print_32",
            code_point: 0x1ffff,
        };
        assert_eq!(
            err.to_string(),
            "not_print_32: excluded code point 0x1ffff is not inside any printable range"
        );
    }

    #[test]
    fn test_parse_class_error_display() {
        let err = ParseClassError("bogus".to_string());
        assert!(err.to_string().contains("'bogus'"));
        assert!(err.to_string().contains("printable, graphic, other"));
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = TableError::OddLength {
            table: "print_32",
            len: 3,
        };
        let _: &dyn std::error::Error = &err;
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("OddLength"));
    }
}
