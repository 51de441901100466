//! Printable and graphic classification of Unicode code points
//!
//! This crate decides whether a character should be rendered literally or
//! escaped when text is quoted for display. The answer comes from compact,
//! sorted range tables searched with a binary search, so every lookup is
//! allocation-free and runs in logarithmic time.
//!
//! # Classes
//!
//! - **Printable**: letters, marks, numbers, punctuation, symbols and the
//!   ASCII space.
//! - **Graphic**: printable, plus a handful of space separators such as
//!   U+00A0 NO-BREAK SPACE and U+3000 IDEOGRAPHIC SPACE.
//! - Everything else (controls, format characters, surrogates, unassigned
//!   and out-of-range values) is neither.
//!
//! # Example
//!
//! ```rust
//! use runeclass_core::{classify, is_graphic, is_printable, Class};
//!
//! assert!(is_printable('~' as u32));
//! assert!(!is_printable(0x1f));
//! assert!(is_graphic(0x3000));
//! assert_eq!(classify(0xad), Class::Other);
//!
//! // The tables themselves can be checked at runtime
//! let summary = runeclass_core::verify_tables().unwrap();
//! assert_eq!(summary.graphic_extras, 16);
//! ```

#![warn(missing_docs)]

pub mod classify;
pub mod error;
pub mod range_table;
#[rustfmt::skip]
pub mod tables;
pub mod verify;

pub use classify::{
    classify, is_graphic, is_graphic_char, is_printable, is_printable_char, tables, Class, Plane,
    Tables, MAX_CODE_POINT, SUPPLEMENTARY_START,
};
pub use error::{ParseClassError, Result, TableError};
pub use range_table::{RangeTable, SingletonTable, TableValue};
pub use verify::{verify, verify_tables, Summary};
