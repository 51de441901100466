//! Printable and graphic classification
//!
//! A code point is printable when a range in its plane's table covers it and
//! no exclusion lists it. Graphic adds a short list of space separators on
//! top of printable.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseClassError;
use crate::range_table::{RangeTable, SingletonTable};
use crate::tables as data;

/// First code point outside the basic multilingual plane
pub const SUPPLEMENTARY_START: u32 = 0x10000;

/// Largest valid Unicode scalar value
pub const MAX_CODE_POINT: u32 = 0x10ffff;

/// Exclusions above the basic plane are stored as `u16` offsets, so none
/// reach this far.
const EXCLUSION_LIMIT_32: u32 = data::NOT_PRINT_32_BASE + 0x10000;

/// Which table pair answers for a code point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Plane {
    /// Below `0x10000`, 16-bit tables
    Basic,
    /// `0x10000` and above, 32-bit tables
    Supplementary,
}

impl Plane {
    /// Plane for a code point
    pub fn of(code_point: u32) -> Self {
        if code_point < SUPPLEMENTARY_START {
            Plane::Basic
        } else {
            Plane::Supplementary
        }
    }

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Plane::Basic => "basic",
            Plane::Supplementary => "supplementary",
        }
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three-way classification of a code point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Class {
    /// Rendered literally
    Printable,
    /// Graphic but not printable, e.g. U+00A0
    Graphic,
    /// Neither: control, format, unassigned, surrogate or out of range
    Other,
}

impl Class {
    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Class::Printable => "printable",
            Class::Graphic => "graphic",
            Class::Other => "other",
        }
    }

    /// True for `Printable` and `Graphic`
    pub fn is_graphic(&self) -> bool {
        !matches!(self, Class::Other)
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Class {
    type Err = ParseClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "printable" => Ok(Class::Printable),
            "graphic" => Ok(Class::Graphic),
            "other" => Ok(Class::Other),
            _ => Err(ParseClassError(s.to_string())),
        }
    }
}

/// The five tables a classifier needs
#[derive(Debug, Clone, Copy)]
pub struct Tables<'a> {
    /// Printable ranges below `0x10000`
    pub print_16: RangeTable<'a, u16>,
    /// Exclusions from `print_16`
    pub not_print_16: SingletonTable<'a, u16>,
    /// Printable ranges at or above `0x10000`
    pub print_32: RangeTable<'a, u32>,
    /// Exclusions from `print_32`, relative to `0x10000`
    pub not_print_32: SingletonTable<'a, u16>,
    /// Graphic code points that are not printable
    pub graphic_16: SingletonTable<'a, u16>,
}

static TABLES: Tables<'static> = Tables {
    print_16: RangeTable::new(&data::PRINT_16),
    not_print_16: SingletonTable::new(&data::NOT_PRINT_16),
    print_32: RangeTable::new(&data::PRINT_32),
    not_print_32: SingletonTable::with_base(&data::NOT_PRINT_32, data::NOT_PRINT_32_BASE),
    graphic_16: SingletonTable::new(&data::GRAPHIC_16),
};

/// The compiled-in tables
pub fn tables() -> &'static Tables<'static> {
    &TABLES
}

impl Tables<'_> {
    /// Table lookup without the Latin-1 shortcut
    pub fn is_printable(&self, code_point: u32) -> bool {
        match u16::try_from(code_point) {
            Ok(cp) => self.print_16.contains(cp) && !self.not_print_16.contains(code_point),
            Err(_) => {
                if !self.print_32.contains(code_point) {
                    return false;
                }
                if code_point >= EXCLUSION_LIMIT_32 {
                    return true;
                }
                !self.not_print_32.contains(code_point)
            }
        }
    }

    /// Printable, or listed in `graphic_16`
    pub fn is_graphic(&self, code_point: u32) -> bool {
        if self.is_printable(code_point) {
            return true;
        }
        code_point < SUPPLEMENTARY_START && self.graphic_16.contains(code_point)
    }

    /// Three-way classification
    pub fn classify(&self, code_point: u32) -> Class {
        if self.is_printable(code_point) {
            Class::Printable
        } else if self.is_graphic(code_point) {
            Class::Graphic
        } else {
            Class::Other
        }
    }
}

#[inline]
fn latin1_printable(b: u8) -> bool {
    matches!(b, 0x20..=0x7e) || (b >= 0xa1 && b != 0xad)
}

/// Report whether a code point is printable.
///
/// Values past [`MAX_CODE_POINT`] are never printable.
///
/// ```
/// assert!(runeclass_core::is_printable('A' as u32));
/// assert!(!runeclass_core::is_printable(0x7f));
/// assert!(!runeclass_core::is_printable(0xad));
/// ```
#[inline]
pub fn is_printable(code_point: u32) -> bool {
    if let Ok(b) = u8::try_from(code_point) {
        return latin1_printable(b);
    }
    TABLES.is_printable(code_point)
}

/// Report whether a code point is graphic: printable, or one of the space
/// separators such as U+00A0 and U+3000.
///
/// ```
/// assert!(runeclass_core::is_graphic(0xa0));
/// assert!(!runeclass_core::is_printable(0xa0));
/// ```
#[inline]
pub fn is_graphic(code_point: u32) -> bool {
    is_printable(code_point)
        || (code_point < SUPPLEMENTARY_START && TABLES.graphic_16.contains(code_point))
}

/// Classify a code point
pub fn classify(code_point: u32) -> Class {
    if is_printable(code_point) {
        Class::Printable
    } else if is_graphic(code_point) {
        Class::Graphic
    } else {
        Class::Other
    }
}

/// [`is_printable`] for a `char`
#[inline]
pub fn is_printable_char(ch: char) -> bool {
    is_printable(ch as u32)
}

/// [`is_graphic`] for a `char`
#[inline]
pub fn is_graphic_char(ch: char) -> bool {
    is_graphic(ch as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessor_wraps_compiled_data() {
        let t = tables();
        assert_eq!(t.print_16.bounds(), &data::PRINT_16[..]);
        assert_eq!(t.print_32.bounds(), &data::PRINT_32[..]);
        assert_eq!(t.not_print_32.base(), data::NOT_PRINT_32_BASE);
        assert_eq!(t.graphic_16.len(), data::GRAPHIC_16.len());
    }

    #[test]
    fn test_ascii_printable() {
        for cp in 0x20..=0x7e {
            assert!(is_printable(cp), "U+{cp:04X} should be printable");
        }
    }

    #[test]
    fn test_ascii_controls() {
        for cp in (0x00..=0x1f).chain([0x7f]) {
            assert!(!is_printable(cp), "U+{cp:04X} should not be printable");
            assert!(!is_graphic(cp));
        }
    }

    #[test]
    fn test_latin1_soft_hyphen() {
        assert!(is_printable(0xa1));
        assert!(!is_printable(0xad));
        assert!(is_printable(0xae));
        assert!(is_printable(0xff));
    }

    #[test]
    fn test_latin1_shortcut_matches_tables() {
        for cp in 0..=0xff {
            assert_eq!(
                is_printable(cp),
                tables().is_printable(cp),
                "mismatch at U+{cp:04X}"
            );
        }
    }

    #[test]
    fn test_no_break_space_is_graphic_only() {
        assert!(!is_printable(0xa0));
        assert!(is_graphic(0xa0));
        assert_eq!(classify(0xa0), Class::Graphic);
    }

    #[test]
    fn test_space_separators() {
        for cp in [0x1680, 0x2000, 0x200a, 0x202f, 0x205f, 0x3000] {
            assert_eq!(classify(cp), Class::Graphic, "U+{cp:04X}");
        }
        // Zero width space is neither
        assert_eq!(classify(0x200b), Class::Other);
    }

    #[test]
    fn test_plane_boundary() {
        assert!(!is_printable(0xffff));
        assert!(is_printable(0xfffd));
        assert!(is_printable(0x10000));
        assert_eq!(Plane::of(0xffff), Plane::Basic);
        assert_eq!(Plane::of(0x10000), Plane::Supplementary);
    }

    #[test]
    fn test_supplementary_exclusions() {
        // U+1000C sits inside 0x10000..=0x1004d
        assert!(is_printable(0x1000b));
        assert!(!is_printable(0x1000c));
        assert!(is_printable(0x1000d));
    }

    #[test]
    fn test_upper_planes_skip_exclusions() {
        // Variation selectors supplement, 0xe0100..=0xe01ef
        assert!(is_printable(0xe0100));
        assert!(is_printable(0xe01ef));
        assert!(!is_printable(0xe01f0));
        // CJK extension B starts the 0x2xxxx ranges
        assert!(is_printable(0x20000));
    }

    #[test]
    fn test_out_of_range_values() {
        assert!(!is_printable(MAX_CODE_POINT));
        assert!(!is_printable(MAX_CODE_POINT + 1));
        assert!(!is_printable(u32::MAX));
        assert!(!is_graphic(u32::MAX));
        assert_eq!(classify(u32::MAX), Class::Other);
    }

    #[test]
    fn test_surrogates_are_other() {
        assert_eq!(classify(0xd800), Class::Other);
        assert_eq!(classify(0xdfff), Class::Other);
    }

    #[test]
    fn test_char_wrappers() {
        assert!(is_printable_char('a'));
        assert!(is_printable_char('日'));
        assert!(is_printable_char('🌍'));
        assert!(!is_printable_char('\n'));
        assert!(!is_printable_char('\u{00a0}'));
        assert!(is_graphic_char('\u{00a0}'));
    }

    #[test]
    fn test_class_from_str() {
        assert_eq!("printable".parse::<Class>(), Ok(Class::Printable));
        assert_eq!(" Graphic ".parse::<Class>(), Ok(Class::Graphic));
        assert_eq!("OTHER".parse::<Class>(), Ok(Class::Other));
        assert!("control".parse::<Class>().is_err());
    }

    #[test]
    fn test_class_display_roundtrip() {
        for class in [Class::Printable, Class::Graphic, Class::Other] {
            assert_eq!(class.to_string().parse::<Class>(), Ok(class));
        }
        assert!(Class::Graphic.is_graphic());
        assert!(!Class::Other.is_graphic());
    }

    #[test]
    fn test_tables_classify_matches_free_function() {
        for cp in [0x41, 0xa0, 0xad, 0x378, 0x3000, 0x1000c, 0x1f600, 0xe0000] {
            assert_eq!(tables().classify(cp), classify(cp), "U+{cp:04X}");
        }
    }
}
