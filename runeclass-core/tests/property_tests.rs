//! Property tests over the whole u32 input domain

use proptest::prelude::*;
use runeclass_core::{classify, is_graphic, is_printable, tables, Class, MAX_CODE_POINT};

proptest! {
    #[test]
    fn printable_implies_graphic(cp in any::<u32>()) {
        if is_printable(cp) {
            prop_assert!(is_graphic(cp));
        }
    }

    #[test]
    fn classify_agrees_with_predicates(cp in 0u32..=MAX_CODE_POINT) {
        let expected = if is_printable(cp) {
            Class::Printable
        } else if is_graphic(cp) {
            Class::Graphic
        } else {
            Class::Other
        };
        prop_assert_eq!(classify(cp), expected);
    }

    #[test]
    fn fast_path_agrees_with_table_lookup(cp in 0u32..=MAX_CODE_POINT) {
        prop_assert_eq!(is_printable(cp), tables().is_printable(cp));
        prop_assert_eq!(is_graphic(cp), tables().is_graphic(cp));
    }

    #[test]
    fn beyond_unicode_is_other(cp in (MAX_CODE_POINT + 1)..=u32::MAX) {
        prop_assert!(!is_printable(cp));
        prop_assert!(!is_graphic(cp));
    }

    #[test]
    fn char_and_code_point_agree(ch in any::<char>()) {
        prop_assert_eq!(runeclass_core::is_printable_char(ch), is_printable(ch as u32));
        prop_assert_eq!(runeclass_core::is_graphic_char(ch), is_graphic(ch as u32));
    }

    #[test]
    fn gaps_between_ranges_are_not_printable(index in 0usize..227) {
        let (_, hi) = tables().print_16.iter().nth(index).unwrap();
        let (lo, _) = tables().print_16.iter().nth(index + 1).unwrap();
        for cp in (hi + 1)..lo {
            prop_assert!(!is_printable(cp), "U+{:04X}", cp);
        }
    }
}
