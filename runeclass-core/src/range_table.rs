//! Sorted lookup tables over code points
//!
//! Both table kinds are borrowed views over plain slices, so the compiled
//! data in [`crate::tables`] can be wrapped without copying and tests can
//! wrap hand-built arrays the same way.

use core::fmt;

mod sealed {
    pub trait Sealed {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// Element type of a table: `u16` for the basic plane, `u32` above it
pub trait TableValue:
    sealed::Sealed + Copy + Ord + Into<u32> + TryFrom<u32> + fmt::Debug + fmt::LowerHex
{
}

impl TableValue for u16 {}
impl TableValue for u32 {}

/// Inclusive ranges stored as a flat `[lo, hi, lo, hi, ...]` slice
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RangeTable<'a, T> {
    bounds: &'a [T],
}

impl<'a, T: TableValue> RangeTable<'a, T> {
    /// Wrap a flat slice of bounds. No validation is done here, see
    /// [`crate::verify`].
    pub const fn new(bounds: &'a [T]) -> Self {
        Self { bounds }
    }

    /// The raw bounds as stored
    pub fn bounds(&self) -> &'a [T] {
        self.bounds
    }

    /// Number of complete `(lo, hi)` pairs
    pub fn len(&self) -> usize {
        self.bounds.len() / 2
    }

    /// Check if the table holds no ranges
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find the range containing `value`
    #[inline]
    pub fn find(&self, value: T) -> Option<(T, T)> {
        // Bounds ascend across the whole slice, so the first bound >= value
        // is either the lo or the hi of the only candidate pair.
        let i = self.bounds.partition_point(|&b| b < value);
        let pair = i & !1;
        let (&lo, &hi) = (self.bounds.get(pair)?, self.bounds.get(pair + 1)?);
        (lo <= value && value <= hi).then_some((lo, hi))
    }

    /// Check whether some range contains `value`
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.find(value).is_some()
    }

    /// Find the range containing a code point, widening both bounds
    pub fn find_code_point(&self, code_point: u32) -> Option<(u32, u32)> {
        let value = T::try_from(code_point).ok()?;
        self.find(value)
            .map(|(lo, hi)| -> (u32, u32) { (lo.into(), hi.into()) })
    }

    /// Iterate over `(lo, hi)` pairs as code points
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + 'a {
        self.bounds
            .chunks_exact(2)
            .map(|pair| -> (u32, u32) { (pair[0].into(), pair[1].into()) })
    }
}

impl<T: TableValue> fmt::Debug for RangeTable<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeTable")
            .field("ranges", &self.len())
            .finish()
    }
}

/// Sorted single code points, stored as offsets from `base`
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SingletonTable<'a, T> {
    entries: &'a [T],
    base: u32,
}

impl<'a, T: TableValue> SingletonTable<'a, T> {
    /// Wrap entries that already hold absolute code points
    pub const fn new(entries: &'a [T]) -> Self {
        Self { entries, base: 0 }
    }

    /// Wrap entries stored relative to `base`
    pub const fn with_base(entries: &'a [T], base: u32) -> Self {
        Self { entries, base }
    }

    /// The raw entries as stored, before adding the base
    pub fn entries(&self) -> &'a [T] {
        self.entries
    }

    /// Offset added to each entry
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check whether `code_point` is listed
    #[inline]
    pub fn contains(&self, code_point: u32) -> bool {
        let Some(offset) = code_point.checked_sub(self.base) else {
            return false;
        };
        match T::try_from(offset) {
            Ok(offset) => self.entries.binary_search(&offset).is_ok(),
            Err(_) => false,
        }
    }

    /// Iterate over absolute code points
    pub fn iter(&self) -> impl Iterator<Item = u32> + 'a {
        let base = self.base;
        self.entries.iter().map(move |&e| base + Into::<u32>::into(e))
    }
}

impl<T: TableValue> fmt::Debug for SingletonTable<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingletonTable")
            .field("entries", &self.len())
            .field("base", &format_args!("{:#x}", self.base))
            .finish()
    }
}
