//! Letter coverage bitmask
//!
//! Each distinct puzzle letter owns one bit, assigned in the puzzle's canonical
//! letter order. A puzzle can hold at most 26 distinct letters, so a `u32`
//! always suffices.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Set of puzzle letters encoded as bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterMask(u32);

impl LetterMask {
    /// No letters covered
    pub const EMPTY: Self = Self(0);

    #[inline]
    #[must_use]
    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    /// Mask with only `bit` set
    ///
    /// # Panics
    /// Panics in debug mode if `bit >= 32`
    #[inline]
    #[must_use]
    pub const fn single(bit: usize) -> Self {
        debug_assert!(bit < 32, "Letter bit must be < 32");
        Self(1 << bit)
    }

    /// Mask with the lowest `count` bits set
    #[inline]
    #[must_use]
    pub const fn full(count: usize) -> Self {
        if count >= 32 {
            Self(u32::MAX)
        } else {
            Self((1 << count) - 1)
        }
    }

    #[inline]
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of letters covered
    #[inline]
    #[must_use]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, bit: usize) -> bool {
        bit < 32 && self.0 & (1 << bit) != 0
    }

    /// Bits in `other` that are not yet in `self`
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::LetterMask;
    ///
    /// let covered = LetterMask::new(0b0011);
    /// let word = LetterMask::new(0b0110);
    /// assert_eq!(covered.new_bits(word), LetterMask::new(0b0100));
    /// ```
    #[inline]
    #[must_use]
    pub const fn new_bits(self, other: Self) -> Self {
        Self(other.0 & !self.0)
    }

    /// True when every bit of `other` is also set in `self`
    #[inline]
    #[must_use]
    pub const fn covers(self, other: Self) -> bool {
        other.0 & !self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Iterate the set bit positions in ascending order
    pub fn iter_bits(self) -> impl Iterator<Item = usize> {
        (0..32).filter(move |&bit| self.contains(bit))
    }
}

impl BitOr for LetterMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for LetterMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for LetterMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#b}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_mask_has_requested_bits() {
        assert_eq!(LetterMask::full(12).bits(), 0xFFF);
        assert_eq!(LetterMask::full(12).count(), 12);
        assert_eq!(LetterMask::full(0), LetterMask::EMPTY);
        assert_eq!(LetterMask::full(32).bits(), u32::MAX);
    }

    #[test]
    fn union_and_count() {
        let a = LetterMask::single(0) | LetterMask::single(3);
        let b = LetterMask::single(3) | LetterMask::single(5);
        let both = a | b;
        assert_eq!(both.count(), 3);
        assert!(both.contains(5));
        assert!(!both.contains(1));
    }

    #[test]
    fn new_bits_ignores_already_covered() {
        let covered = LetterMask::new(0b1010);
        assert!(covered.new_bits(LetterMask::new(0b1000)).is_empty());
        assert_eq!(covered.new_bits(LetterMask::new(0b0101)).count(), 2);
    }

    #[test]
    fn covers_is_superset_test() {
        let full = LetterMask::full(4);
        assert!(full.covers(LetterMask::new(0b0110)));
        assert!(!LetterMask::new(0b0110).covers(full));
        assert!(LetterMask::EMPTY.covers(LetterMask::EMPTY));
    }

    #[test]
    fn iter_bits_ascending() {
        let mask = LetterMask::new(0b1001_0010);
        let bits: Vec<usize> = mask.iter_bits().collect();
        assert_eq!(bits, vec![1, 4, 7]);
    }

    #[test]
    fn or_assign_accumulates() {
        let mut mask = LetterMask::EMPTY;
        mask |= LetterMask::single(2);
        mask |= LetterMask::single(2);
        assert_eq!(mask.count(), 1);
    }
}
