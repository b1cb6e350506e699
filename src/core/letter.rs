//! Letter representation
//!
//! A `Letter` is a single ASCII alphabetic character stored in uppercase form.
//! Its ordinal (0-25) indexes the fixed-size lookup tables in `Puzzle`.

use std::fmt;

/// Size of the closed alphabet every lookup table is indexed by
pub const ALPHABET_SIZE: usize = 26;

/// A single uppercase ASCII letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Create a letter from an ASCII byte, normalizing case
    ///
    /// Returns `None` for anything that is not an ASCII letter.
    #[inline]
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        if byte.is_ascii_alphabetic() {
            Some(Self(byte.to_ascii_uppercase()))
        } else {
            None
        }
    }

    /// Create a letter from a char, normalizing case
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::Letter;
    ///
    /// let letter = Letter::from_char('q').unwrap();
    /// assert_eq!(letter.as_char(), 'Q');
    /// assert!(Letter::from_char('7').is_none());
    /// ```
    #[inline]
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        u8::try_from(ch).ok().and_then(Self::from_byte)
    }

    /// Position in the alphabet (A = 0, Z = 25)
    #[inline]
    #[must_use]
    pub const fn ordinal(self) -> usize {
        (self.0 - b'A') as usize
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_is_normalized() {
        assert_eq!(Letter::from_byte(b'a'), Letter::from_byte(b'A'));
        assert_eq!(Letter::from_char('z').unwrap().as_char(), 'Z');
    }

    #[test]
    fn non_letters_rejected() {
        assert!(Letter::from_byte(b'1').is_none());
        assert!(Letter::from_byte(b'\'').is_none());
        assert!(Letter::from_char(' ').is_none());
        assert!(Letter::from_char('é').is_none());
    }

    #[test]
    fn ordinals_cover_alphabet() {
        assert_eq!(Letter::from_char('A').unwrap().ordinal(), 0);
        assert_eq!(Letter::from_char('m').unwrap().ordinal(), 12);
        assert_eq!(Letter::from_char('Z').unwrap().ordinal(), ALPHABET_SIZE - 1);
    }

    #[test]
    fn letter_display() {
        let letter = Letter::from_char('k').unwrap();
        assert_eq!(format!("{letter}"), "K");
    }
}
