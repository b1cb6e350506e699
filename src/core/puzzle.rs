//! Letter Boxed puzzle geometry
//!
//! A puzzle is an ordered list of sides, each holding a few letters. Letters on
//! the same side may never be adjacent inside a word. Every letter maps to its
//! side and to a bit in the coverage mask through 26-entry tables indexed by
//! letter ordinal.

use super::letter::{ALPHABET_SIZE, Letter};
use super::mask::LetterMask;
use std::fmt;
use std::str::FromStr;

/// Why a puzzle definition was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidPuzzle {
    NoSides,
    EmptySide(usize),
    DuplicateLetter(Letter),
    NotALetter(char),
}

/// Error type for puzzle construction and lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// Side/letter invariants violated at construction
    InvalidPuzzle(InvalidPuzzle),
    /// Lookup of a letter that is not on any side
    UnknownLetter(Letter),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPuzzle(InvalidPuzzle::NoSides) => {
                write!(f, "Invalid puzzle: at least one side is required")
            }
            Self::InvalidPuzzle(InvalidPuzzle::EmptySide(side)) => {
                write!(f, "Invalid puzzle: side {} has no letters", side + 1)
            }
            Self::InvalidPuzzle(InvalidPuzzle::DuplicateLetter(letter)) => {
                write!(f, "Invalid puzzle: letter {letter} appears more than once")
            }
            Self::InvalidPuzzle(InvalidPuzzle::NotALetter(ch)) => {
                write!(f, "Invalid puzzle: '{ch}' is not an ASCII letter")
            }
            Self::UnknownLetter(letter) => write!(f, "Letter {letter} is not part of the puzzle"),
        }
    }
}

impl std::error::Error for PuzzleError {}

impl From<InvalidPuzzle> for PuzzleError {
    fn from(reason: InvalidPuzzle) -> Self {
        Self::InvalidPuzzle(reason)
    }
}

/// A Letter Boxed puzzle
///
/// Immutable once built. The canonical letter order is side order, then
/// position within the side; bit `i` of a `LetterMask` is `letters()[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    sides: Vec<Vec<Letter>>,
    letters: Vec<Letter>,
    side_of: [Option<u8>; ALPHABET_SIZE],
    bit_of: [Option<u8>; ALPHABET_SIZE],
}

impl Puzzle {
    /// Create a puzzle from its sides
    ///
    /// # Errors
    /// Returns `PuzzleError::InvalidPuzzle` if:
    /// - There are no sides
    /// - A side is empty
    /// - A letter appears more than once, on the same or different sides
    pub fn new(sides: Vec<Vec<Letter>>) -> Result<Self, PuzzleError> {
        if sides.is_empty() {
            return Err(InvalidPuzzle::NoSides.into());
        }

        let mut side_of = [None; ALPHABET_SIZE];
        let mut bit_of = [None; ALPHABET_SIZE];
        let mut letters = Vec::with_capacity(sides.iter().map(Vec::len).sum());

        for (side_index, side) in sides.iter().enumerate() {
            if side.is_empty() {
                return Err(InvalidPuzzle::EmptySide(side_index).into());
            }
            for &letter in side {
                let slot = letter.ordinal();
                if side_of[slot].is_some() {
                    return Err(InvalidPuzzle::DuplicateLetter(letter).into());
                }
                // At most 26 distinct letters, so both indices fit in a u8
                side_of[slot] = Some(side_index as u8);
                bit_of[slot] = Some(letters.len() as u8);
                letters.push(letter);
            }
        }

        Ok(Self {
            sides,
            letters,
            side_of,
            bit_of,
        })
    }

    /// Create a puzzle from one string per side
    ///
    /// # Errors
    /// Returns `PuzzleError::InvalidPuzzle` for non-letter characters and for
    /// every case listed on [`Puzzle::new`].
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::Puzzle;
    ///
    /// let puzzle = Puzzle::from_sides(&["abc", "def", "ghi", "jkl"]).unwrap();
    /// assert_eq!(puzzle.letter_count(), 12);
    /// assert_eq!(puzzle.to_string(), "ABC-DEF-GHI-JKL");
    ///
    /// assert!(Puzzle::from_sides(&["abc", "cde"]).is_err());
    /// ```
    pub fn from_sides<S: AsRef<str>>(sides: &[S]) -> Result<Self, PuzzleError> {
        let sides = sides
            .iter()
            .map(|side| {
                side.as_ref()
                    .chars()
                    .map(|ch| Letter::from_char(ch).ok_or(InvalidPuzzle::NotALetter(ch)))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(sides)
    }

    /// All distinct letters in canonical order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn sides(&self) -> &[Vec<Letter>] {
        &self.sides
    }

    #[inline]
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.letters.len()
    }

    /// Check membership without raising an error
    #[inline]
    #[must_use]
    pub const fn contains(&self, letter: Letter) -> bool {
        self.side_of[letter.ordinal()].is_some()
    }

    /// Index of the side holding `letter`
    ///
    /// # Errors
    /// Returns `PuzzleError::UnknownLetter` if the letter is not on any side.
    #[inline]
    pub fn side_of(&self, letter: Letter) -> Result<usize, PuzzleError> {
        self.side_index(letter)
            .ok_or(PuzzleError::UnknownLetter(letter))
    }

    /// True iff both letters are on the same side
    ///
    /// Letters outside the puzzle are never on the same side as anything.
    #[inline]
    #[must_use]
    pub fn is_same_side(&self, a: Letter, b: Letter) -> bool {
        match (self.side_index(a), self.side_index(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    /// Bit position of `letter` in coverage masks
    ///
    /// # Errors
    /// Returns `PuzzleError::UnknownLetter` if the letter is not on any side.
    #[inline]
    pub fn bit_of(&self, letter: Letter) -> Result<usize, PuzzleError> {
        self.bit_index(letter)
            .ok_or(PuzzleError::UnknownLetter(letter))
    }

    /// Mask with a bit set for every puzzle letter
    #[inline]
    #[must_use]
    pub fn full_mask(&self) -> LetterMask {
        LetterMask::full(self.letters.len())
    }

    /// Letter owning bit `bit` of a coverage mask
    #[inline]
    #[must_use]
    pub fn letter_at(&self, bit: usize) -> Option<Letter> {
        self.letters.get(bit).copied()
    }

    /// Puzzle letters whose bits are not set in `mask`
    #[must_use]
    pub fn missing_letters(&self, mask: LetterMask) -> Vec<Letter> {
        mask.new_bits(self.full_mask())
            .iter_bits()
            .filter_map(|bit| self.letter_at(bit))
            .collect()
    }

    #[inline]
    pub(crate) fn side_index(&self, letter: Letter) -> Option<usize> {
        self.side_of[letter.ordinal()].map(usize::from)
    }

    #[inline]
    pub(crate) fn bit_index(&self, letter: Letter) -> Option<usize> {
        self.bit_of[letter.ordinal()].map(usize::from)
    }
}

impl FromStr for Puzzle {
    type Err = PuzzleError;

    /// Parse sides separated by whitespace, `,`, `-` or `/`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sides: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || matches!(c, ',' | '-' | '/'))
            .filter(|side| !side.is_empty())
            .collect();
        Self::from_sides(&sides)
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, side) in self.sides.iter().enumerate() {
            if i > 0 {
                write!(f, "-")?;
            }
            for letter in side {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}
