//! Dictionary word representation
//!
//! A Word stores an uppercase ASCII letter sequence. First and last letters
//! are derived on demand.

use super::letter::Letter;
use std::fmt;

/// A non-empty word made only of ASCII letters
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string, normalizing to uppercase
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::Word;
    ///
    /// let word = Word::new("boxed").unwrap();
    /// assert_eq!(word.text(), "BOXED");
    /// assert_eq!(word.first_letter().as_char(), 'B');
    /// assert_eq!(word.last_letter().as_char(), 'D');
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("don't").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_ascii_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Iterate the letters in order
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.text.bytes().filter_map(Letter::from_byte)
    }

    #[inline]
    #[must_use]
    pub fn first_letter(&self) -> Letter {
        self.letter_at(0)
    }

    #[inline]
    #[must_use]
    pub fn last_letter(&self) -> Letter {
        self.letter_at(self.text.len() - 1)
    }

    fn letter_at(&self, index: usize) -> Letter {
        Letter::from_byte(self.text.as_bytes()[index]).expect("word bytes validated as letters")
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("PUZZLE").unwrap();
        assert_eq!(word.text(), "PUZZLE");
        assert_eq!(word.len(), 6);
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("puzzle").unwrap();
        assert_eq!(word.text(), "PUZZLE");

        let word2 = Word::new("PuZzLe").unwrap();
        assert_eq!(word2.text(), "PUZZLE");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("abc1"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("ab c"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("it's"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("café"), Err(WordError::NonAscii));
    }

    #[test]
    fn first_and_last_letters() {
        let word = Word::new("chain").unwrap();
        assert_eq!(word.first_letter(), Letter::from_char('C').unwrap());
        assert_eq!(word.last_letter(), Letter::from_char('N').unwrap());

        let single = Word::new("a").unwrap();
        assert_eq!(single.first_letter(), single.last_letter());
    }

    #[test]
    fn letters_iterates_in_order() {
        let word = Word::new("box").unwrap();
        let letters: Vec<char> = word.letters().map(Letter::as_char).collect();
        assert_eq!(letters, vec!['B', 'O', 'X']);
    }

    #[test]
    fn word_display() {
        let word = Word::new("letter").unwrap();
        assert_eq!(format!("{word}"), "LETTER");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("boxed").unwrap();
        let word2 = Word::new("BOXED").unwrap();
        let word3 = Word::new("boxes").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}
