//! Word lists for Letter Boxed solving
//!
//! Dictionaries come from a file on disk (normally the system word list) or
//! from the small sample list compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{SAMPLE_WORDS, SAMPLE_WORDS_COUNT};

/// Default dictionary location on Unix systems
pub const SYSTEM_WORDLIST: &str = "/usr/share/dict/words";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_count_matches_const() {
        assert_eq!(SAMPLE_WORDS.len(), SAMPLE_WORDS_COUNT);
    }

    #[test]
    fn sample_words_are_normalized() {
        for &word in SAMPLE_WORDS {
            assert!(!word.is_empty());
            assert!(
                word.bytes().all(|b| b.is_ascii_uppercase()),
                "Word '{word}' is not uppercase ASCII"
            );
        }
    }

    #[test]
    fn sample_words_are_unique() {
        let unique: std::collections::HashSet<_> = SAMPLE_WORDS.iter().collect();
        assert_eq!(unique.len(), SAMPLE_WORDS.len());
    }
}
