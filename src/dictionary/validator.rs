//! Word validation against a puzzle
//!
//! Filters a raw dictionary down to the words that can be played: long enough,
//! made only of puzzle letters, and never placing two letters from the same
//! side next to each other. Illegal words are the common case and are simply
//! counted, not reported as errors.

use crate::core::{Letter, Puzzle, Word};
use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Minimum word length accepted by default
pub const MIN_WORD_LENGTH: usize = 3;

/// Check whether a candidate string is a legal word for the puzzle
///
/// Runs in O(word length) using the puzzle's letter-to-side table. Case is
/// ignored.
///
/// # Examples
/// ```
/// use letter_boxed::core::Puzzle;
/// use letter_boxed::dictionary::is_legal;
///
/// let puzzle: Puzzle = "ABC DEF GHI JKL".parse().unwrap();
/// assert!(is_legal(&puzzle, "ADG", 3));
/// assert!(!is_legal(&puzzle, "ABD", 3)); // A and B share a side
/// assert!(!is_legal(&puzzle, "ADZ", 3)); // Z is not in the puzzle
/// assert!(!is_legal(&puzzle, "AD", 3)); // too short
/// ```
#[must_use]
pub fn is_legal(puzzle: &Puzzle, candidate: &str, min_length: usize) -> bool {
    if candidate.is_empty() || candidate.len() < min_length {
        return false;
    }

    let mut previous_side = None;
    for byte in candidate.bytes() {
        let Some(side) = Letter::from_byte(byte).and_then(|letter| puzzle.side_index(letter))
        else {
            return false;
        };
        if previous_side == Some(side) {
            return false;
        }
        previous_side = Some(side);
    }

    true
}

/// The legal words of a dictionary for one puzzle
///
/// Words keep first-occurrence dictionary order, which fixes the order the
/// solver explores them in. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct ValidWordSet {
    words: Vec<Word>,
    examined: usize,
    rejected: usize,
}

impl ValidWordSet {
    /// Validate candidates one at a time
    ///
    /// Duplicate candidates collapse onto their first occurrence.
    pub fn build<I, S>(puzzle: &Puzzle, candidates: I, min_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut examined = 0;
        let legal = candidates.into_iter().filter_map(|candidate| {
            examined += 1;
            let candidate = candidate.as_ref();
            if is_legal(puzzle, candidate, min_length) {
                Word::new(candidate).ok()
            } else {
                None
            }
        });
        let words = dedup_in_order(legal);

        Self::finish(words, examined)
    }

    /// Validate candidates in parallel
    ///
    /// Produces the same words in the same order as [`ValidWordSet::build`].
    pub fn build_parallel<S>(puzzle: &Puzzle, candidates: &[S], min_length: usize) -> Self
    where
        S: AsRef<str> + Sync,
    {
        let legal: Vec<Word> = candidates
            .par_iter()
            .filter_map(|candidate| {
                let candidate = candidate.as_ref();
                if is_legal(puzzle, candidate, min_length) {
                    Word::new(candidate).ok()
                } else {
                    None
                }
            })
            .collect();

        Self::finish(dedup_in_order(legal), candidates.len())
    }

    fn finish(words: Vec<Word>, examined: usize) -> Self {
        let rejected = examined.saturating_sub(words.len());
        debug!(
            "validated {examined} candidates: {} legal, {rejected} rejected or duplicate",
            words.len()
        );
        Self {
            words,
            examined,
            rejected,
        }
    }

    /// Legal words in dictionary order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of candidates looked at
    #[inline]
    #[must_use]
    pub const fn examined(&self) -> usize {
        self.examined
    }

    /// Number of candidates not kept (illegal or duplicate)
    #[inline]
    #[must_use]
    pub const fn rejected(&self) -> usize {
        self.rejected
    }
}

fn dedup_in_order(words: impl IntoIterator<Item = Word>) -> Vec<Word> {
    let mut seen: FxHashSet<Word> = FxHashSet::default();
    words
        .into_iter()
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle() -> Puzzle {
        "ABC DEF GHI JKL".parse().unwrap()
    }

    fn texts(set: &ValidWordSet) -> Vec<&str> {
        set.words().iter().map(Word::text).collect()
    }

    #[test]
    fn legal_word_accepted() {
        assert!(is_legal(&puzzle(), "ADGJ", MIN_WORD_LENGTH));
        assert!(is_legal(&puzzle(), "adgj", MIN_WORD_LENGTH));
        assert!(is_legal(&puzzle(), "ADA", MIN_WORD_LENGTH)); // letters may repeat
    }

    #[test]
    fn same_side_adjacency_rejected() {
        assert!(!is_legal(&puzzle(), "ABD", MIN_WORD_LENGTH));
        assert!(!is_legal(&puzzle(), "DGGJ", MIN_WORD_LENGTH)); // doubled letter
        assert!(!is_legal(&puzzle(), "ADGJKA", MIN_WORD_LENGTH));
    }

    #[test]
    fn foreign_letters_rejected() {
        assert!(!is_legal(&puzzle(), "ADZ", MIN_WORD_LENGTH));
        assert!(!is_legal(&puzzle(), "AD-G", MIN_WORD_LENGTH));
    }

    #[test]
    fn short_words_rejected() {
        assert!(!is_legal(&puzzle(), "AD", MIN_WORD_LENGTH));
        assert!(!is_legal(&puzzle(), "", 0));
        assert!(is_legal(&puzzle(), "AD", 2));
    }

    #[test]
    fn build_filters_and_counts() {
        let set = ValidWordSet::build(&puzzle(), ["ADG", "AB", "ABD", "XYZ", "JAD"], 3);
        assert_eq!(texts(&set), vec!["ADG", "JAD"]);
        assert_eq!(set.examined(), 5);
        assert_eq!(set.rejected(), 3);
    }

    #[test]
    fn duplicates_collapse_to_first() {
        let set = ValidWordSet::build(&puzzle(), ["JAD", "ADG", "jad", "JAD"], 3);
        assert_eq!(texts(&set), vec!["JAD", "ADG"]);
        assert_eq!(set.examined(), 4);
    }

    #[test]
    fn two_letter_dictionary_is_empty() {
        let set = ValidWordSet::build(&puzzle(), ["AB"], MIN_WORD_LENGTH);
        assert!(set.is_empty());
        assert_eq!(set.rejected(), 1);
    }

    #[test]
    fn parallel_matches_sequential() {
        let candidates: Vec<String> = ["ADG", "GAD", "ABD", "LAD", "ADG", "KID", "JIG", "DAL"]
            .iter()
            .cycle()
            .take(400)
            .map(|s| (*s).to_string())
            .collect();
        let sequential = ValidWordSet::build(&puzzle(), &candidates, 3);
        let parallel = ValidWordSet::build_parallel(&puzzle(), &candidates, 3);
        assert_eq!(sequential.words(), parallel.words());
        assert_eq!(sequential.examined(), parallel.examined());
    }

    #[test]
    fn every_accepted_word_respects_rules() {
        let puzzle = puzzle();
        let candidates = ["ADGJ", "JBEHK", "KCFIL", "ABC", "LEG", "HELD", "CLAD"];
        let set = ValidWordSet::build(&puzzle, candidates, 3);
        for word in set.words() {
            let letters: Vec<Letter> = word.letters().collect();
            assert!(letters.iter().all(|&l| puzzle.contains(l)));
            for pair in letters.windows(2) {
                assert!(!puzzle.is_same_side(pair[0], pair[1]), "{word}");
            }
        }
    }
}
