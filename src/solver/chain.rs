//! Word chains and solutions
//!
//! A chain is an ordered list of words where each word starts with the last
//! letter of the previous one. A solution is a chain whose coverage includes
//! every puzzle letter.

use crate::core::{LetterMask, Puzzle, Word};
use crate::dictionary::{TransitionGraph, WordId, is_legal};
use std::fmt;

/// An ordered sequence of words with their combined letter coverage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    words: Vec<Word>,
    coverage: LetterMask,
}

impl Chain {
    /// Resolve graph word ids into a chain
    pub(crate) fn from_ids(graph: &TransitionGraph, ids: &[WordId]) -> Self {
        let mut coverage = LetterMask::EMPTY;
        let words = ids
            .iter()
            .map(|&id| {
                let node = graph.word(id);
                coverage |= node.mask();
                node.word().clone()
            })
            .collect();
        Self { words, coverage }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words in the chain
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

    /// Union of the letters all words contribute
    #[inline]
    #[must_use]
    pub const fn coverage(&self) -> LetterMask {
        self.coverage
    }

    /// True if every word starts with the previous word's last letter
    #[must_use]
    pub fn is_linked(&self) -> bool {
        self.words
            .windows(2)
            .all(|pair| pair[0].last_letter() == pair[1].first_letter())
    }

    /// Check every solution property against a puzzle
    ///
    /// The chain must be non-empty and linked, every word must be legal for the
    /// puzzle, and together the words must use every puzzle letter.
    #[must_use]
    pub fn is_solution_for(&self, puzzle: &Puzzle, min_length: usize) -> bool {
        let letters_used = self
            .words
            .iter()
            .flat_map(Word::letters)
            .try_fold(LetterMask::EMPTY, |mask, letter| {
                puzzle
                    .bit_of(letter)
                    .ok()
                    .map(|bit| mask | LetterMask::single(bit))
            });

        !self.is_empty()
            && self.is_linked()
            && self
                .words
                .iter()
                .all(|word| is_legal(puzzle, word.text(), min_length))
            && letters_used == Some(puzzle.full_mask())
    }

    /// Total number of letters across all words
    #[must_use]
    pub fn letter_total(&self) -> usize {
        self.words.iter().map(Word::len).sum()
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                write!(f, " - ")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}
