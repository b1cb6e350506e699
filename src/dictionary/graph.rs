//! Transition graph over legal words
//!
//! Words are indexed by the bit position of their first and last letters, so
//! the solver can find every continuation of a chain in O(1) and analysis can
//! see which letters a chain can arrive at. Each word's
//! coverage mask is computed once here and reused throughout the search.

use super::validator::ValidWordSet;
use crate::core::{LetterMask, Puzzle, Word};
use log::debug;

/// Index of a word inside a [`TransitionGraph`]
pub type WordId = usize;

/// A legal word with its precomputed search data
#[derive(Debug, Clone)]
pub struct GraphWord {
    word: Word,
    mask: LetterMask,
    last: usize,
}

impl GraphWord {
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Puzzle letters this word contains
    #[inline]
    #[must_use]
    pub const fn mask(&self) -> LetterMask {
        self.mask
    }

    /// Bit position of the last letter
    #[inline]
    #[must_use]
    pub const fn last(&self) -> usize {
        self.last
    }
}

/// Adjacency structure for chaining legal words
///
/// Nodes are puzzle letters; each letter lists the words that start and end
/// with it. Word ids follow dictionary order and every list is in ascending id
/// order, which keeps the search deterministic.
#[derive(Debug, Clone)]
pub struct TransitionGraph {
    words: Vec<GraphWord>,
    start_index: Vec<Vec<WordId>>,
    end_index: Vec<Vec<WordId>>,
    full_mask: LetterMask,
    reachable_mask: LetterMask,
    max_distinct: u32,
}

impl TransitionGraph {
    /// Build the graph in a single pass over the legal words
    ///
    /// Words containing a letter outside the puzzle are skipped; a
    /// `ValidWordSet` built for the same puzzle never has any.
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::Puzzle;
    /// use letter_boxed::dictionary::{TransitionGraph, ValidWordSet};
    ///
    /// let puzzle: Puzzle = "ABC DEF GHI JKL".parse().unwrap();
    /// let valid = ValidWordSet::build(&puzzle, ["ADGJ", "JBEHK", "KCFIL"], 3);
    /// let graph = TransitionGraph::build(&puzzle, &valid);
    ///
    /// // J is bit 9: only JBEHK starts there
    /// assert_eq!(graph.starting_with(9), &[1]);
    /// assert_eq!(graph.max_distinct(), 5);
    /// ```
    #[must_use]
    pub fn build(puzzle: &Puzzle, valid: &ValidWordSet) -> Self {
        let letter_count = puzzle.letter_count();
        let mut words = Vec::with_capacity(valid.len());
        let mut start_index = vec![Vec::new(); letter_count];
        let mut end_index = vec![Vec::new(); letter_count];
        let mut reachable_mask = LetterMask::EMPTY;
        let mut max_distinct = 0;

        for word in valid.words() {
            let Some(mask) = word_mask(puzzle, word) else {
                continue;
            };
            let (Some(first), Some(last)) = (
                puzzle.bit_index(word.first_letter()),
                puzzle.bit_index(word.last_letter()),
            ) else {
                continue;
            };

            let id = words.len();
            start_index[first].push(id);
            end_index[last].push(id);
            reachable_mask |= mask;
            max_distinct = max_distinct.max(mask.count());

            words.push(GraphWord {
                word: word.clone(),
                mask,
                last,
            });
        }

        debug!(
            "transition graph: {} words, max {} distinct letters per word, {}/{} letters reachable",
            words.len(),
            max_distinct,
            reachable_mask.count(),
            letter_count
        );

        Self {
            words,
            start_index,
            end_index,
            full_mask: puzzle.full_mask(),
            reachable_mask,
            max_distinct,
        }
    }

    /// Number of words in the graph
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

    #[inline]
    #[must_use]
    pub fn word(&self, id: WordId) -> &GraphWord {
        &self.words[id]
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[GraphWord] {
        &self.words
    }

    /// Ids of words whose first letter has bit position `bit`
    #[inline]
    #[must_use]
    pub fn starting_with(&self, bit: usize) -> &[WordId] {
        self.start_index.get(bit).map_or(&[], Vec::as_slice)
    }

    /// Ids of words whose last letter has bit position `bit`
    #[inline]
    #[must_use]
    pub fn ending_with(&self, bit: usize) -> &[WordId] {
        self.end_index.get(bit).map_or(&[], Vec::as_slice)
    }

    /// Mask with every puzzle letter set
    #[inline]
    #[must_use]
    pub const fn full_mask(&self) -> LetterMask {
        self.full_mask
    }

    /// Union of all word masks
    ///
    /// If this is not the full mask, some letter appears in no legal word and
    /// the puzzle cannot be solved at any depth.
    #[inline]
    #[must_use]
    pub const fn reachable_mask(&self) -> LetterMask {
        self.reachable_mask
    }

    /// Largest number of distinct puzzle letters in one word
    #[inline]
    #[must_use]
    pub const fn max_distinct(&self) -> u32 {
        self.max_distinct
    }

    /// Upper bound on new letters a word can add after the first word
    ///
    /// A chained word starts on a letter that is already covered.
    #[inline]
    #[must_use]
    pub const fn max_chained_gain(&self) -> u32 {
        self.max_distinct.saturating_sub(1)
    }

    /// True if some word can follow `id` in a chain
    #[inline]
    #[must_use]
    pub fn has_successor(&self, id: WordId) -> bool {
        !self.starting_with(self.words[id].last).is_empty()
    }
}

/// Coverage mask of a word, or `None` if it uses a foreign letter
fn word_mask(puzzle: &Puzzle, word: &Word) -> Option<LetterMask> {
    word.letters().try_fold(LetterMask::EMPTY, |mask, letter| {
        puzzle
            .bit_index(letter)
            .map(|bit| mask | LetterMask::single(bit))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle() -> Puzzle {
        "ABC DEF GHI JKL".parse().unwrap()
    }

    fn graph(words: &[&str]) -> TransitionGraph {
        let puzzle = puzzle();
        let valid = ValidWordSet::build(&puzzle, words, 3);
        TransitionGraph::build(&puzzle, &valid)
    }

    #[test]
    fn masks_cover_distinct_letters() {
        let graph = graph(&["ADGJ", "ADADA"]);
        assert_eq!(graph.word(0).mask(), LetterMask::new(0b10_0100_1001));
        assert_eq!(graph.word(1).mask().count(), 2);
    }

    #[test]
    fn start_and_end_indexes() {
        let graph = graph(&["ADGJ", "JBEHK", "KCFIL", "JAD"]);
        // A=0, J=9, K=10, L=11, D=3
        assert_eq!(graph.starting_with(0), &[0]);
        assert_eq!(graph.starting_with(9), &[1, 3]);
        assert_eq!(graph.starting_with(10), &[2]);
        assert!(graph.starting_with(11).is_empty());
        assert_eq!(graph.ending_with(9), &[0]);
        assert_eq!(graph.ending_with(3), &[3]);
        assert_eq!(graph.ending_with(11), &[2]);
        assert!(graph.ending_with(0).is_empty());
    }

    #[test]
    fn out_of_range_lookup_is_empty() {
        let graph = graph(&["ADGJ"]);
        assert!(graph.starting_with(40).is_empty());
        assert!(graph.ending_with(40).is_empty());
    }

    #[test]
    fn max_distinct_and_chained_gain() {
        let graph = graph(&["ADGJ", "JBEHK", "JAD"]);
        assert_eq!(graph.max_distinct(), 5);
        assert_eq!(graph.max_chained_gain(), 4);
    }

    #[test]
    fn reachable_mask_reports_unused_letters() {
        let graph = graph(&["ADGJ", "JBEHK"]);
        let puzzle = puzzle();
        let missing = puzzle.missing_letters(graph.reachable_mask());
        let missing: String = missing.iter().map(|l| l.as_char()).collect();
        assert_eq!(missing, "CFIL");
    }

    #[test]
    fn successors_follow_last_letter() {
        let graph = graph(&["ADGJ", "JBEHK", "KCFIL"]);
        assert!(graph.has_successor(0));
        assert!(graph.has_successor(1));
        assert!(!graph.has_successor(2));
    }

    #[test]
    fn empty_word_set_builds_empty_graph() {
        let graph = graph(&[]);
        assert!(graph.is_empty());
        assert_eq!(graph.max_distinct(), 0);
        assert_eq!(graph.max_chained_gain(), 0);
        assert_eq!(graph.reachable_mask(), LetterMask::EMPTY);
    }
}
