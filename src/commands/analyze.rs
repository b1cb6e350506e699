//! Puzzle analysis command
//!
//! Reports what a dictionary offers for one puzzle without searching: how many
//! words are legal, how much of the box single words cover, and which letters
//! can never be used, never be left from or never be arrived at.

use crate::core::{Letter, Puzzle, PuzzleError};
use crate::dictionary::{TransitionGraph, ValidWordSet};
use crate::solver::SolverConfig;
use std::collections::BTreeMap;

/// Result of analyzing a puzzle
pub struct AnalysisResult {
    pub puzzle: Puzzle,
    pub examined: usize,
    pub valid: usize,
    pub rejected: usize,
    /// Valid words keyed by number of distinct puzzle letters they use
    pub by_distinct: BTreeMap<u32, usize>,
    /// First word with the most distinct letters
    pub best_word: Option<(String, u32)>,
    /// Words whose last letter starts no legal word
    pub dead_end_words: usize,
    /// Letters no legal word starts with
    pub no_outgoing: Vec<Letter>,
    /// Letters no legal word ends with
    pub no_incoming: Vec<Letter>,
    /// Words starting on a letter in `no_incoming`; they can only open a chain
    pub opening_only_words: usize,
    /// Letters no legal word contains; any of these makes the puzzle unsolvable
    pub unusable: Vec<Letter>,
    /// Fewest words that could cover the puzzle given the best word sizes
    pub min_words_lower_bound: Option<usize>,
}

impl AnalysisResult {
    #[must_use]
    pub fn is_provably_unsolvable(&self) -> bool {
        !self.unusable.is_empty()
    }
}

/// Analyze a dictionary against a puzzle
///
/// Only `min_word_length` and `parallel` are read from `config`.
///
/// # Errors
///
/// Returns an error if the puzzle text does not describe a valid puzzle.
pub fn analyze_puzzle<S>(
    puzzle: &str,
    dictionary: &[S],
    config: SolverConfig,
) -> Result<AnalysisResult, PuzzleError>
where
    S: AsRef<str> + Sync,
{
    let puzzle: Puzzle = puzzle.parse()?;
    let min_length = config.min_word_length;
    let valid = if config.parallel {
        ValidWordSet::build_parallel(&puzzle, dictionary, min_length)
    } else {
        ValidWordSet::build(&puzzle, dictionary, min_length)
    };
    let graph = TransitionGraph::build(&puzzle, &valid);

    let mut by_distinct = BTreeMap::new();
    let mut best_word: Option<(String, u32)> = None;
    for node in graph.words() {
        let distinct = node.mask().count();
        *by_distinct.entry(distinct).or_insert(0) += 1;
        if best_word.as_ref().is_none_or(|(_, best)| distinct > *best) {
            best_word = Some((node.word().text().to_string(), distinct));
        }
    }

    let dead_end_words = (0..graph.len())
        .filter(|&id| !graph.has_successor(id))
        .count();
    let no_outgoing = (0..puzzle.letter_count())
        .filter(|&bit| graph.starting_with(bit).is_empty())
        .filter_map(|bit| puzzle.letter_at(bit))
        .collect();
    let no_incoming: Vec<Letter> = (0..puzzle.letter_count())
        .filter(|&bit| graph.ending_with(bit).is_empty())
        .filter_map(|bit| puzzle.letter_at(bit))
        .collect();
    let opening_only_words = (0..puzzle.letter_count())
        .filter(|&bit| graph.ending_with(bit).is_empty())
        .map(|bit| graph.starting_with(bit).len())
        .sum();
    let unusable = puzzle.missing_letters(graph.reachable_mask());

    Ok(AnalysisResult {
        examined: valid.examined(),
        valid: valid.len(),
        rejected: valid.rejected(),
        by_distinct,
        best_word,
        dead_end_words,
        no_outgoing,
        no_incoming,
        opening_only_words,
        unusable,
        min_words_lower_bound: lower_bound(&graph),
        puzzle,
    })
}

/// Smallest word count the coverage bound does not rule out
///
/// The first word adds at most `max_distinct` letters and each chained word at
/// most one fewer, since its first letter is already covered.
fn lower_bound(graph: &TransitionGraph) -> Option<usize> {
    let needed = graph.full_mask().count();
    let first = graph.max_distinct();
    if graph.is_empty() {
        return None;
    }
    if first >= needed {
        return Some(1);
    }
    let gain = graph.max_chained_gain();
    if gain == 0 {
        return None;
    }
    Some(1 + (needed - first).div_ceil(gain) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &["ADGJ", "JBEHK", "KCFIL", "ABE", "ADG", "AB"];

    fn config() -> SolverConfig {
        SolverConfig::default()
    }

    #[test]
    fn counts_and_histogram() {
        let result = analyze_puzzle("ABC DEF GHI JKL", WORDS, config()).unwrap();
        assert_eq!(result.examined, 6);
        // ABE breaks adjacency, AB is too short
        assert_eq!(result.valid, 4);
        assert_eq!(result.rejected, 2);
        assert_eq!(result.by_distinct.get(&3), Some(&1));
        assert_eq!(result.by_distinct.get(&4), Some(&1));
        assert_eq!(result.by_distinct.get(&5), Some(&2));
        assert_eq!(result.best_word, Some(("JBEHK".to_string(), 5)));
    }

    #[test]
    fn full_coverage_means_nothing_unusable() {
        let result = analyze_puzzle("ABC DEF GHI JKL", WORDS, config()).unwrap();
        assert!(result.unusable.is_empty());
        assert!(!result.is_provably_unsolvable());
    }

    #[test]
    fn reports_letters_without_outgoing_words() {
        let result = analyze_puzzle("ABC DEF GHI JKL", WORDS, config()).unwrap();
        let starts: String = result.no_outgoing.iter().map(|l| l.as_char()).collect();
        // Only A, J and K start words
        assert_eq!(starts, "BCDEFGHIL");
        // ADG ends on a letter nothing starts with, and so does KCFIL
        assert_eq!(result.dead_end_words, 2);
    }

    #[test]
    fn reports_letters_without_incoming_words() {
        let result = analyze_puzzle("ABC DEF GHI JKL", WORDS, config()).unwrap();
        let ends: String = result.no_incoming.iter().map(|l| l.as_char()).collect();
        // Legal words end on G, J, K and L only
        assert_eq!(ends, "ABCDEFHI");
        // ADGJ and ADG start on A, which nothing ends on
        assert_eq!(result.opening_only_words, 2);
    }

    #[test]
    fn unusable_letters_prove_unsolvable() {
        let result = analyze_puzzle("ABC DEF GHI JKL", &["ADGJ", "JBEHK"], config()).unwrap();
        let missing: String = result.unusable.iter().map(|l| l.as_char()).collect();
        assert_eq!(missing, "CFIL");
        assert!(result.is_provably_unsolvable());
    }

    #[test]
    fn lower_bound_from_word_sizes() {
        // Best word has 5 letters, chained words add at most 4: 5 + 4 + 4 >= 12
        let result = analyze_puzzle("ABC DEF GHI JKL", WORDS, config()).unwrap();
        assert_eq!(result.min_words_lower_bound, Some(3));

        let single = analyze_puzzle("ABC DEF GHI JKL", &["ADGJBEHKCFIL"], config()).unwrap();
        assert_eq!(single.min_words_lower_bound, Some(1));

        let empty = analyze_puzzle("ABC DEF GHI JKL", &["AB"], config()).unwrap();
        assert_eq!(empty.min_words_lower_bound, None);
        assert_eq!(empty.best_word, None);
    }

    #[test]
    fn invalid_puzzle_is_an_error() {
        assert!(analyze_puzzle("AB1 CDE", WORDS, config()).is_err());
    }

    #[test]
    fn sequential_analysis_matches_parallel() {
        let words = ["ADGJ", "JBEHK", "ADGJ", "KCFIL", "ABE", "adg", "ADG"];
        let parallel = analyze_puzzle("ABC DEF GHI JKL", &words, config()).unwrap();
        let sequential =
            analyze_puzzle("ABC DEF GHI JKL", &words, config().sequential()).unwrap();
        assert_eq!(sequential.examined, parallel.examined);
        assert_eq!(sequential.valid, parallel.valid);
        assert_eq!(sequential.rejected, parallel.rejected);
        assert_eq!(sequential.by_distinct, parallel.by_distinct);
        assert_eq!(sequential.best_word, parallel.best_word);
        assert_eq!(sequential.valid, 4);
    }

    #[test]
    fn min_word_length_comes_from_config() {
        let result =
            analyze_puzzle("ABC DEF GHI JKL", WORDS, config().with_min_word_length(5)).unwrap();
        // Only JBEHK and KCFIL reach five letters
        assert_eq!(result.valid, 2);
    }
}
