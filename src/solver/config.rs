//! Solver configuration

use crate::dictionary::MIN_WORD_LENGTH;

/// Default maximum number of words in a chain
pub const DEFAULT_MAX_WORDS: usize = 5;

/// Settings consumed by the validation and search pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Longest chain the search will try before giving up
    pub max_words: usize,
    /// Shortest dictionary word considered legal
    pub min_word_length: usize,
    /// Use rayon for validation and for exploring first words
    pub parallel: bool,
}

impl SolverConfig {
    #[must_use]
    pub const fn new(max_words: usize) -> Self {
        Self {
            max_words,
            min_word_length: MIN_WORD_LENGTH,
            parallel: true,
        }
    }

    #[must_use]
    pub const fn with_min_word_length(mut self, min_word_length: usize) -> Self {
        self.min_word_length = min_word_length;
        self
    }

    #[must_use]
    pub const fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WORDS)
    }
}
