//! Puzzle solving command
//!
//! Validates a dictionary against one puzzle, builds the transition graph and
//! runs the bounded search, timing each phase.

use crate::core::{Letter, Puzzle, PuzzleError};
use crate::dictionary::ValidWordSet;
use crate::solver::{Chain, SearchStats, SolveOutcome, Solver, SolverConfig};
use log::info;
use std::time::{Duration, Instant};

/// Configuration for solving a puzzle
pub struct SolveConfig {
    pub puzzle: String,
    pub solver: SolverConfig,
    /// Also list up to this many minimal solutions
    pub list_all: Option<usize>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(puzzle: String, solver: SolverConfig) -> Self {
        Self {
            puzzle,
            solver,
            list_all: None,
        }
    }

    #[must_use]
    pub const fn with_all(mut self, limit: usize) -> Self {
        self.list_all = Some(limit);
        self
    }
}

/// Result of solving a puzzle
pub struct SolveResult {
    pub puzzle: Puzzle,
    pub examined: usize,
    pub valid: usize,
    pub outcome: SolveOutcome,
    /// Minimal solutions in discovery order, when requested
    pub all_solutions: Vec<Chain>,
    pub stats: SearchStats,
    pub validate_time: Duration,
    pub search_time: Duration,
}

impl SolveResult {
    /// Letters the best chain (solution or closest attempt) leaves unused
    #[must_use]
    pub fn missing_letters(&self) -> Vec<Letter> {
        let coverage = match &self.outcome {
            SolveOutcome::Solved(chain) => chain.coverage(),
            SolveOutcome::NoSolutionWithinBound { closest, .. } => {
                closest.as_ref().map(Chain::coverage).unwrap_or_default()
            }
        };
        self.puzzle.missing_letters(coverage)
    }
}

/// Solve a puzzle against a raw dictionary
///
/// # Errors
///
/// Returns an error if the puzzle text does not describe a valid puzzle
/// (no sides, an empty side, a repeated letter or a non-letter character).
pub fn solve_puzzle<S>(config: &SolveConfig, dictionary: &[S]) -> Result<SolveResult, PuzzleError>
where
    S: AsRef<str> + Sync,
{
    let puzzle: Puzzle = config.puzzle.parse()?;
    let min_length = config.solver.min_word_length;

    let validate_start = Instant::now();
    let valid = if config.solver.parallel {
        ValidWordSet::build_parallel(&puzzle, dictionary, min_length)
    } else {
        ValidWordSet::build(&puzzle, dictionary, min_length)
    };
    let solver = Solver::new(&puzzle, &valid, config.solver);
    let validate_time = validate_start.elapsed();
    info!(
        "{puzzle}: {} of {} dictionary words are legal",
        valid.len(),
        valid.examined()
    );

    let search_start = Instant::now();
    let report = solver.solve();
    let mut stats = report.stats;
    let all_solutions = match (config.list_all, report.outcome.solution()) {
        (Some(limit), Some(first)) => solver.solutions_of_length(first.len(), limit, &mut stats),
        _ => Vec::new(),
    };
    let search_time = search_start.elapsed();

    Ok(SolveResult {
        puzzle,
        examined: valid.examined(),
        valid: valid.len(),
        outcome: report.outcome,
        all_solutions,
        stats,
        validate_time,
        search_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::SAMPLE_WORDS;

    const DEMO: &str = "TUL-ECR-IOH-APS";

    #[test]
    fn solves_demo_puzzle_from_sample_words() {
        let config = SolveConfig::new(DEMO.to_string(), SolverConfig::default());
        let result = solve_puzzle(&config, SAMPLE_WORDS).unwrap();

        assert_eq!(result.examined, SAMPLE_WORDS.len());
        assert!(result.valid > 0);
        let chain = result.outcome.solution().unwrap();
        assert_eq!(chain.len(), 3);
        assert!(chain.is_solution_for(&result.puzzle, 3));
        assert!(result.missing_letters().is_empty());
        assert!(result.all_solutions.is_empty());
    }

    #[test]
    fn lists_all_minimal_solutions_on_request() {
        let config = SolveConfig::new(DEMO.to_string(), SolverConfig::default()).with_all(5);
        let result = solve_puzzle(&config, SAMPLE_WORDS).unwrap();

        let first = result.outcome.solution().unwrap();
        assert!(!result.all_solutions.is_empty());
        assert!(result.all_solutions.len() <= 5);
        assert_eq!(&result.all_solutions[0], first);
        assert!(result.all_solutions.iter().all(|c| c.len() == first.len()));
    }

    #[test]
    fn sequential_matches_parallel() {
        let parallel = SolveConfig::new(DEMO.to_string(), SolverConfig::default());
        let sequential = SolveConfig::new(DEMO.to_string(), SolverConfig::default().sequential());
        let a = solve_puzzle(&parallel, SAMPLE_WORDS).unwrap();
        let b = solve_puzzle(&sequential, SAMPLE_WORDS).unwrap();
        assert_eq!(a.outcome, b.outcome);
        assert_eq!(a.valid, b.valid);
    }

    #[test]
    fn invalid_puzzle_returns_error() {
        let config = SolveConfig::new("ABC-CDE".to_string(), SolverConfig::default());
        assert!(solve_puzzle(&config, SAMPLE_WORDS).is_err());
    }

    #[test]
    fn tight_bound_reports_missing_letters() {
        let config = SolveConfig::new(DEMO.to_string(), SolverConfig::new(1));
        let result = solve_puzzle(&config, SAMPLE_WORDS).unwrap();
        assert!(!result.outcome.is_solved());
        assert!(!result.missing_letters().is_empty());
    }
}
