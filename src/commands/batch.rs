//! Batch solving - run the solver over a file of puzzles
//!
//! Every puzzle is solved against the same dictionary; results are aggregated
//! into word-count and timing statistics.

use super::solve::{SolveConfig, solve_puzzle};
use crate::solver::{SolveOutcome, SolverConfig};
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

/// Result from solving a single puzzle of the batch
#[derive(Debug, Clone)]
pub struct PuzzleRun {
    pub puzzle: String,
    pub status: RunStatus,
    pub nodes: u64,
    pub duration: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    Solved { words: usize, chain: String },
    Unsolved { covered: u32, needed: u32 },
    Invalid(String),
}

/// Statistics from a batch run
#[derive(Debug, Default)]
pub struct BatchStatistics {
    pub total_puzzles: usize,
    pub solved: usize,
    pub unsolved: usize,
    pub invalid: usize,
    /// Solved puzzles keyed by solution length
    pub word_distribution: BTreeMap<usize, usize>,
    pub total_time: Duration,
    pub average_words: f64,
    /// Puzzle that took the most search nodes
    pub hardest: Option<(String, u64)>,
    pub runs: Vec<PuzzleRun>,
}

/// Read puzzle lines from a file
///
/// Blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn load_puzzles<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_puzzles(&content))
}

#[must_use]
pub fn parse_puzzles(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Solve every puzzle and collect statistics
///
/// A progress bar is drawn when `show_progress` is set.
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_batch<S>(
    puzzles: &[String],
    dictionary: &[S],
    config: SolverConfig,
    show_progress: bool,
) -> BatchStatistics
where
    S: AsRef<str> + Sync,
{
    let pb = if show_progress {
        ProgressBar::new(puzzles.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("progress bar template is valid")
            .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();
    let mut runs = Vec::with_capacity(puzzles.len());

    for puzzle in puzzles {
        let start = Instant::now();
        let solve_config = SolveConfig::new(puzzle.clone(), config);
        let (status, nodes) = match solve_puzzle(&solve_config, dictionary) {
            Ok(result) => {
                let needed = result.puzzle.full_mask().count();
                let status = match &result.outcome {
                    SolveOutcome::Solved(chain) => RunStatus::Solved {
                        words: chain.len(),
                        chain: chain.to_string(),
                    },
                    SolveOutcome::NoSolutionWithinBound { closest, .. } => RunStatus::Unsolved {
                        covered: closest.as_ref().map_or(0, |c| c.coverage().count()),
                        needed,
                    },
                };
                (status, result.stats.nodes)
            }
            Err(e) => {
                warn!("skipping puzzle {puzzle:?}: {e}");
                (RunStatus::Invalid(e.to_string()), 0)
            }
        };

        runs.push(PuzzleRun {
            puzzle: puzzle.clone(),
            status,
            nodes,
            duration: start.elapsed(),
        });

        pb.set_message(puzzle.clone());
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    summarize(runs, total_start.elapsed())
}

fn summarize(runs: Vec<PuzzleRun>, total_time: Duration) -> BatchStatistics {
    let mut stats = BatchStatistics {
        total_puzzles: runs.len(),
        total_time,
        ..BatchStatistics::default()
    };

    let mut total_words = 0;
    for run in &runs {
        match run.status {
            RunStatus::Solved { words, .. } => {
                stats.solved += 1;
                total_words += words;
                *stats.word_distribution.entry(words).or_insert(0) += 1;
            }
            RunStatus::Unsolved { .. } => stats.unsolved += 1,
            RunStatus::Invalid(_) => stats.invalid += 1,
        }
    }

    stats.average_words = if stats.solved > 0 {
        total_words as f64 / stats.solved as f64
    } else {
        0.0
    };
    stats.hardest = runs
        .iter()
        .filter(|run| run.nodes > 0)
        .max_by_key(|run| run.nodes)
        .map(|run| (run.puzzle.clone(), run.nodes));
    stats.runs = runs;
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &["ADGJ", "JBEHK", "KCFIL", "ADGJBEH", "HKCFIL"];

    #[test]
    fn parse_skips_comments_and_blanks() {
        let content = "# daily puzzles\nABC-DEF-GHI-JKL\n\n  TUL ECR IOH APS  \n#done\n";
        assert_eq!(
            parse_puzzles(content),
            vec!["ABC-DEF-GHI-JKL", "TUL ECR IOH APS"]
        );
    }

    #[test]
    fn aggregates_solved_unsolved_invalid() {
        let puzzles = vec![
            "ABC-DEF-GHI-JKL".to_string(),
            "ABC-DEF-GHI-JKM".to_string(),
            "AAB-CDE".to_string(),
        ];
        let stats = run_batch(&puzzles, WORDS, SolverConfig::default(), false);

        assert_eq!(stats.total_puzzles, 3);
        assert_eq!(stats.solved, 1);
        assert_eq!(stats.unsolved, 1);
        assert_eq!(stats.invalid, 1);
        assert_eq!(stats.word_distribution.get(&2), Some(&1));
        assert!((stats.average_words - 2.0).abs() < f64::EPSILON);
        assert_eq!(
            stats.runs[0].status,
            RunStatus::Solved {
                words: 2,
                chain: "ADGJBEH - HKCFIL".to_string()
            }
        );
        assert!(matches!(stats.runs[2].status, RunStatus::Invalid(_)));
    }

    #[test]
    fn empty_batch() {
        let stats = run_batch(&[], WORDS, SolverConfig::default(), false);
        assert_eq!(stats.total_puzzles, 0);
        assert!(stats.hardest.is_none());
        assert!(stats.average_words.abs() < f64::EPSILON);
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!("letter_boxed_batch_{}.txt", std::process::id()));
        fs::write(&path, "ABC-DEF-GHI-JKL\n# skip\n").unwrap();
        let puzzles = load_puzzles(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(puzzles, vec!["ABC-DEF-GHI-JKL"]);
    }
}
