//! Main Letter Boxed solver interface

use super::chain::Chain;
use super::config::SolverConfig;
use super::search::{Closest, SearchStats, first_at_depth, search_depth};
use crate::core::Puzzle;
use crate::dictionary::{TransitionGraph, ValidWordSet, WordId};
use log::{debug, info};
use rayon::prelude::*;
use std::ops::ControlFlow;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Result of a bounded search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// A covering chain of minimal length
    Solved(Chain),
    /// Every chain up to `bound` words was searched without covering the puzzle
    ///
    /// This is not a proof that no longer solution exists.
    NoSolutionWithinBound {
        bound: usize,
        /// The explored chain covering the most letters
        closest: Option<Chain>,
    },
}

impl SolveOutcome {
    #[must_use]
    pub const fn solution(&self) -> Option<&Chain> {
        match self {
            Self::Solved(chain) => Some(chain),
            Self::NoSolutionWithinBound { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }
}

/// Outcome plus the counters gathered while producing it
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub outcome: SolveOutcome,
    pub stats: SearchStats,
}

/// Per-root result of a parallel search iteration
struct RootResult {
    found: Option<Vec<WordId>>,
    stats: SearchStats,
    closest: Closest,
}

/// Main Letter Boxed solver
///
/// Owns the transition graph built from one puzzle's legal words. Solving is a
/// pure function of the puzzle, the word set and the configuration.
pub struct Solver {
    graph: TransitionGraph,
    roots: Vec<WordId>,
    config: SolverConfig,
}

impl Solver {
    /// Create a solver from an already validated word set
    ///
    /// # Parameters
    /// - `puzzle`: The puzzle the words were validated against
    /// - `valid`: Legal words in dictionary order
    /// - `config`: Search bound and parallelism
    #[must_use]
    pub fn new(puzzle: &Puzzle, valid: &ValidWordSet, config: SolverConfig) -> Self {
        let graph = TransitionGraph::build(puzzle, valid);
        let roots = (0..graph.len()).collect();
        Self {
            graph,
            roots,
            config,
        }
    }

    /// Validate a raw dictionary and create a solver for it
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::Puzzle;
    /// use letter_boxed::solver::{Solver, SolverConfig};
    ///
    /// let puzzle: Puzzle = "ABC DEF GHI JKL".parse().unwrap();
    /// let words = ["ADGJ", "JBEHK", "KCFIL", "AB"];
    /// let solver = Solver::from_dictionary(&puzzle, &words, SolverConfig::default());
    ///
    /// let report = solver.solve();
    /// let solution = report.outcome.solution().unwrap();
    /// assert_eq!(solution.to_string(), "ADGJ - JBEHK - KCFIL");
    /// ```
    #[must_use]
    pub fn from_dictionary<S>(puzzle: &Puzzle, candidates: &[S], config: SolverConfig) -> Self
    where
        S: AsRef<str> + Sync,
    {
        let valid = if config.parallel {
            ValidWordSet::build_parallel(puzzle, candidates, config.min_word_length)
        } else {
            ValidWordSet::build(puzzle, candidates, config.min_word_length)
        };
        Self::new(puzzle, &valid, config)
    }

    #[inline]
    #[must_use]
    pub const fn graph(&self) -> &TransitionGraph {
        &self.graph
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find a minimal covering chain by iterative deepening
    ///
    /// Depths run from 1 to `max_words`; the first depth with any covering
    /// chain returns the first one found in dictionary order. Sequential and
    /// parallel runs return the same chain.
    #[must_use]
    pub fn solve(&self) -> SolveReport {
        let mut stats = SearchStats::default();
        let mut closest = Closest::default();

        for depth in 1..=self.config.max_words {
            if !self.depth_is_feasible(depth) {
                debug!("depth {depth}: skipped, words too short to cover the puzzle");
                continue;
            }

            let before = stats.nodes;
            let found = if self.config.parallel {
                self.first_parallel(depth, &mut stats, &mut closest)
            } else {
                first_at_depth(&self.graph, &self.roots, depth, &mut stats, &mut closest)
            };
            debug!(
                "depth {depth}: {} nodes, {} no-progress prunes, {} bound prunes so far",
                stats.nodes - before,
                stats.no_progress_pruned,
                stats.bound_pruned
            );

            if let Some(ids) = found {
                let chain = Chain::from_ids(&self.graph, &ids);
                info!("found {}-word solution: {chain}", chain.len());
                return SolveReport {
                    outcome: SolveOutcome::Solved(chain),
                    stats,
                };
            }
        }

        info!(
            "no solution within {} words (best coverage {}/{})",
            self.config.max_words,
            closest.coverage().count(),
            self.graph.full_mask().count()
        );
        let closest =
            (!closest.ids().is_empty()).then(|| Chain::from_ids(&self.graph, closest.ids()));
        SolveReport {
            outcome: SolveOutcome::NoSolutionWithinBound {
                bound: self.config.max_words,
                closest,
            },
            stats,
        }
    }

    /// Every covering chain of minimal length, up to `limit` chains
    ///
    /// Chains come back in discovery order, so the first one equals the
    /// solution returned by [`Solver::solve`]. Returns an empty list when no
    /// solution exists within the bound.
    #[must_use]
    pub fn all_solutions(&self, limit: usize) -> (Vec<Chain>, SearchStats) {
        let report = self.solve();
        let mut stats = report.stats;
        let chains = match report.outcome.solution() {
            Some(first) => self.solutions_of_length(first.len(), limit, &mut stats),
            None => Vec::new(),
        };
        (chains, stats)
    }

    /// Every covering chain of exactly `depth` words, up to `limit` chains
    ///
    /// Chains that already cover the puzzle with fewer words are left out.
    /// Counters are added to `stats`.
    pub fn solutions_of_length(
        &self,
        depth: usize,
        limit: usize,
        stats: &mut SearchStats,
    ) -> Vec<Chain> {
        if limit == 0 {
            return Vec::new();
        }

        let mut closest = Closest::default();
        let mut found: Vec<Vec<WordId>> = Vec::new();
        let _ = search_depth(&self.graph, &self.roots, depth, stats, &mut closest, |ids| {
            found.push(ids.to_vec());
            if found.len() >= limit {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        debug!("enumerated {} solutions of {depth} words", found.len());

        found
            .iter()
            .map(|ids| Chain::from_ids(&self.graph, ids))
            .collect()
    }

    /// Cheap check that `depth` words could ever reach full coverage
    fn depth_is_feasible(&self, depth: usize) -> bool {
        let needed = self.graph.full_mask().count();
        let first = self.graph.max_distinct();
        let rest = (depth as u32 - 1).saturating_mul(self.graph.max_chained_gain());
        !self.graph.is_empty() && first.saturating_add(rest) >= needed
    }

    /// Explore each first word on its own rayon task
    ///
    /// Once a root finds a solution, roots after it are skipped; roots before
    /// it always finish, so the winner is the earliest root in dictionary
    /// order, exactly as in the sequential search.
    fn first_parallel(
        &self,
        depth: usize,
        stats: &mut SearchStats,
        closest: &mut Closest,
    ) -> Option<Vec<WordId>> {
        let best_root = AtomicUsize::new(usize::MAX);

        let results: Vec<RootResult> = self
            .roots
            .par_iter()
            .enumerate()
            .map(|(position, root)| {
                let mut result = RootResult {
                    found: None,
                    stats: SearchStats::default(),
                    closest: Closest::default(),
                };
                if position > best_root.load(Ordering::Relaxed) {
                    return result;
                }
                result.found = first_at_depth(
                    &self.graph,
                    std::slice::from_ref(root),
                    depth,
                    &mut result.stats,
                    &mut result.closest,
                );
                if result.found.is_some() {
                    best_root.fetch_min(position, Ordering::Relaxed);
                }
                result
            })
            .collect();

        let mut winner = None;
        for result in results {
            stats.merge(&result.stats);
            closest.merge(result.closest);
            if winner.is_none() {
                winner = result.found;
            }
        }
        winner
    }
}

/// Solve a puzzle against an already validated word set
///
/// Convenience wrapper around [`Solver`] for one-off searches.
#[must_use]
pub fn solve(puzzle: &Puzzle, valid: &ValidWordSet, config: SolverConfig) -> SolveOutcome {
    Solver::new(puzzle, valid, config).solve().outcome
}
