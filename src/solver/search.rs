//! Depth-bounded coverage search
//!
//! Enumerates chains of exactly `depth` words over a [`TransitionGraph`] using
//! an explicit stack of frames, one per placed word. Candidates are visited in
//! ascending word id (dictionary) order, so the first covering chain found is
//! the same on every run.
//!
//! Two prunes keep the search small:
//! - a word that adds no new letter to a non-empty coverage is skipped
//! - a branch is cut when the remaining words cannot possibly cover the
//!   remaining letters, given the largest gain any single chained word has

use crate::core::LetterMask;
use crate::dictionary::{TransitionGraph, WordId};
use std::ops::ControlFlow;

/// Counters collected while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidate words considered
    pub nodes: u64,
    /// Candidates skipped for adding no new letters
    pub no_progress_pruned: u64,
    /// Branches cut because the depth left could not cover the letters left
    pub bound_pruned: u64,
    /// Deepest iteration that ran
    pub depth_reached: usize,
}

impl SearchStats {
    pub fn merge(&mut self, other: &Self) {
        self.nodes += other.nodes;
        self.no_progress_pruned += other.no_progress_pruned;
        self.bound_pruned += other.bound_pruned;
        self.depth_reached = self.depth_reached.max(other.depth_reached);
    }
}

/// Best partial chain seen so far, by number of letters covered
///
/// Only a strictly better chain replaces the current one, so the earliest
/// chain reaching the best coverage wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Closest {
    coverage: LetterMask,
    ids: Vec<WordId>,
}

impl Closest {
    #[inline]
    pub fn observe(&mut self, coverage: LetterMask, ids: &[WordId]) {
        if coverage.count() > self.coverage.count() {
            self.coverage = coverage;
            self.ids = ids.to_vec();
        }
    }

    /// Keep whichever of the two covers more, preferring `self` on ties
    pub fn merge(&mut self, other: Self) {
        if other.coverage.count() > self.coverage.count() {
            *self = other;
        }
    }

    #[must_use]
    pub fn ids(&self) -> &[WordId] {
        &self.ids
    }

    #[must_use]
    pub const fn coverage(&self) -> LetterMask {
        self.coverage
    }
}

/// One level of the search: the coverage before this level's word and the
/// candidates still to try
struct Frame<'g> {
    coverage: LetterMask,
    candidates: &'g [WordId],
    cursor: usize,
}

/// Search all chains of exactly `depth` words starting from `roots`
///
/// `on_solution` is called with the word ids of every covering chain of
/// exactly `depth` words in discovery order; returning `ControlFlow::Break`
/// stops the search. Chains that cover the puzzle in fewer words are not
/// reported and not extended.
pub fn search_depth<F>(
    graph: &TransitionGraph,
    roots: &[WordId],
    depth: usize,
    stats: &mut SearchStats,
    closest: &mut Closest,
    mut on_solution: F,
) -> ControlFlow<()>
where
    F: FnMut(&[WordId]) -> ControlFlow<()>,
{
    stats.depth_reached = stats.depth_reached.max(depth);
    if depth == 0 {
        return ControlFlow::Continue(());
    }

    let full = graph.full_mask();
    let gain = graph.max_chained_gain();
    let mut chain: Vec<WordId> = Vec::with_capacity(depth);
    let mut stack: Vec<Frame<'_>> = Vec::with_capacity(depth);
    stack.push(Frame {
        coverage: LetterMask::EMPTY,
        candidates: roots,
        cursor: 0,
    });

    while let Some(frame) = stack.last_mut() {
        let Some(&id) = frame.candidates.get(frame.cursor) else {
            // Level exhausted: drop it and the word that opened it
            stack.pop();
            chain.pop();
            continue;
        };
        frame.cursor += 1;
        let coverage = frame.coverage;
        stats.nodes += 1;

        let node = graph.word(id);
        let next = coverage | node.mask();
        if !coverage.is_empty() && next == coverage {
            stats.no_progress_pruned += 1;
            continue;
        }

        chain.push(id);
        closest.observe(next, &chain);

        let remaining = depth - chain.len();
        if next.covers(full) {
            // A shorter cover cannot be extended: every further word adds nothing
            let flow = if remaining == 0 {
                on_solution(&chain)
            } else {
                ControlFlow::Continue(())
            };
            chain.pop();
            if flow.is_break() {
                return flow;
            }
            continue;
        }
        if remaining == 0 {
            chain.pop();
            continue;
        }
        let uncovered = full.count() - next.count();
        if (remaining as u32).saturating_mul(gain) < uncovered {
            stats.bound_pruned += 1;
            chain.pop();
            continue;
        }

        stack.push(Frame {
            coverage: next,
            candidates: graph.starting_with(node.last()),
            cursor: 0,
        });
    }

    ControlFlow::Continue(())
}

/// First covering chain of exactly `depth` words, if any
pub fn first_at_depth(
    graph: &TransitionGraph,
    roots: &[WordId],
    depth: usize,
    stats: &mut SearchStats,
    closest: &mut Closest,
) -> Option<Vec<WordId>> {
    let mut found = None;
    let _ = search_depth(graph, roots, depth, stats, closest, |ids| {
        found = Some(ids.to_vec());
        ControlFlow::Break(())
    });
    found
}
