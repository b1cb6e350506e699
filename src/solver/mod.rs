//! Letter Boxed solving
//!
//! Iterative deepening search for the shortest chain of legal words that uses
//! every puzzle letter.

mod chain;
mod config;
mod engine;
pub mod search;

pub use chain::Chain;
pub use config::{DEFAULT_MAX_WORDS, SolverConfig};
pub use engine::{SolveOutcome, SolveReport, Solver, solve};
pub use search::SearchStats;
