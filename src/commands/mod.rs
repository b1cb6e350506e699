//! Command implementations

pub mod analyze;
pub mod batch;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_puzzle};
pub use batch::{BatchStatistics, RunStatus, load_puzzles, run_batch};
pub use solve::{SolveConfig, SolveResult, solve_puzzle};
