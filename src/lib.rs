//! Letter Boxed Solver
//!
//! Finds the shortest chain of dictionary words that uses every letter of a
//! Letter Boxed puzzle, using bitmask coverage and iterative deepening search.
//!
//! # Quick Start
//!
//! ```rust
//! use letter_boxed::core::Puzzle;
//! use letter_boxed::solver::{Solver, SolverConfig};
//!
//! let puzzle: Puzzle = "TUL-ECR-IOH-APS".parse().unwrap();
//! let words = ["PILOT", "TRUST", "TEACH", "SPLIT"];
//! let solver = Solver::from_dictionary(&puzzle, &words, SolverConfig::default());
//!
//! let report = solver.solve();
//! println!("{:?}", report.outcome.solution());
//! ```

// Core domain types
pub mod core;

// Dictionary validation and word transitions
pub mod dictionary;

// Search
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
