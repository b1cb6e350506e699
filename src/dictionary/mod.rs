//! Game dictionary for one puzzle
//!
//! Validation turns a raw word list into the puzzle's legal words, and the
//! transition graph indexes those words for chaining.

mod graph;
mod validator;

pub use graph::{GraphWord, TransitionGraph, WordId};
pub use validator::{MIN_WORD_LENGTH, ValidWordSet, is_legal};
