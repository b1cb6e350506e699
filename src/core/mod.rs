//! Core domain types for Letter Boxed
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and immutable once constructed.

mod letter;
mod mask;
mod puzzle;
mod word;

pub use letter::{ALPHABET_SIZE, Letter};
pub use mask::LetterMask;
pub use puzzle::{InvalidPuzzle, Puzzle, PuzzleError};
pub use word::{Word, WordError};
