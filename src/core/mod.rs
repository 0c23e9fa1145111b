//! Core domain types for the Wordle game
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod classify;
mod word;

pub use classify::{LetterStatus, classify_row};
pub use word::{Word, WordError};
