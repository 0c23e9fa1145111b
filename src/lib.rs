//! Wordle Game
//!
//! A playable Wordle for the terminal: six guesses at a hidden five-letter word,
//! per-letter feedback after each accepted guess, and a keyboard overlay that
//! remembers everything learned so far.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Word, classify_row};
//! use wordle_game::game::GameState;
//!
//! let answer = Word::new("crate").unwrap();
//! let game = GameState::new(answer.clone());
//! assert_eq!(game.turn_index(), 0);
//!
//! // Per-letter feedback for a guess
//! let guess = Word::new("trace").unwrap();
//! let statuses = classify_row(&guess, &answer);
//! println!("{statuses:?}");
//! ```

// Core domain types
pub mod core;

// Game state machine and projections
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
