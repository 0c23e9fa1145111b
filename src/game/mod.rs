//! Game state machine and derived projections
//!
//! `GameState` is the single writer for everything the game knows: the hidden
//! answer, the frozen guess rows, the in-progress draft, and the terminal
//! status. Everything the UI shows (grid, keyboard coloring, end message) is
//! derived from it by pure functions, never mutated independently.

mod events;
mod keyboard;
mod state;

pub use events::InputEvent;
pub use keyboard::{KEYBOARD_ROWS, letter_statuses};
pub use state::{
    GameState, GameStatus, InvalidWordError, MAX_GUESSES, RowView, Submission, WORD_LENGTH,
};
