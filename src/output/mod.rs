//! Terminal output formatting
//!
//! Display utilities for the line-based CLI mode.

pub mod formatters;

pub use formatters::{colored_keyboard_rows, colored_row, row_to_emoji};
