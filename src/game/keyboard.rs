//! Keyboard letter-status projection
//!
//! Derives, from the frozen rows only, the best classification seen for every
//! guessed letter. Letters never guessed are absent from the map and render
//! neutral. The draft never contributes: the keyboard may only reflect
//! submitted knowledge.

use super::state::GameState;
use crate::core::{LetterStatus, classify_row};
use rustc_hash::FxHashMap;

/// QWERTY layout for the on-screen keyboard, top row first
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best status per guessed letter across all frozen rows
///
/// Pure function of (frozen rows, answer): recomputing it on every render is
/// safe and always yields the same map. Correct beats Partial beats Incorrect;
/// a letter missing from the map is unknown.
#[must_use]
pub fn letter_statuses(state: &GameState) -> FxHashMap<char, LetterStatus> {
    let mut map = FxHashMap::default();

    for guess in state.frozen_rows() {
        let statuses = classify_row(guess, state.answer());
        for (i, &status) in statuses.iter().enumerate() {
            let letter = guess.char_at(i) as char;
            map.entry(letter)
                .and_modify(|current: &mut LetterStatus| *current = current.best(status))
                .or_insert(status);
        }
    }

    map
}
