//! Formatting utilities for terminal output

use crate::core::{LetterStatus, Word};
use crate::game::KEYBOARD_ROWS;
use colored::Colorize;
use rustc_hash::FxHashMap;

/// Format a classified row as emoji squares
#[must_use]
pub fn row_to_emoji(statuses: &[LetterStatus; 5]) -> String {
    statuses
        .iter()
        .map(|status| match status {
            LetterStatus::Correct => '🟩',
            LetterStatus::Partial => '🟨',
            LetterStatus::Incorrect => '⬜',
        })
        .collect()
}

/// Format a frozen row as colored uppercase letters
#[must_use]
pub fn colored_row(word: &Word, statuses: &[LetterStatus; 5]) -> String {
    let mut out = String::new();
    for (i, &status) in statuses.iter().enumerate() {
        let letter = (word.char_at(i) as char).to_ascii_uppercase().to_string();
        let cell = match status {
            LetterStatus::Correct => letter.black().on_green(),
            LetterStatus::Partial => letter.black().on_yellow(),
            LetterStatus::Incorrect => letter.white().on_bright_black(),
        };
        out.push(' ');
        out.push_str(&cell.to_string());
    }
    out
}

/// Format the QWERTY keyboard with per-letter status coloring
///
/// Returns one string per keyboard row; letters never guessed stay uncolored.
#[must_use]
pub fn colored_keyboard_rows(statuses: &FxHashMap<char, LetterStatus>) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let mut line = String::new();
            for c in row.chars() {
                let letter = c.to_ascii_uppercase().to_string();
                let key = match statuses.get(&c) {
                    Some(LetterStatus::Correct) => letter.black().on_green(),
                    Some(LetterStatus::Partial) => letter.black().on_yellow(),
                    Some(LetterStatus::Incorrect) => letter.white().on_bright_black(),
                    None => letter.normal(),
                };
                line.push(' ');
                line.push_str(&key.to_string());
            }
            line
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classify_row;

    #[test]
    fn row_to_emoji_all_statuses() {
        let answer = Word::new("crate").unwrap();
        let guess = Word::new("trace").unwrap();
        let statuses = classify_row(&guess, &answer);

        // t=Partial r=Correct a=Correct c=Partial e=Correct
        assert_eq!(row_to_emoji(&statuses), "🟨🟩🟩🟨🟩");
    }

    #[test]
    fn row_to_emoji_all_incorrect() {
        let statuses = [LetterStatus::Incorrect; 5];
        assert_eq!(row_to_emoji(&statuses), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn keyboard_rows_render_all_keys() {
        let rows = colored_keyboard_rows(&FxHashMap::default());
        assert_eq!(rows.len(), 3);
        assert!(rows[0].contains('Q'));
        assert!(rows[2].contains('M'));
    }
}
