//! Word lists for the Wordle game
//!
//! The valid-word list doubles as the answer pool: the hidden answer is drawn
//! uniformly from it, and every submitted guess must be a member.

pub mod loader;

use crate::core::Word;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

/// Public word list the game fetches at startup (newline-delimited plaintext)
pub const DEFAULT_WORD_LIST_URL: &str = "https://gist.githubusercontent.com/dracos/dd0668f281e685bad51479e5acaadb93/raw/6bfa15d263d6d5b63840a8e5b64e04b382fdb079/valid-wordle-words.txt";

/// The set of valid guessable words
///
/// An empty list is a legal degraded state (for example after a failed fetch):
/// no answer can be drawn and every submission is rejected.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<Word>,
    members: FxHashSet<[u8; 5]>,
}

impl WordList {
    /// Build a word list from already-validated words
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let members = words.iter().map(|w| *w.chars()).collect();
        Self { words, members }
    }

    /// Membership test for a lowercase 5-letter draft
    ///
    /// Anything that is not a valid `Word` (wrong length, non-letters) is by
    /// definition not a member.
    #[must_use]
    pub fn contains(&self, draft: &str) -> bool {
        let Ok(bytes) = <[u8; 5]>::try_from(draft.as_bytes()) else {
            return false;
        };
        self.members.contains(&bytes)
    }

    /// Number of words in the list
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when no words are available (degraded mode)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Draw a uniform-random answer from the list
    ///
    /// Returns `None` on an empty list.
    #[must_use]
    pub fn choose_answer(&self) -> Option<&Word> {
        self.words.choose(&mut rand::rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(words: &[&str]) -> WordList {
        WordList::new(words.iter().map(|w| Word::new(*w).unwrap()).collect())
    }

    #[test]
    fn contains_members_only() {
        let words = list(&["crate", "trace", "react"]);

        assert!(words.contains("crate"));
        assert!(words.contains("react"));
        assert!(!words.contains("caret"));
    }

    #[test]
    fn contains_rejects_malformed_drafts() {
        let words = list(&["crate"]);

        assert!(!words.contains(""));
        assert!(!words.contains("crat"));
        assert!(!words.contains("crates"));
    }

    #[test]
    fn empty_list_rejects_everything() {
        let words = WordList::default();

        assert!(words.is_empty());
        assert!(!words.contains("crate"));
        assert!(words.choose_answer().is_none());
    }

    #[test]
    fn choose_answer_is_a_member() {
        let words = list(&["crate", "trace", "react"]);
        let answer = words.choose_answer().unwrap();
        assert!(words.contains(answer.text()));
    }
}
