//! Input events for the game core
//!
//! The UI layers reduce whatever they receive (key presses, text-field edits,
//! submit triggers) to this closed event set and dispatch synchronously. That
//! keeps the core testable without any UI harness.

use super::state::{GameState, InvalidWordError, Submission};
use crate::wordlists::WordList;

/// Everything a player can do to the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Append one letter to the draft (already lowercase-normalized)
    AppendLetter(char),
    /// Delete the last letter of the draft
    DeleteLast,
    /// Replace the draft wholesale (text-field entry)
    SetDraft(String),
    /// Submit the draft as the active row's guess
    Submit,
}

impl GameState {
    /// Dispatch a single input event
    ///
    /// Only `Submit` can change the grid or the status; editing events report
    /// `Submission::Ignored`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidWordError` when a `Submit` event carries a draft that is
    /// not in `words`.
    pub fn apply(
        &mut self,
        event: InputEvent,
        words: &WordList,
    ) -> Result<Submission, InvalidWordError> {
        match event {
            InputEvent::AppendLetter(c) => {
                self.append_letter(c);
                Ok(Submission::Ignored)
            }
            InputEvent::DeleteLast => {
                self.delete_last_letter();
                Ok(Submission::Ignored)
            }
            InputEvent::SetDraft(s) => {
                self.set_draft(&s);
                Ok(Submission::Ignored)
            }
            InputEvent::Submit => self.submit_guess(words),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::GameStatus;

    fn words(list: &[&str]) -> WordList {
        WordList::new(list.iter().map(|w| Word::new(*w).unwrap()).collect())
    }

    #[test]
    fn event_sequence_plays_a_full_turn() {
        let list = words(&["crate", "trace"]);
        let mut state = GameState::new(Word::new("crate").unwrap());

        for c in "trace".chars() {
            state.apply(InputEvent::AppendLetter(c), &list).unwrap();
        }
        let result = state.apply(InputEvent::Submit, &list).unwrap();

        assert!(matches!(result, Submission::Accepted { row: 0, .. }));
        assert_eq!(state.status(), GameStatus::InProgress);
    }

    #[test]
    fn set_draft_event_replaces_partial_typing() {
        let list = words(&["crate"]);
        let mut state = GameState::new(Word::new("crate").unwrap());

        state.apply(InputEvent::AppendLetter('x'), &list).unwrap();
        state
            .apply(InputEvent::SetDraft("CRATE".to_string()), &list)
            .unwrap();
        assert_eq!(state.draft(), "crate");

        let result = state.apply(InputEvent::Submit, &list).unwrap();
        assert!(matches!(
            result,
            Submission::Accepted {
                status: GameStatus::Won { turn: 0 },
                ..
            }
        ));
    }

    #[test]
    fn delete_event_edits_draft() {
        let list = words(&["crate"]);
        let mut state = GameState::new(Word::new("crate").unwrap());

        state.apply(InputEvent::AppendLetter('c'), &list).unwrap();
        state.apply(InputEvent::AppendLetter('r'), &list).unwrap();
        state.apply(InputEvent::DeleteLast, &list).unwrap();
        assert_eq!(state.draft(), "c");
    }
}
