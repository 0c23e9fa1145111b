//! The Wordle game state machine
//!
//! Six guess rows, one mutable draft, one terminal check. Frozen rows are
//! immutable once accepted; the draft is scratch space for the active row and is
//! cleared on every accepted or rejected submission. Malformed input (short
//! drafts, submissions after the game ended) is silently ignored; the only
//! recoverable error is submitting a word that is not in the valid-word list.

use crate::core::{LetterStatus, Word, classify_row};
use crate::wordlists::WordList;
use std::fmt;

/// Number of guess rows
pub const MAX_GUESSES: usize = 6;

/// Letters per guess
pub const WORD_LENGTH: usize = 5;

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Accepting input for the active row
    InProgress,
    /// A submitted guess matched the answer on the given turn (0-based)
    Won { turn: usize },
    /// Six accepted guesses, none matched
    Lost,
}

impl GameStatus {
    /// Terminal statuses freeze all further input
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// The draft was not in the valid-word set
///
/// The turn is not consumed; the draft has already been cleared when this is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidWordError {
    draft: String,
}

impl InvalidWordError {
    /// The rejected draft, as submitted
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }
}

impl fmt::Display for InvalidWordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a valid word", self.draft)
    }
}

impl std::error::Error for InvalidWordError {}

/// Outcome of a submission attempt that was not rejected as an invalid word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The draft was frozen into the grid
    Accepted {
        /// Row index the guess was written to
        row: usize,
        /// Per-letter classification of the frozen row
        statuses: [LetterStatus; 5],
        /// Status after the submission (may be terminal)
        status: GameStatus,
    },
    /// Nothing happened: game already over, or the draft was not 5 letters
    Ignored,
}

/// One row of the 6-row grid, as the UI should draw it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowView<'a> {
    /// A submitted guess with its classification
    Frozen(&'a Word, [LetterStatus; 5]),
    /// The active row, mirroring the draft (unclassified)
    Active(&'a str),
    /// An untouched row below the action
    Empty,
}

/// Owned game state: answer, frozen rows, draft, status
///
/// All mutation goes through the operations below so the row invariants hold:
/// rows before the turn index are fully populated accepted guesses, the active
/// row mirrors the draft, and later rows are blank.
#[derive(Debug, Clone)]
pub struct GameState {
    answer: Word,
    guesses: Vec<Word>,
    draft: String,
    status: GameStatus,
}

impl GameState {
    /// Start a new game against the given answer
    #[must_use]
    pub fn new(answer: Word) -> Self {
        Self {
            answer,
            guesses: Vec::with_capacity(MAX_GUESSES),
            draft: String::with_capacity(WORD_LENGTH),
            status: GameStatus::InProgress,
        }
    }

    /// The hidden answer
    #[must_use]
    pub fn answer(&self) -> &Word {
        &self.answer
    }

    /// The in-progress draft for the active row
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Current status
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Accepted guesses in submission order, frozen forever
    #[must_use]
    pub fn frozen_rows(&self) -> &[Word] {
        &self.guesses
    }

    /// The active row index
    ///
    /// Starts at 0, advances by one per accepted non-winning submission, and
    /// stops at the winning turn on a win (the winning submission does not
    /// advance it). Reaches 6 exactly when the game is lost.
    #[must_use]
    pub fn turn_index(&self) -> usize {
        match self.status {
            GameStatus::Won { turn } => turn,
            _ => self.guesses.len(),
        }
    }

    /// Append one letter to the draft
    ///
    /// No-op when the game is over, the draft is full, or `c` is not a
    /// lowercase ASCII letter (callers normalize case before dispatching).
    pub fn append_letter(&mut self, c: char) {
        if self.status.is_terminal() || self.draft.len() >= WORD_LENGTH {
            return;
        }
        if c.is_ascii_lowercase() {
            self.draft.push(c);
        }
    }

    /// Remove the last letter of the draft, if any
    pub fn delete_last_letter(&mut self) {
        if self.status.is_terminal() {
            return;
        }
        self.draft.pop();
    }

    /// Replace the draft wholesale (text-field input)
    ///
    /// Keeps the first 5 lowercase-normalized letters of `s`; anything that is
    /// not a letter is dropped so the draft invariant holds. No-op when the
    /// game is over.
    pub fn set_draft(&mut self, s: &str) {
        if self.status.is_terminal() {
            return;
        }
        self.draft = s
            .chars()
            .flat_map(char::to_lowercase)
            .filter(char::is_ascii_lowercase)
            .take(WORD_LENGTH)
            .collect();
    }

    /// Submit the draft as the guess for the active row
    ///
    /// Ignored (no state change) when the game is over or the draft is not
    /// exactly 5 letters. Rejected with `InvalidWordError` when the draft is
    /// not in `words` - the draft is cleared and the turn is not consumed; an
    /// empty word list therefore rejects everything. Otherwise the draft
    /// freezes into the grid: a match wins on this turn, a sixth accepted
    /// non-winning guess loses. The win check runs first, so guessing right on
    /// the last row is a win.
    ///
    /// # Errors
    ///
    /// Returns `InvalidWordError` if the draft is not a member of `words`.
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by the draft
    /// invariant (5 lowercase ASCII letters).
    pub fn submit_guess(&mut self, words: &WordList) -> Result<Submission, InvalidWordError> {
        if self.status.is_terminal() || self.draft.len() != WORD_LENGTH {
            return Ok(Submission::Ignored);
        }

        if !words.contains(&self.draft) {
            let draft = std::mem::take(&mut self.draft);
            return Err(InvalidWordError { draft });
        }

        // Draft invariant (5 lowercase ASCII letters) makes this infallible
        let guess = Word::new(self.draft.as_str()).expect("draft is a valid word");
        self.draft.clear();

        let row = self.guesses.len();
        let statuses = classify_row(&guess, &self.answer);
        let won = guess == self.answer;
        self.guesses.push(guess);

        if won {
            self.status = GameStatus::Won { turn: row };
        } else if self.guesses.len() == MAX_GUESSES {
            self.status = GameStatus::Lost;
        }

        Ok(Submission::Accepted {
            row,
            statuses,
            status: self.status,
        })
    }

    /// The full 6-row grid as the UI should draw it
    ///
    /// Frozen rows come with their classification; the active row mirrors the
    /// draft while the game is in progress; the rest are blank.
    #[must_use]
    pub fn grid(&self) -> Vec<RowView<'_>> {
        let mut rows = Vec::with_capacity(MAX_GUESSES);
        for guess in &self.guesses {
            rows.push(RowView::Frozen(guess, classify_row(guess, &self.answer)));
        }
        if self.status == GameStatus::InProgress {
            rows.push(RowView::Active(&self.draft));
        }
        while rows.len() < MAX_GUESSES {
            rows.push(RowView::Empty);
        }
        rows
    }

    /// End-of-game message, `None` while the game is in progress
    ///
    /// Chooses between the win and loss lines by whether the final frozen row
    /// equals the answer, and reveals the answer either way.
    #[must_use]
    pub fn end_message(&self) -> Option<String> {
        if !self.status.is_terminal() {
            return None;
        }
        let got_it = self.guesses.last() == Some(&self.answer);
        let lead = if got_it {
            "You got the word!"
        } else {
            "Game over!"
        };
        Some(format!(
            "{lead} The correct answer was {}",
            self.answer.text().to_uppercase()
        ))
    }
}
