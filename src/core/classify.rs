//! Per-letter guess classification
//!
//! Classifies each position of a submitted guess against the answer:
//! - `Correct`: right letter, right position
//! - `Partial`: the answer contains the letter somewhere else
//! - `Incorrect`: the answer does not contain the letter at all
//!
//! The Partial check is a plain membership test, not the multiplicity-aware
//! scoring of official Wordle: a letter guessed twice when the answer holds only
//! one instance classifies as Partial both times. That behavior is part of the
//! game's observable contract and must not be "fixed" here.

use super::Word;

/// Per-position feedback for a single letter of a submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    /// Right letter in the right position (green)
    Correct,
    /// Letter appears somewhere in the answer (yellow)
    Partial,
    /// Letter does not appear in the answer (gray)
    Incorrect,
}

impl LetterStatus {
    /// Aggregation rank: Correct > Partial > Incorrect
    ///
    /// Used to keep the best status seen for a letter across all submitted rows.
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Correct => 2,
            Self::Partial => 1,
            Self::Incorrect => 0,
        }
    }

    /// Pick the better of two statuses
    #[inline]
    #[must_use]
    pub const fn best(self, other: Self) -> Self {
        if self.rank() >= other.rank() { self } else { other }
    }
}

/// Classify every position of `guess` against `answer`
///
/// Pure function: same inputs always produce the same classification, so the
/// result is safe to recompute on every render.
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterStatus, Word, classify_row};
///
/// let answer = Word::new("crate").unwrap();
/// let guess = Word::new("trace").unwrap();
/// let row = classify_row(&guess, &answer);
///
/// assert_eq!(row[0], LetterStatus::Partial); // t is in crate, wrong spot
/// assert_eq!(row[1], LetterStatus::Correct); // r
/// assert_eq!(row[4], LetterStatus::Correct); // e
/// ```
#[must_use]
pub fn classify_row(guess: &Word, answer: &Word) -> [LetterStatus; 5] {
    let mut result = [LetterStatus::Incorrect; 5];

    for (i, status) in result.iter_mut().enumerate() {
        let letter = guess.char_at(i);
        *status = if answer.char_at(i) == letter {
            LetterStatus::Correct
        } else if answer.has_letter(letter) {
            LetterStatus::Partial
        } else {
            LetterStatus::Incorrect
        };
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn classify_all_correct() {
        let answer = word("crate");
        let row = classify_row(&answer, &answer);
        assert_eq!(row, [LetterStatus::Correct; 5]);
    }

    #[test]
    fn classify_all_incorrect() {
        let row = classify_row(&word("fghij"), &word("abcde"));
        assert_eq!(row, [LetterStatus::Incorrect; 5]);
    }

    #[test]
    fn classify_trace_against_crate() {
        // t and c are present elsewhere in crate; r, a, e are exact
        let row = classify_row(&word("trace"), &word("crate"));
        assert_eq!(
            row,
            [
                LetterStatus::Partial, // t
                LetterStatus::Correct, // r
                LetterStatus::Correct, // a
                LetterStatus::Partial, // c
                LetterStatus::Correct, // e
            ]
        );
    }

    #[test]
    fn classify_repeated_letters_use_membership_only() {
        // abide has a single 'a', but both a's in the guess classify
        // independently: position 0 exact, position 1 still Partial.
        let row = classify_row(&word("aabbc"), &word("abide"));
        assert_eq!(row[0], LetterStatus::Correct);
        assert_eq!(row[1], LetterStatus::Partial);
        assert_eq!(row[2], LetterStatus::Partial); // b is in abide
        assert_eq!(row[3], LetterStatus::Partial);
        assert_eq!(row[4], LetterStatus::Incorrect); // no c
    }

    #[test]
    fn classify_is_idempotent() {
        let guess = word("speed");
        let answer = word("erase");
        assert_eq!(classify_row(&guess, &answer), classify_row(&guess, &answer));
    }

    #[test]
    fn status_best_ordering() {
        use LetterStatus::{Correct, Incorrect, Partial};

        assert_eq!(Correct.best(Partial), Correct);
        assert_eq!(Partial.best(Correct), Correct);
        assert_eq!(Partial.best(Incorrect), Partial);
        assert_eq!(Incorrect.best(Incorrect), Incorrect);
    }
}
