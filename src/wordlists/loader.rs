//! Word list loading utilities
//!
//! The list is fetched once from a remote plaintext resource at startup, or read
//! from a local file. There is no retry: a failed fetch leaves the game with an
//! empty list, which rejects every submission rather than crashing.

use crate::core::Word;
use crate::wordlists::WordList;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Parse a newline-delimited word list
///
/// Blank lines (including the trailing empty entry most hosted lists carry) and
/// entries that are not valid 5-letter words are skipped.
#[must_use]
pub fn parse_words(content: &str) -> WordList {
    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    WordList::new(words)
}

/// Fetch the word list from a remote plaintext resource
///
/// Single attempt, no retry or backoff.
///
/// # Errors
///
/// Returns an error if the request fails or the server responds with a
/// non-success status.
pub fn fetch_remote(url: &str) -> reqwest::Result<WordList> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()?;
    let body = client.get(url).send()?.error_for_status()?.text()?;
    Ok(parse_words(&body))
}

/// Load a word list from a local file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordList> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_words_reads_valid_lines() {
        let words = parse_words("crate\ntrace\nreact\n");

        assert_eq!(words.len(), 3);
        assert!(words.contains("crate"));
        assert!(words.contains("react"));
    }

    #[test]
    fn parse_words_discards_trailing_empty_entry() {
        // Hosted lists end with a newline, which would otherwise yield
        // a phantom empty word.
        let words = parse_words("crate\ntrace\n\n");
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn parse_words_skips_invalid_entries() {
        let words = parse_words("crate\ntoolong\nabc\ncr4te\ntrace");

        assert_eq!(words.len(), 2);
        assert!(words.contains("crate"));
        assert!(words.contains("trace"));
    }

    #[test]
    fn parse_words_empty_input() {
        let words = parse_words("");
        assert!(words.is_empty());
    }
}
