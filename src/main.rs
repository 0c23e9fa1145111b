//! Wordle Game - CLI
//!
//! Playable Wordle with TUI and simple CLI modes. The valid-word list is
//! fetched once at startup from a public plaintext resource (or read from a
//! local file) and doubles as the answer pool.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use wordle_game::{
    commands::run_simple,
    core::Word,
    wordlists::{DEFAULT_WORD_LIST_URL, WordList, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Playable Wordle for the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'remote' (default, fetched once over HTTP) or a path to a
    /// newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "remote")]
    wordlist: String,

    /// Force the hidden answer instead of drawing one at random
    #[arg(long, global = true)]
    answer: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,
}

/// Load the word list based on the -w flag
///
/// A failed remote fetch degrades to an empty list with a warning: the game
/// still starts, but every submission is rejected.
fn load_wordlist(wordlist_mode: &str) -> Result<WordList> {
    match wordlist_mode {
        "remote" => match loader::fetch_remote(DEFAULT_WORD_LIST_URL) {
            Ok(words) => Ok(words),
            Err(err) => {
                eprintln!(
                    "{} {err}",
                    "Warning: could not fetch the word list:".yellow()
                );
                Ok(WordList::default())
            }
        },
        path => Ok(loader::load_from_file(path)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_wordlist(&cli.wordlist)?;

    let answer = cli
        .answer
        .map(|word| Word::new(word).map_err(|e| anyhow::anyhow!(e)))
        .transpose()?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(words, answer),
        Commands::Simple => run_simple(&words, answer).map_err(|e| anyhow::anyhow!(e)),
    }
}

fn run_play_command(words: WordList, answer: Option<Word>) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(words, answer);
    run_tui(app)
}
