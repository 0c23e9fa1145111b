//! Simple interactive CLI mode
//!
//! Line-based Wordle without the TUI: type a 5-letter guess, press enter, read
//! the colored feedback.

use crate::core::Word;
use crate::game::{GameState, GameStatus, InputEvent, MAX_GUESSES, Submission, letter_statuses};
use crate::output::{colored_keyboard_rows, colored_row, row_to_emoji};
use crate::wordlists::WordList;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(words: &WordList, answer: Option<Word>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Simple Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    if words.is_empty() {
        println!("⚠ No word list available - the game cannot accept any guesses.");
        println!("Check your connection or pass a local list with -w <path>.\n");
        return Ok(());
    }

    println!("Guess the hidden 5-letter word in {MAX_GUESSES} tries.");
    println!("Feedback: 🟩 right spot, 🟨 in the word, ⬜ not in the word.\n");
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let first_answer = match answer {
        Some(word) => word,
        None => pick_answer(words)?,
    };
    let mut state = GameState::new(first_answer);

    loop {
        let turn = state.turn_index() + 1;
        let input = get_user_input(&format!("Guess {turn}/{MAX_GUESSES}"))?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                state = GameState::new(pick_answer(words)?);
                println!("\n🔄 New game started!\n");
                continue;
            }
            guess => {
                // Whole-line entry maps to the text-field input surface
                let set = state.apply(InputEvent::SetDraft(guess.to_string()), words);
                debug_assert!(set.is_ok());

                if state.draft().len() != 5 {
                    println!("❌ Guesses must be exactly 5 letters.\n");
                    continue;
                }

                match state.apply(InputEvent::Submit, words) {
                    Ok(Submission::Accepted { statuses, .. }) => {
                        if let Some(row) = state.frozen_rows().last() {
                            println!("\n  {}\n", colored_row(row, &statuses));
                        }

                        for line in colored_keyboard_rows(&letter_statuses(&state)) {
                            println!("   {line}");
                        }
                        println!();
                    }
                    Ok(Submission::Ignored) => continue,
                    Err(err) => {
                        println!("❌ {err}. Try again.\n");
                        continue;
                    }
                }
            }
        }

        if state.status().is_terminal() {
            print_game_over(&state);

            match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                "yes" | "y" => {
                    state = GameState::new(pick_answer(words)?);
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

fn pick_answer(words: &WordList) -> Result<Word, String> {
    words
        .choose_answer()
        .cloned()
        .ok_or_else(|| "word list is empty".to_string())
}

fn print_game_over(state: &GameState) {
    println!("\n{}", "═".repeat(70).bright_cyan());

    let won = matches!(state.status(), GameStatus::Won { .. });
    if won {
        let turn = state.frozen_rows().len();
        let performance = match turn {
            1 => "🏆 Hole in one!",
            2 => "⭐ Excellent!",
            3 => "💫 Great!",
            4 => "✨ Good!",
            5 => "👍 Solved!",
            _ => "😅 Phew!",
        };
        println!("{}", performance.bright_yellow().bold());
    }

    if let Some(message) = state.end_message() {
        if won {
            println!("{}", message.bright_green().bold());
        } else {
            println!("{}", message.bright_red().bold());
        }
    }

    // Share-style recap
    println!("\n  Guess history:");
    for (i, row) in state.grid().iter().enumerate() {
        if let crate::game::RowView::Frozen(word, statuses) = row {
            println!(
                "    {}. {} {}",
                (i + 1).to_string().bright_black(),
                word.text().to_uppercase().bright_white().bold(),
                row_to_emoji(statuses)
            );
        }
    }

    println!("\n{}\n", "═".repeat(70).bright_cyan());
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
