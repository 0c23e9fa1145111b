//! TUI application state and logic

use crate::core::Word;
use crate::game::{GameState, InputEvent, Submission, WORD_LENGTH};
use crate::wordlists::WordList;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Terminals narrower than this get the text-entry field instead of direct
/// typing.
const MIN_TYPING_WIDTH: u16 = 45;

/// How guesses are entered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Letters go straight into the draft as they are typed
    Typing,
    /// A capped text field is edited and pushed wholesale into the draft
    Entry,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App {
    pub words: WordList,
    pub game: Option<GameState>,
    pub input_mode: InputMode,
    pub entry_buffer: String,
    pub messages: Vec<Message>,
    pub show_answer: bool,
    pub narrow_terminal: bool,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(words: WordList, answer: Option<Word>) -> Self {
        let game = answer
            .or_else(|| words.choose_answer().cloned())
            .map(GameState::new);

        let mut app = Self {
            words,
            game,
            input_mode: InputMode::Typing,
            entry_buffer: String::new(),
            messages: Vec::new(),
            show_answer: false,
            narrow_terminal: false,
            should_quit: false,
        };

        if app.game.is_some() {
            app.add_message("Start typing to play! Enter submits the row.", MessageStyle::Info);
            app.add_message("Tab switches to text-field entry.", MessageStyle::Info);
        } else {
            app.add_message(
                "No word list available - submissions are disabled.",
                MessageStyle::Error,
            );
        }

        app
    }

    /// Start over with a fresh random answer
    pub fn new_game(&mut self) {
        match self.words.choose_answer().cloned() {
            Some(answer) => {
                self.game = Some(GameState::new(answer));
                self.entry_buffer.clear();
                self.show_answer = false;
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            None => {
                self.add_message("No word list available!", MessageStyle::Error);
            }
        }
    }

    /// Dispatch one event to the game core, reporting outcomes as messages
    pub fn dispatch(&mut self, event: InputEvent) {
        let Some(game) = self.game.as_mut() else {
            return;
        };

        match game.apply(event, &self.words) {
            Ok(Submission::Accepted { .. }) => {
                self.entry_buffer.clear();
                if let Some(game) = &self.game
                    && let Some(message) = game.end_message()
                {
                    let style = if game.frozen_rows().last() == Some(game.answer()) {
                        MessageStyle::Success
                    } else {
                        MessageStyle::Error
                    };
                    self.add_message(&message, style);
                    self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
                }
            }
            Ok(Submission::Ignored) => {}
            Err(err) => {
                self.entry_buffer.clear();
                self.add_message(&format!("{err}. Try again."), MessageStyle::Error);
            }
        }
    }

    /// True once the current game has ended
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.game
            .as_ref()
            .is_some_and(|game| game.status().is_terminal())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn handle_game_over_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char('a') => self.show_answer = !self.show_answer,
            _ => {}
        }
    }

    fn handle_typing_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => {
                self.input_mode = InputMode::Entry;
                self.entry_buffer.clear();
            }
            KeyCode::Char('n') if modifiers.contains(KeyModifiers::CONTROL) => self.new_game(),
            KeyCode::Char('a') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.show_answer = !self.show_answer;
            }
            KeyCode::Char(c) if c.is_alphabetic() => {
                self.dispatch(InputEvent::AppendLetter(c.to_ascii_lowercase()));
            }
            KeyCode::Backspace => self.dispatch(InputEvent::DeleteLast),
            KeyCode::Enter => self.dispatch(InputEvent::Submit),
            _ => {}
        }
    }

    fn handle_entry_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc if self.narrow_terminal => self.should_quit = true,
            KeyCode::Esc | KeyCode::Tab if !self.narrow_terminal => {
                self.input_mode = InputMode::Typing;
                self.entry_buffer.clear();
                self.dispatch(InputEvent::SetDraft(String::new()));
            }
            KeyCode::Char(c) if c.is_alphabetic() => {
                // Field is capped at 5 letters
                if self.entry_buffer.len() < WORD_LENGTH {
                    self.entry_buffer.push(c.to_ascii_lowercase());
                    self.dispatch(InputEvent::SetDraft(self.entry_buffer.clone()));
                }
            }
            KeyCode::Backspace => {
                self.entry_buffer.pop();
                self.dispatch(InputEvent::SetDraft(self.entry_buffer.clone()));
            }
            KeyCode::Enter => self.dispatch(InputEvent::Submit),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        // Narrow terminals get the entry field instead of direct typing
        let width = terminal.size()?.width;
        app.narrow_terminal = width < MIN_TYPING_WIDTH;
        if app.narrow_terminal {
            app.input_mode = InputMode::Entry;
        }

        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            } else if app.game_over() || app.game.is_none() {
                app.handle_game_over_key(key.code);
            } else {
                match app.input_mode {
                    InputMode::Typing => app.handle_typing_key(key.code, key.modifiers),
                    InputMode::Entry => app.handle_entry_key(key.code),
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameStatus;

    fn words(list: &[&str]) -> WordList {
        WordList::new(list.iter().map(|w| Word::new(*w).unwrap()).collect())
    }

    fn typed(app: &mut App, word: &str) {
        for c in word.chars() {
            app.handle_typing_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    #[test]
    fn typing_keys_build_and_submit_a_guess() {
        let list = words(&["crate", "trace"]);
        let answer = Word::new("crate").unwrap();
        let mut app = App::new(list, Some(answer));

        typed(&mut app, "trace");
        assert_eq!(app.game.as_ref().unwrap().draft(), "trace");

        app.handle_typing_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.game.as_ref().unwrap().frozen_rows().len(), 1);
    }

    #[test]
    fn entry_mode_caps_buffer_at_five() {
        let list = words(&["crate"]);
        let answer = Word::new("crate").unwrap();
        let mut app = App::new(list, Some(answer));
        app.input_mode = InputMode::Entry;

        for c in "crates".chars() {
            app.handle_entry_key(KeyCode::Char(c));
        }
        assert_eq!(app.entry_buffer, "crate");
        assert_eq!(app.game.as_ref().unwrap().draft(), "crate");
    }

    #[test]
    fn winning_posts_the_end_message() {
        let list = words(&["crate"]);
        let answer = Word::new("crate").unwrap();
        let mut app = App::new(list, Some(answer));

        typed(&mut app, "crate");
        app.handle_typing_key(KeyCode::Enter, KeyModifiers::NONE);

        assert!(app.game_over());
        assert!(matches!(
            app.game.as_ref().unwrap().status(),
            GameStatus::Won { turn: 0 }
        ));
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains("You got the word!"))
        );
    }

    #[test]
    fn invalid_word_posts_error_and_clears_entry() {
        let list = words(&["crate"]);
        let answer = Word::new("crate").unwrap();
        let mut app = App::new(list, Some(answer));
        app.input_mode = InputMode::Entry;

        for c in "zzzzz".chars() {
            app.handle_entry_key(KeyCode::Char(c));
        }
        app.handle_entry_key(KeyCode::Enter);

        assert!(app.entry_buffer.is_empty());
        assert_eq!(app.game.as_ref().unwrap().draft(), "");
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains("not a valid word"))
        );
    }

    #[test]
    fn degraded_mode_has_no_game() {
        let app = App::new(WordList::default(), None);
        assert!(app.game.is_none());
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains("No word list"))
        );
    }
}
