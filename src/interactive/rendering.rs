//! TUI rendering with ratatui
//!
//! The guess grid, keyboard overlay, and message log for the Wordle game.

use super::app::{App, InputMode, Message, MessageStyle};
use crate::core::LetterStatus;
use crate::game::{KEYBOARD_ROWS, RowView, WORD_LENGTH, letter_statuses};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Main content
            Constraint::Length(3),  // Input / banner area
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Guess grid
            Constraint::Percentage(55), // Keyboard + messages
        ])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn cell_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        LetterStatus::Partial => Style::default().fg(Color::Black).bg(Color::Yellow),
        LetterStatus::Incorrect => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();

    if let Some(game) = &app.game {
        for row in game.grid() {
            let mut spans = vec![Span::raw(" ")];
            match row {
                RowView::Frozen(word, statuses) => {
                    for (i, &status) in statuses.iter().enumerate() {
                        let letter = (word.char_at(i) as char).to_ascii_uppercase();
                        spans.push(Span::styled(format!(" {letter} "), cell_style(status)));
                        spans.push(Span::raw(" "));
                    }
                }
                RowView::Active(draft) => {
                    for i in 0..WORD_LENGTH {
                        let letter = draft
                            .chars()
                            .nth(i)
                            .map_or('_', |c| c.to_ascii_uppercase());
                        spans.push(Span::styled(
                            format!(" {letter} "),
                            Style::default().add_modifier(Modifier::BOLD),
                        ));
                        spans.push(Span::raw(" "));
                    }
                }
                RowView::Empty => {
                    for _ in 0..WORD_LENGTH {
                        spans.push(Span::styled(
                            " · ",
                            Style::default().fg(Color::DarkGray),
                        ));
                        spans.push(Span::raw(" "));
                    }
                }
            }
            lines.push(Line::from(spans));
            lines.push(Line::from(""));
        }
    } else {
        lines.push(Line::from(Span::styled(
            "No word list - nothing to play.",
            Style::default().fg(Color::Red),
        )));
    }

    let grid = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let statuses = app.game.as_ref().map(letter_statuses).unwrap_or_default();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut spans = vec![Span::raw(" ".repeat(i + 1))];
            for c in row.chars() {
                let style = statuses
                    .get(&c)
                    .map_or_else(Style::default, |&status| cell_style(status));
                spans.push(Span::styled(c.to_ascii_uppercase().to_string(), style));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app.messages.iter().map(message_item).collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn message_item(message: &Message) -> ListItem<'_> {
    let style = match message.style {
        MessageStyle::Info => Style::default().fg(Color::Gray),
        MessageStyle::Success => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        MessageStyle::Error => Style::default().fg(Color::Red),
    };
    ListItem::new(Line::from(Span::styled(message.text.as_str(), style)))
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, style) = if app.game_over() {
        let banner = app
            .game
            .as_ref()
            .and_then(crate::game::GameState::end_message)
            .unwrap_or_default();
        (
            " Game Over ",
            banner,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        match app.input_mode {
            InputMode::Typing => (
                " Input ",
                format!("> {}", app.game.as_ref().map_or("", |g| g.draft())),
                Style::default(),
            ),
            InputMode::Entry => (
                " Entry field ",
                format!("[{:<5}]", app.entry_buffer),
                Style::default().fg(Color::Yellow),
            ),
        }
    };

    let input = Paragraph::new(content).style(style).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let mut hints = if app.game_over() || app.game.is_none() {
        "n: new game | a: reveal answer | q: quit".to_string()
    } else {
        match app.input_mode {
            InputMode::Typing => {
                "type letters | Enter: submit | Tab: entry field | Ctrl-N: new | Esc: quit"
                    .to_string()
            }
            InputMode::Entry => "type letters | Enter: submit | Esc/Tab: back | Ctrl-C: quit"
                .to_string(),
        }
    };

    if app.show_answer
        && let Some(game) = &app.game
    {
        hints = format!("Answer: {} | {hints}", game.answer().text().to_uppercase());
    }

    let status = Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(status, area);
}
