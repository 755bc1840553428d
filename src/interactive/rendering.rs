//! TUI rendering with ratatui
//!
//! Single screen: status, guess history, notifications and the input box.

use super::app::{App, MessageStyle};
use crate::game::{RoundStatus, WordSource};
use crate::output::formatters::{attempts_label, ended_status, guess_line, result_line};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<S: WordSource>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Status
            Constraint::Min(6),    // History and messages
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Help
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_status(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[2]);

    render_history(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_input(f, app, chunks[3]);
    render_help(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("FOUR-LETTER WORD GUESS")
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

fn render_status<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let state = app.session.state();

    let (text, color) = match app.session.revealed_secret() {
        Some(secret) => {
            let won = state.status == RoundStatus::Won;
            let color = if won { Color::Green } else { Color::Red };
            (ended_status(won, secret), color)
        }
        None => (attempts_label(&state), Color::White),
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}

fn render_history<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let state = app.session.state();

    // Two lines per entry inside the border; keep the newest entries in view
    let visible = usize::from(area.height.saturating_sub(2) / 2);
    let hidden = state.history.len().saturating_sub(visible);

    let items: Vec<ListItem> = state
        .history
        .iter()
        .skip(hidden)
        .map(|entry| {
            ListItem::new(vec![
                Line::styled(guess_line(&entry.guess), Style::default().fg(Color::DarkGray)),
                Line::styled(
                    result_line(&entry.result),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    let history = List::new(items).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(history, area);
}

fn render_messages<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_input<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let (title, content, color) = if app.input_enabled() {
        (" Enter a 4-letter word ", app.input_buffer.as_str(), Color::Yellow)
    } else {
        (" Play Again? Press Enter ", "", Color::DarkGray)
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_help<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let help_text = if app.input_enabled() {
        "Enter: Submit | Backspace: Delete | Esc: Quit"
    } else {
        "Enter: Play Again | q: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameSession, ScriptedWordSource};
    use crate::wordlists::loader::words_from_slice;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text<S: WordSource>(app: &App<S>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn app_with(words: &[&str]) -> App<ScriptedWordSource> {
        let source = ScriptedWordSource::new(words_from_slice(words)).unwrap();
        App::new(GameSession::new(source))
    }

    #[test]
    fn fresh_screen_shows_counter_and_prompt() {
        let app = app_with(&["lamp"]);
        let text = screen_text(&app);
        assert!(text.contains("FOUR-LETTER WORD GUESS"));
        assert!(text.contains("Attempts: 0/3"));
        assert!(text.contains("Enter a 4-letter word"));
    }

    #[test]
    fn long_history_keeps_newest_guesses_visible() {
        let source = ScriptedWordSource::new(words_from_slice(&["lamp"])).unwrap();
        let mut app = App::new(GameSession::with_attempt_limit(source, 20).unwrap());
        for guess in [
            "bake", "cake", "fake", "hake", "jake", "lake", "make", "rake", "sake", "take",
        ] {
            app.session.submit_guess(guess).unwrap();
        }

        let text = screen_text(&app);
        assert!(text.contains("Guess: TAKE"));
        assert!(text.contains("Guess: SAKE"));
        assert!(!text.contains("Guess: BAKE"));
        assert!(text.contains("Attempts: 10/20"));
    }

    #[test]
    fn history_is_rendered_as_pairs() {
        let mut app = app_with(&["lamp"]);
        app.session.submit_guess("lump").unwrap();
        let text = screen_text(&app);
        assert!(text.contains("Guess: LUMP"));
        assert!(text.contains("Result: LXXP"));
        assert!(text.contains("Attempts: 1/3"));
    }

    #[test]
    fn ended_round_reveals_word_and_offers_replay() {
        let mut app = app_with(&["lamp"]);
        app.input_buffer = "LAMP".to_string();
        app.submit();
        let text = screen_text(&app);
        assert!(text.contains("You Won! Word was: LAMP"));
        assert!(text.contains("Play Again? Press Enter"));
    }
}
