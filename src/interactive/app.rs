//! TUI application state and logic

use crate::core::WORD_LENGTH;
use crate::game::{GameSession, Outcome, WordSource};
use crate::output::formatters::{WIN_NOTICE, loss_notice, new_game_notice, reject_notice};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest input the text box accepts
pub const MAX_INPUT_LEN: usize = WORD_LENGTH * 2;

/// Number of notifications kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<S: WordSource> {
    pub session: GameSession<S>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: WordSource> App<S> {
    #[must_use]
    pub fn new(session: GameSession<S>) -> Self {
        let mut app = Self {
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            should_quit: false,
        };
        app.add_message(
            &format!("Guess the {WORD_LENGTH}-letter word. Misses show as 'X'."),
            MessageStyle::Info,
        );
        app
    }

    /// Whether the input box accepts typing
    #[must_use]
    pub fn input_enabled(&self) -> bool {
        !self.session.state().ended
    }

    /// Submit the input buffer as a guess
    ///
    /// The buffer is cleared only when the guess is accepted, so a rejected
    /// entry can be corrected in place.
    pub fn submit(&mut self) {
        let outcome = match self.session.submit_guess(&self.input_buffer) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        match outcome {
            Outcome::Rejected(reason) => {
                self.add_message(reject_notice(reason), MessageStyle::Error);
            }
            Outcome::Continuing { .. } => {
                self.input_buffer.clear();
            }
            Outcome::Won { .. } => {
                self.input_buffer.clear();
                self.add_message(WIN_NOTICE, MessageStyle::Success);
                self.add_message("Press Enter to play again or 'q' to quit.", MessageStyle::Info);
            }
            Outcome::Lost { secret, .. } => {
                self.input_buffer.clear();
                self.add_message(&loss_notice(&secret), MessageStyle::Error);
                self.add_message("Press Enter to play again or 'q' to quit.", MessageStyle::Info);
            }
        }
    }

    /// Start a new round
    pub fn play_again(&mut self) {
        self.session.reset();
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message(&new_game_notice(), MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        if self.input_enabled() {
            match key.code {
                KeyCode::Char(c) => {
                    if self.input_buffer.chars().count() < MAX_INPUT_LEN {
                        self.input_buffer.push(c.to_ascii_uppercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit(),
                _ => {}
            }
        } else {
            // Input is disabled until the next round
            match key.code {
                KeyCode::Enter => self.play_again(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: WordSource>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: WordSource>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
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
    use crate::game::{RoundStatus, ScriptedWordSource};
    use crate::wordlists::loader::words_from_slice;

    fn app_with(words: &[&str]) -> App<ScriptedWordSource> {
        let source = ScriptedWordSource::new(words_from_slice(words)).unwrap();
        App::new(GameSession::new(source))
    }

    fn press(app: &mut App<ScriptedWordSource>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App<ScriptedWordSource>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_builds_uppercase_buffer() {
        let mut app = app_with(&["lamp"]);
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.input_buffer, "LU");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "L");
    }

    #[test]
    fn buffer_is_capped() {
        let mut app = app_with(&["lamp"]);
        for _ in 0..20 {
            press(&mut app, KeyCode::Char('a'));
        }
        assert_eq!(app.input_buffer.len(), MAX_INPUT_LEN);
    }

    #[test]
    fn valid_guess_clears_buffer_and_records_history() {
        let mut app = app_with(&["lamp"]);
        type_word(&mut app, "lump");

        assert!(app.input_buffer.is_empty());
        let state = app.session.state();
        assert_eq!(state.attempts, 1);
        assert_eq!(state.history[0].result.to_string(), "LXXP");
    }

    #[test]
    fn rejected_guess_keeps_buffer_and_shows_notice() {
        let mut app = app_with(&["lamp"]);
        type_word(&mut app, "lum");

        assert_eq!(app.input_buffer, "LUM");
        assert_eq!(app.session.state().attempts, 0);
        let last = app.messages.last().unwrap();
        assert_eq!(last.text, "Please enter a 4-letter word");
        assert_eq!(last.style, MessageStyle::Error);
    }

    #[test]
    fn win_disables_input_until_play_again() {
        let mut app = app_with(&["lamp", "bake"]);
        type_word(&mut app, "lamp");

        assert_eq!(app.session.state().status, RoundStatus::Won);
        assert!(!app.input_enabled());
        assert!(app.messages.iter().any(|m| m.text == WIN_NOTICE));

        // Typing is ignored while the round is over
        press(&mut app, KeyCode::Char('x'));
        assert!(app.input_buffer.is_empty());

        // Enter acts as "Play Again"
        press(&mut app, KeyCode::Enter);
        assert!(app.input_enabled());
        assert_eq!(app.session.state().attempts, 0);
        assert_eq!(app.messages.last().unwrap().text, new_game_notice());
    }

    #[test]
    fn loss_reveals_word() {
        let mut app = app_with(&["lamp"]);
        type_word(&mut app, "bake");
        type_word(&mut app, "lake");
        type_word(&mut app, "lump");

        assert_eq!(app.session.state().status, RoundStatus::Lost);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == "Game Over! The word was: LAMP")
        );
    }

    #[test]
    fn q_types_while_active_and_quits_when_ended() {
        let mut app = app_with(&["lamp"]);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.input_buffer, "Q");

        press(&mut app, KeyCode::Backspace);
        type_word(&mut app, "lamp");
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let mut app = app_with(&["lamp"]);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = app_with(&["lamp"]);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_bounded() {
        let mut app = app_with(&["lamp"]);
        for i in 0..10 {
            app.add_message(&format!("note {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages.last().unwrap().text, "note 9");
    }
}
