//! Four-Letter Word Guess
//!
//! A small guessing game: find the secret four-letter word within a fixed
//! number of attempts. Each guess reveals which letters sit in the right
//! position; every other position shows `X`.
//!
//! # Quick Start
//!
//! ```rust
//! use word_guess::core::Word;
//! use word_guess::game::{GameSession, Outcome, ScriptedWordSource};
//!
//! let source = ScriptedWordSource::new(vec![Word::new("lamp").unwrap()]).unwrap();
//! let mut session = GameSession::new(source);
//!
//! match session.submit_guess("lamb").unwrap() {
//!     Outcome::Continuing { result, attempts_remaining } => {
//!         assert_eq!(result.to_string(), "LAMX");
//!         assert_eq!(attempts_remaining, 2);
//!     }
//!     other => panic!("unexpected outcome: {other:?}"),
//! }
//! ```

// Core domain types
pub mod core;

// Round state and secret word sources
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
