//! Simple line-oriented game mode
//!
//! Text-based game without the TUI. Reads guesses line by line, so it also
//! works with piped input.

use crate::game::{GameSession, WordSource};
use crate::output::formatters::{attempts_label, new_game_notice};
use crate::output::write_outcome;
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Run the simple game loop until the player quits or input ends
///
/// Commands start with `:` so they can never collide with a four-letter guess.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<S, R, W>(session: &mut GameSession<S>, mut input: R, mut out: W) -> Result<()>
where
    S: WordSource,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔════════════════════════════════════════╗")?;
    writeln!(out, "║         Four-Letter Word Guess         ║")?;
    writeln!(out, "╚════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the secret word in {} attempts.",
        session.attempt_limit()
    )?;
    writeln!(out, "Matching letters are shown in place, misses as 'X'.")?;
    writeln!(out, "Commands: ':new' for a new word, ':quit' to exit\n")?;
    write_round_start(&mut out, session)?;

    loop {
        if session.state().ended {
            let Some(answer) = prompt(&mut input, &mut out, "Play again? (yes/no)")? else {
                break;
            };
            if matches!(answer.to_lowercase().as_str(), "yes" | "y") {
                session.reset();
                write_round_start(&mut out, session)?;
                continue;
            }
            break;
        }

        let Some(line) = prompt(&mut input, &mut out, "Your guess")? else {
            break;
        };

        match line.to_lowercase().as_str() {
            ":quit" | ":q" => break,
            ":new" | ":n" => {
                session.reset();
                write_round_start(&mut out, session)?;
            }
            _ => {
                let outcome = session.submit_guess(&line)?;
                write_outcome(&mut out, &outcome, &session.state())?;
            }
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

fn write_round_start<S: WordSource, W: Write>(
    out: &mut W,
    session: &GameSession<S>,
) -> Result<()> {
    writeln!(out, "{}", new_game_notice().bright_cyan())?;
    writeln!(out, "{}\n", attempts_label(&session.state()))?;
    Ok(())
}

/// Prompt and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
