//! Display functions for the line-oriented front ends

use super::formatters::{
    WIN_NOTICE, attempts_label, ended_status, guess_line, loss_notice, reject_notice, result_line,
};
use crate::commands::CheckResult;
use crate::core::WORD_LENGTH;
use crate::game::{HistoryEntry, Outcome, SessionState};
use colored::Colorize;
use std::io::{self, Write};

/// Write one history entry as a guess/result pair
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_history_entry<W: Write>(out: &mut W, entry: &HistoryEntry) -> io::Result<()> {
    writeln!(out, "  {}", guess_line(&entry.guess).bright_black())?;
    writeln!(out, "  {}", result_line(&entry.result).bold())
}

/// Write the feedback for a submitted guess
///
/// `state` is the session snapshot taken after the submission.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_outcome<W: Write>(
    out: &mut W,
    outcome: &Outcome,
    state: &SessionState<'_>,
) -> io::Result<()> {
    if let Outcome::Rejected(reason) = outcome {
        return writeln!(out, "{}", reject_notice(*reason).yellow());
    }

    if let Some(entry) = state.history.last() {
        write_history_entry(out, entry)?;
    }

    match outcome {
        Outcome::Continuing {
            attempts_remaining, ..
        } => {
            writeln!(
                out,
                "{} ({} left)",
                attempts_label(state).cyan(),
                attempts_remaining
            )
        }
        Outcome::Won { secret, .. } => {
            writeln!(out, "\n{}", WIN_NOTICE.bright_green().bold())?;
            writeln!(out, "{}", ended_status(true, secret).green())
        }
        Outcome::Lost { secret, .. } => {
            writeln!(out, "\n{}", loss_notice(secret).red().bold())?;
            writeln!(out, "{}", ended_status(false, secret).red())
        }
        Outcome::Rejected(_) => Ok(()),
    }
}

/// Print the result of checking a single guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(30).cyan());
    println!("{}", guess_line(&result.guess));
    println!("Target: {}", result.target.to_string().bright_yellow());
    println!("{}", result_line(&result.result).bold());
    println!("{}", "─".repeat(30).cyan());

    let matches = result.result.match_count();
    if result.result.is_perfect() {
        println!("{}", "✅ Exact match".green().bold());
    } else {
        println!(
            "{} of {} letters in place",
            matches.to_string().bright_cyan(),
            WORD_LENGTH
        );
    }
}
