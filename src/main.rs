//! Four-Letter Word Guess - CLI
//!
//! Play in a terminal UI (default) or a plain line mode, or check a single guess.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use word_guess::{
    commands::{check_guess, run_simple},
    game::{DEFAULT_ATTEMPT_LIMIT, GameConfig, RandomSession, build_session},
    output::print_check_result,
    wordlists::WordlistSource,
};

#[derive(Parser)]
#[command(
    name = "word_guess",
    about = "Guess the secret four-letter word before your attempts run out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Number of valid guesses allowed per round
    #[arg(short = 'a', long, global = true, default_value_t = DEFAULT_ATTEMPT_LIMIT)]
    attempts: usize,

    /// Seed for choosing secret words (reproducible rounds)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-by-line mode without TUI
    Simple,

    /// Show the feedback a guess would get against a target word
    Check {
        /// The guessed word
        guess: String,

        /// The word being guessed
        target: String,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = GameConfig::new(cli.attempts, cli.seed);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config, &cli.wordlist),
        Commands::Simple => run_simple_command(config, &cli.wordlist),
        Commands::Check { guess, target } => run_check_command(&guess, &target),
    }
}

fn load_session(config: GameConfig, wordlist: &str) -> Result<RandomSession> {
    let words = WordlistSource::from_arg(wordlist).load()?;
    log::info!("Loaded {} words from {wordlist}", words.len());
    build_session(config, words)
}

fn run_play_command(config: GameConfig, wordlist: &str) -> Result<()> {
    use word_guess::interactive::{App, run_tui};

    let session = load_session(config, wordlist)?;
    run_tui(App::new(session))
}

fn run_simple_command(config: GameConfig, wordlist: &str) -> Result<()> {
    let mut session = load_session(config, wordlist)?;
    run_simple(&mut session, io::stdin().lock(), io::stdout())
}

fn run_check_command(guess: &str, target: &str) -> Result<()> {
    let result = check_guess(guess, target).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result);
    Ok(())
}
