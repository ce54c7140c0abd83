//! Word Scramble - CLI
//!
//! Spell words from the letters of a random root word, in a TUI or a plain line-based
//! mode, and analyze how many words each root allows.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::sync::Mutex;
use std::{env, io};
use tracing_subscriber::EnvFilter;
use word_scramble::{
    commands::{analyze_root, run_simple, run_survey},
    dictionary::{DEFAULT_LANGUAGE, WordListOracle},
    output::{print_analysis_result, print_survey_statistics},
    session::{GameSession, WordPool},
    validator::WordValidator,
    wordlists::loader::load_from_file,
};

/// Value of `--wordlist`/`--dictionary` selecting the list compiled into the binary
const EMBEDDED: &str = "embedded";

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make words from the letters of a random root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root words: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = EMBEDDED)]
    wordlist: String,

    /// Dictionary: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'd', long, global = true, default_value = EMBEDDED)]
    dictionary: String,

    /// Language tag for dictionary lookups
    #[arg(short = 'l', long, global = true, default_value = DEFAULT_LANGUAGE)]
    language: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode (no TUI)
    Simple,

    /// List every playable word for a root word
    Analyze {
        /// The root word to analyze
        root: String,
    },

    /// Analyze every root word in the word list
    Survey {
        /// Limit number of root words to survey
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

/// Load the root word pool based on the -w flag
///
/// A missing or unreadable file is fatal: there is nothing to play without root words.
fn load_pool(wordlist: &str) -> Result<WordPool> {
    if wordlist == EMBEDDED {
        return Ok(WordPool::embedded());
    }

    WordPool::from_file(wordlist)
        .with_context(|| format!("Could not load root words from '{wordlist}'"))
}

/// Load the dictionary based on the -d and -l flags
fn load_dictionary(dictionary: &str, language: &str) -> Result<WordListOracle> {
    if dictionary == EMBEDDED {
        if language != DEFAULT_LANGUAGE {
            tracing::warn!(language, "embedded dictionary is English only");
        }
        return Ok(WordListOracle::embedded());
    }

    let words = load_from_file(dictionary)
        .with_context(|| format!("Could not load dictionary from '{dictionary}'"))?;
    Ok(WordListOracle::new(language, words))
}

/// File that receives log output while the TUI owns the terminal
const TUI_LOG_FILE: &str = "word_scramble.log";

/// Whether `command` draws a full-screen TUI, so nothing may be written to the terminal
const fn uses_tui(command: &Commands) -> bool {
    matches!(command, Commands::Play)
}

fn init_tracing(command: &Commands) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if !uses_tui(command) {
        subscriber.with_writer(io::stderr).init();
        return;
    }

    let path = env::temp_dir().join(TUI_LOG_FILE);
    match File::create(&path) {
        Ok(file) => subscriber
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init(),
        Err(_) => subscriber.with_writer(io::sink).init(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_tracing(&command);

    let pool = load_pool(&cli.wordlist)?;
    let oracle = load_dictionary(&cli.dictionary, &cli.language)?;
    let validator = WordValidator::new(&oracle).with_language(cli.language.as_str());

    match command {
        Commands::Play => run_play_command(validator, &pool, &oracle),
        Commands::Simple => run_simple_command(validator, &pool, &oracle),
        Commands::Analyze { root } => run_analyze_command(&root, &validator, &oracle),
        Commands::Survey { limit } => run_survey_command(limit, &validator, &pool, &oracle),
    }
}

fn dictionary_words(oracle: &WordListOracle) -> Vec<&str> {
    oracle.words().collect()
}

fn run_play_command(
    validator: WordValidator<&WordListOracle>,
    pool: &WordPool,
    oracle: &WordListOracle,
) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let candidates = dictionary_words(oracle);
    let app = App::new(validator, pool, &candidates);
    run_tui(app)
}

fn run_simple_command(
    validator: WordValidator<&WordListOracle>,
    pool: &WordPool,
    oracle: &WordListOracle,
) -> Result<()> {
    let candidates = dictionary_words(oracle);
    let mut session = GameSession::new(validator);
    run_simple(&mut session, pool, &candidates).map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

fn run_analyze_command(
    root: &str,
    validator: &WordValidator<&WordListOracle>,
    oracle: &WordListOracle,
) -> Result<()> {
    let candidates = dictionary_words(oracle);
    let result = analyze_root(root, validator, &candidates).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_survey_command(
    limit: Option<usize>,
    validator: &WordValidator<&WordListOracle>,
    pool: &WordPool,
    oracle: &WordListOracle,
) -> Result<()> {
    let candidates = dictionary_words(oracle);
    let stats =
        run_survey(pool, validator, &candidates, limit).map_err(|e| anyhow::anyhow!(e))?;
    print_survey_statistics(&stats);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_play_uses_tui() {
        assert!(uses_tui(&Commands::Play));
        assert!(!uses_tui(&Commands::Simple));
        assert!(!uses_tui(&Commands::Analyze {
            root: "silkworm".to_string()
        }));
        assert!(!uses_tui(&Commands::Survey { limit: None }));
    }

    #[test]
    fn play_is_the_default_command() {
        let cli = Cli::parse_from(["word_scramble"]);
        let command = cli.command.unwrap_or(Commands::Play);
        assert!(uses_tui(&command));

        let cli = Cli::parse_from(["word_scramble", "analyze", "silkworm"]);
        assert!(cli.command.is_some_and(|command| !uses_tui(&command)));
    }
}
