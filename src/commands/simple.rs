//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use super::analyze::analyze_root;
use crate::dictionary::SpellingOracle;
use crate::output::formatters::{format_rejection, length_badge, score_bar};
use crate::session::{GameSession, RootWordProvider};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Totals across every round played in one sitting
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PlaySummary {
    pub rounds: usize,
    pub words_found: usize,
    pub best_score: usize,
}

/// Width of the score bar printed by `:words` and at the end of a round
const SCORE_BAR_WIDTH: usize = 30;

/// Run the simple interactive CLI mode on stdin/stdout
///
/// `dictionary` is used to work out the best possible score of each root word.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
pub fn run_simple<O, P>(
    session: &mut GameSession<O>,
    provider: &P,
    dictionary: &[&str],
) -> Result<PlaySummary, String>
where
    O: SpellingOracle + Sync,
    P: RootWordProvider + ?Sized,
{
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(session, provider, dictionary, stdin.lock(), stdout.lock())
        .map_err(|e| e.to_string())
}

/// Play rounds reading one submission per line from `input`
///
/// Lines starting with `:` are commands: `:next` starts a new round, `:words` lists the
/// words found so far, `:help` shows the commands and `:quit` stops. End of input also
/// stops.
///
/// # Errors
///
/// Returns any I/O error from reading `input` or writing `output`.
pub fn play_lines<O, P, R, W>(
    session: &mut GameSession<O>,
    provider: &P,
    dictionary: &[&str],
    input: R,
    mut output: W,
) -> io::Result<PlaySummary>
where
    O: SpellingOracle + Sync,
    P: RootWordProvider + ?Sized,
    R: BufRead,
    W: Write,
{
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                 Word Scramble - Simple Mode                  ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "Make as many words as you can from the letters of the root word.")?;
    writeln!(output, "Longer words score more. Type :help for commands.\n")?;

    let mut summary = PlaySummary::default();
    let mut max_score = start_round(session, provider, dictionary, &mut summary, &mut output)?;

    for line in input.lines() {
        let line = line?;

        match line.trim() {
            ":quit" | ":q" | ":exit" => break,
            ":next" | ":n" => {
                finish_round(session, max_score, &mut summary, &mut output)?;
                max_score =
                    start_round(session, provider, dictionary, &mut summary, &mut output)?;
                continue;
            }
            ":words" | ":w" => {
                print_used_words(session, max_score, &mut output)?;
                continue;
            }
            ":help" | ":h" => {
                writeln!(
                    output,
                    "Commands: :next new root word, :words list found words, :quit exit"
                )?;
                continue;
            }
            _ => {}
        }

        match session.submit_word(&line) {
            Ok(Some(accepted)) => {
                summary.words_found += 1;
                writeln!(
                    output,
                    "{} {} {} {}",
                    "✓".green().bold(),
                    accepted.word.bright_white().bold(),
                    format!("+{}", accepted.points).green(),
                    format!("(score {})", accepted.score).bright_black()
                )?;
            }
            Ok(None) => {}
            Err(rejection) => {
                writeln!(output, "{}", format_rejection(&rejection))?;
            }
        }
    }

    finish_round(session, max_score, &mut summary, &mut output)?;
    writeln!(
        output,
        "\n👋 Thanks for playing! {} round(s), {} word(s), best score {}\n",
        summary.rounds, summary.words_found, summary.best_score
    )?;

    Ok(summary)
}

/// Start a round and return the best possible score for its root word
fn start_round<O, P, W>(
    session: &mut GameSession<O>,
    provider: &P,
    dictionary: &[&str],
    summary: &mut PlaySummary,
    output: &mut W,
) -> io::Result<usize>
where
    O: SpellingOracle + Sync,
    P: RootWordProvider + ?Sized,
    W: Write,
{
    let root = session.start_round(provider).to_uppercase();
    let max_score = analyze_root(&root, session.validator(), dictionary)
        .map_or(0, |target| target.max_score);
    summary.rounds += 1;

    writeln!(output, "────────────────────────────────────────────────────────────")?;
    writeln!(
        output,
        "Round {}: {}",
        summary.rounds,
        root.bright_yellow().bold()
    )?;
    writeln!(output, "────────────────────────────────────────────────────────────")?;
    Ok(max_score)
}

fn finish_round<O, W>(
    session: &GameSession<O>,
    max_score: usize,
    summary: &mut PlaySummary,
    output: &mut W,
) -> io::Result<()>
where
    O: SpellingOracle,
    W: Write,
{
    let score = session.score();
    summary.best_score = summary.best_score.max(score);
    writeln!(
        output,
        "\n📊 Round over: {} word(s), score {}",
        session.used_words().len(),
        score.to_string().bright_cyan().bold()
    )?;
    writeln!(output, "   {}", score_bar(score, max_score, SCORE_BAR_WIDTH))
}

fn print_used_words<O, W>(
    session: &GameSession<O>,
    max_score: usize,
    output: &mut W,
) -> io::Result<()>
where
    O: SpellingOracle,
    W: Write,
{
    if session.used_words().is_empty() {
        return writeln!(output, "No words yet!");
    }

    for word in session.used_words() {
        writeln!(output, "  {} {word}", length_badge(word))?;
    }
    writeln!(output, "Score: {}", session.score())?;
    writeln!(output, "{}", score_bar(session.score(), max_score, SCORE_BAR_WIDTH))
}
