//! Survey every root word
//!
//! Runs the analysis on each root in the pool to show which rounds are rich and which
//! leave the player almost nothing to find.

use super::analyze::{AnalysisResult, analyze_root};
use crate::dictionary::SpellingOracle;
use crate::session::{FALLBACK_ROOT, WordPool};
use crate::validator::WordValidator;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Number of roots listed in the richest/poorest tables
const RANKING_SIZE: usize = 5;

/// Statistics from surveying a pool of root words
#[derive(Debug)]
pub struct SurveyStatistics {
    pub total_roots: usize,
    pub average_words: f64,
    pub average_max_score: f64,
    /// Roots with the most playable words, best first
    pub richest: Vec<(String, usize)>,
    /// Roots with the fewest playable words, worst first
    pub poorest: Vec<(String, usize)>,
    /// Roots with no playable word at all
    pub unplayable: Vec<String>,
    /// Analysis of the fallback root under the same dictionary
    pub fallback: AnalysisResult,
    pub total_time: Duration,
}

/// Analyze every root in `pool` (or the first `limit` of them)
///
/// # Errors
///
/// Returns an error if a root cannot be analyzed.
pub fn run_survey<O: SpellingOracle + Sync>(
    pool: &WordPool,
    validator: &WordValidator<O>,
    candidates: &[&str],
    limit: Option<usize>,
) -> Result<SurveyStatistics, String> {
    let roots: Vec<&String> = pool
        .words()
        .iter()
        .take(limit.unwrap_or(pool.len()))
        .collect();

    println!("🔎 Surveying {} root words...", roots.len());

    let pb = ProgressBar::new(roots.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut results = Vec::with_capacity(roots.len());

    for root in roots {
        pb.set_message(root.clone());
        results.push(analyze_root(root, validator, candidates)?);
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let fallback = analyze_root(FALLBACK_ROOT, validator, candidates)?;
    Ok(summarize(&results, fallback, start.elapsed()))
}

/// Reduce per-root analyses to survey statistics
#[must_use]
pub fn summarize(
    results: &[AnalysisResult],
    fallback: AnalysisResult,
    total_time: Duration,
) -> SurveyStatistics {
    let total_roots = results.len();
    let (average_words, average_max_score) = if total_roots > 0 {
        let words: usize = results.iter().map(|r| r.total_words).sum();
        let score: usize = results.iter().map(|r| r.max_score).sum();
        (
            words as f64 / total_roots as f64,
            score as f64 / total_roots as f64,
        )
    } else {
        (0.0, 0.0)
    };

    let mut ranked: Vec<(String, usize)> = results
        .iter()
        .map(|r| (r.root.clone(), r.total_words))
        .collect();
    ranked.sort_by(|(a_root, a_count), (b_root, b_count)| {
        b_count.cmp(a_count).then_with(|| a_root.cmp(b_root))
    });

    let richest: Vec<(String, usize)> = ranked.iter().take(RANKING_SIZE).cloned().collect();
    let poorest: Vec<(String, usize)> = ranked.iter().rev().take(RANKING_SIZE).cloned().collect();

    let unplayable = results
        .iter()
        .filter(|r| r.words.is_empty())
        .map(|r| r.root.clone())
        .collect();

    SurveyStatistics {
        total_roots,
        average_words,
        average_max_score,
        richest,
        poorest,
        unplayable,
        fallback,
        total_time,
    }
}
