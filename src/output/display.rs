//! Display functions for command results

use super::formatters::{create_progress_bar, length_badge};
use crate::commands::{AnalysisResult, SurveyStatistics};
use crate::core::letter_count;
use colored::Colorize;

/// Words printed per line in the analysis listing
const WORDS_PER_LINE: usize = 8;

/// Print the result of analyzing a root word
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ROOT ANALYSIS:".bright_cyan().bold(),
        result.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Playable words:  {}", result.total_words);
    println!(
        "   Max score:       {}",
        result.max_score.to_string().bright_yellow().bold()
    );
    if let Some(longest) = result.longest() {
        println!(
            "   Longest word:    {} {}",
            longest.bright_green(),
            length_badge(longest)
        );
    }

    if result.words.is_empty() {
        println!("\n{}", "No playable words for this root.".red());
        return;
    }

    println!("\n📈 {}", "By length:".bright_cyan().bold());
    let lengths: Vec<usize> = {
        let mut lengths: Vec<usize> = result.words.iter().map(|w| letter_count(w)).collect();
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        lengths.dedup();
        lengths
    };
    for length in lengths {
        let count = result.count_with_length(length);
        let bar = create_progress_bar(count, result.total_words, 40);
        println!("   {length:2}: {} {count:4}", bar.green());
    }

    println!("\n📝 {}", "Words:".bright_cyan().bold());
    for chunk in result.words.chunks(WORDS_PER_LINE) {
        println!("   {}", chunk.join("  "));
    }
}

/// Print survey statistics
pub fn print_survey_statistics(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Survey Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall".bright_cyan().bold());
    println!("  Root words surveyed: {}", stats.total_roots);
    println!(
        "  Average words:       {}",
        format!("{:.1}", stats.average_words).bright_yellow().bold()
    );
    println!("  Average max score:   {:.1}", stats.average_max_score);
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    if !stats.richest.is_empty() {
        println!("\n✨ {}", "Richest Roots".green().bold());
        for (root, count) in &stats.richest {
            println!("  {} ({count} words)", root.to_uppercase().bright_green());
        }
    }

    if !stats.poorest.is_empty() {
        println!("\n😰 {}", "Poorest Roots".yellow().bold());
        for (root, count) in &stats.poorest {
            println!("  {} ({count} words)", root.to_uppercase().yellow());
        }
    }

    if !stats.unplayable.is_empty() {
        println!("\n❌ {}", "Unplayable Roots".red().bold());
        for root in &stats.unplayable {
            println!("  {}", root.to_uppercase().red());
        }
    }

    println!("\n🐛 {}", "Fallback Root".bright_cyan().bold());
    let fallback = &stats.fallback;
    let verdict = if fallback.words.is_empty() {
        "unplayable".red().bold()
    } else {
        "playable".green().bold()
    };
    println!(
        "  {}: {verdict} ({} words, max score {})",
        fallback.root.to_uppercase(),
        fallback.total_words,
        fallback.max_score
    );
}
