//! Display functions for command results

use super::formatters::{length_badge, points, rejection_line};
use crate::commands::CheckResult;
use crate::game::Analysis;
use colored::Colorize;

/// Print the verdict for a checked candidate
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}",
        result.root_word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    match &result.verdict {
        Ok(accepted) => println!(
            "\n{}",
            format!(
                "✅ {} {} is accepted for {}",
                length_badge(&accepted.word),
                accepted.word,
                points(accepted.score)
            )
            .green()
            .bold()
        ),
        Err(rejection) if rejection.is_silent() => {
            println!("\n{}", "Nothing to check: the candidate is empty".bright_black());
        }
        Err(rejection) => println!(
            "\n{}",
            format!("❌ {}: {}", result.candidate.trim(), rejection_line(*rejection))
                .red()
                .bold()
        ),
    }
}

/// Print every achievable word for a root word
pub fn print_analysis_result(analysis: &Analysis) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ROOT WORD ANALYSIS:".bright_cyan().bold(),
        analysis.root_word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if analysis.is_empty() {
        println!("\nNo dictionary words can be made from this root word.");
        return;
    }

    println!(
        "\n📊 {} achievable words, {} available",
        analysis.len(),
        points(analysis.max_score).bright_yellow().bold()
    );

    let mut current_score = None;
    for achievable in &analysis.words {
        if current_score != Some(achievable.score) {
            current_score = Some(achievable.score);
            println!("\n   {}", points(achievable.score).bright_cyan().bold());
        }
        println!("     {} {}", length_badge(&achievable.word), achievable.word);
    }
}
