//! Display functions for command results

use super::formatters::{attempts_bar, hint_line};
use crate::catalog::Catalog;
use crate::commands::PreviewResult;
use crate::game::{Game, Hint, MAX_ATTEMPTS};
use colored::Colorize;

/// Print the round header: difficulty badge and attempts gauge
pub fn print_round_header(game: &Game<'_>) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Today's country — difficulty: {}",
        game.difficulty().to_string().bright_yellow().bold()
    );
    println!(
        "Attempts: {} ({} left)",
        attempts_bar(game.session().attempts(), MAX_ATTEMPTS),
        game.session().remaining()
    );
    println!("{}", "─".repeat(60).cyan());
}

/// Print one hint with the attempts-remaining counter
pub fn print_hint(attempt: u32, hint: &Hint, remaining: u32) {
    let line = hint_line(attempt, hint);
    match hint {
        Hint::UnknownCountry => println!("  {}", line.red()),
        Hint::Proximity { .. } => println!("  {}", line.bright_white()),
    }
    println!(
        "  {}",
        format!(
            "{remaining} {} left",
            if remaining == 1 { "guess" } else { "guesses" }
        )
        .bright_black()
    );
}

/// Print the victory banner
pub fn print_win(attempts: u32) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        format!("  🎉 Correct! Solved in {attempts}/{MAX_ATTEMPTS}.")
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print the defeat banner with the revealed answer
pub fn print_loss(answer: &str) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        format!("  ❌ Out of guesses! The answer was {answer}.")
            .red()
            .bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print the share summary of a finished round
pub fn print_share_text(text: &str) {
    println!("\n{}", "Share your result:".bright_cyan().bold());
    for line in text.lines() {
        println!("  {line}");
    }
    println!();
}

/// Print the catalog as a name/difficulty listing
pub fn print_countries(catalog: &Catalog) {
    println!("\n{} playable countries:\n", catalog.len());
    for country in catalog.countries() {
        println!(
            "  {:<24} {:<16} {}",
            country.name(),
            country.name_ko(),
            country.difficulty()
        );
    }
    println!();
}

/// Print a deterministic-selection preview
pub fn print_preview(result: &PreviewResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {}",
        "PUZZLE PREVIEW:".bright_cyan().bold(),
        result.date.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!("\n  Seed:        {}", result.seed);
    println!("  Index:       {}", result.index);
    println!(
        "  Target:      {} ({})",
        result.name.bright_white().bold(),
        result.name_ko
    );
    println!("  Difficulty:  {}", result.difficulty);
    println!("  Coordinates: {}", result.coordinates);
    println!();
}
