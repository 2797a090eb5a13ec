//! Interactive daily round
//!
//! Text-based round over stdin: the player guesses until the session ends
//! or they quit.

use crate::catalog::Catalog;
use crate::game::{Game, GuessError, HintResult, MAX_ATTEMPTS, select, today_string};
use crate::output::display::{
    print_hint, print_loss, print_round_header, print_share_text, print_win,
};
use colored::Colorize;
use std::io::{self, Write};

/// How an interactive round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RoundEnd {
    /// Session reached a terminal status
    Finished,
    /// The player quit mid-round
    Quit,
}

/// Run today's puzzle interactively
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_daily(catalog: &Catalog) -> Result<(), String> {
    let date = today_string();
    let puzzle = select(catalog, &date);
    let mut game = Game::new(catalog, puzzle);

    print_banner();
    play_round(&mut game)?;
    Ok(())
}

/// Print the how-to-play banner
pub(crate) fn print_banner() {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                jidle — guess today's country                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("How to play:");
    println!("  1. Guess the country in {MAX_ATTEMPTS} tries.");
    println!("  2. Each wrong guess gets a hint: distance and direction");
    println!("     from your guess toward the answer.");
    println!("  3. English and Korean names are both accepted.\n");
    println!("Commands: 'quit' to exit\n");
}

/// Drive one round to completion or quit
pub(crate) fn play_round(game: &mut Game<'_>) -> Result<RoundEnd, String> {
    print_round_header(game);

    loop {
        let input = get_user_input("Guess a country")?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(RoundEnd::Quit);
            }
            _ => {}
        }

        match game.submit_guess(&input) {
            Err(GuessError::Empty) => {
                println!("  {}", "Type a country name first!".yellow());
            }
            Ok(HintResult::Hint(hint)) => {
                print_hint(game.session().attempts(), &hint, game.session().remaining());
            }
            Ok(HintResult::Win { attempts }) => {
                print_win(attempts);
                if let Some(text) = game.share_text() {
                    print_share_text(&text);
                }
                return Ok(RoundEnd::Finished);
            }
            Ok(HintResult::Loss { answer }) => {
                print_loss(&answer);
                if let Some(text) = game.share_text() {
                    print_share_text(&text);
                }
                return Ok(RoundEnd::Finished);
            }
            Ok(HintResult::AlreadyTerminal) => return Ok(RoundEnd::Finished),
        }
    }
}

/// Get user input with a prompt
pub(crate) fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
