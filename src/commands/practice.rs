//! Practice mode
//!
//! Rounds against randomly drawn countries instead of the daily target,
//! replaying as long as the player wants.

use super::play::{RoundEnd, get_user_input, play_round, print_banner};
use crate::catalog::Catalog;
use crate::game::{Game, Puzzle};
use rand::Rng;

/// Run practice rounds until the player stops
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_practice(catalog: &Catalog) -> Result<(), String> {
    print_banner();
    println!("Practice mode: every round draws a random country.\n");

    let mut game = Game::new(catalog, random_puzzle(catalog));
    loop {
        if play_round(&mut game)? == RoundEnd::Quit {
            return Ok(());
        }

        match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
            "yes" | "y" => game.reset(random_puzzle(catalog)),
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Draw a uniformly random puzzle from the catalog
fn random_puzzle(catalog: &Catalog) -> Puzzle<'_> {
    let index = rand::rng().random_range(0..catalog.len());
    Puzzle::new(index, &catalog.countries()[index])
}
