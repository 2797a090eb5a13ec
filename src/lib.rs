//! Jidle
//!
//! The core of a daily country-guessing game: a deterministic puzzle is
//! derived from the calendar date, and each wrong guess earns a distance
//! and direction hint toward the answer.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use jidle::catalog::Catalog;
//! use jidle::game::{Game, select};
//!
//! let catalog = Catalog::embedded().unwrap();
//! let puzzle = select(&catalog, "Wed Jan 01 2025");
//!
//! let mut game = Game::new(&catalog, puzzle);
//! let result = game.submit_guess("South Korea").unwrap();
//! println!("{result:?}");
//! ```

// Core domain types
pub mod core;

// Country catalog
pub mod catalog;

// Game logic
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
