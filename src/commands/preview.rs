//! Puzzle preview command
//!
//! Dry-runs the daily selection for a date: which seed it produces and
//! which catalog entry that lands on. Spoils the answer, so it is a tool
//! for curators, not players.

use crate::catalog::Catalog;
use crate::core::{Coordinates, Difficulty};
use crate::game::{seed, select, today_string};

/// Result of previewing a date's puzzle
pub struct PreviewResult {
    pub date: String,
    pub seed: usize,
    pub index: usize,
    pub name: String,
    pub name_ko: String,
    pub difficulty: Difficulty,
    pub coordinates: Coordinates,
}

/// Preview the puzzle a date selects; defaults to today
#[must_use]
pub fn preview_date(catalog: &Catalog, date: Option<String>) -> PreviewResult {
    let date = date.unwrap_or_else(today_string);
    let puzzle = select(catalog, &date);
    let target = puzzle.target();

    PreviewResult {
        seed: seed(&date),
        index: puzzle.index(),
        name: target.name().to_string(),
        name_ko: target.name_ko().to_string(),
        difficulty: target.difficulty(),
        coordinates: target.coordinates(),
        date,
    }
}
