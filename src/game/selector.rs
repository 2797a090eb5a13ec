//! Daily puzzle selection
//!
//! Derives the day's target country from the calendar date: sum the
//! character codes of the rendered date string, take it modulo the catalog
//! length, index in load order. Deterministic for a given (catalog, date)
//! pair, which is what lets every player see the same puzzle on the same
//! day. It is not uniform, and it is deliberately sensitive to the exact
//! date rendering and catalog order, so both are fixed here.

use crate::catalog::Catalog;
use crate::core::Country;
use chrono::Local;

/// Canonical date rendering the seed is computed from
///
/// English abbreviations, zero-padded day: `"Wed Jan 01 2025"`. Changing
/// this changes every future puzzle.
pub const DATE_FORMAT: &str = "%a %b %d %Y";

/// Today's date in the canonical rendering, local time
#[must_use]
pub fn today_string() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

/// Integer seed for a date string: the sum of its character codes
#[must_use]
pub fn seed(date: &str) -> usize {
    date.chars().map(|c| c as usize).sum()
}

/// The puzzle derived for one calendar day
#[derive(Debug, Clone, Copy)]
pub struct Puzzle<'a> {
    index: usize,
    target: &'a Country,
}

impl<'a> Puzzle<'a> {
    /// Pair an index with its catalog entry
    #[must_use]
    pub const fn new(index: usize, target: &'a Country) -> Self {
        Self { index, target }
    }

    /// Position of the target in the catalog's load order
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The country to guess
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &'a Country {
        self.target
    }
}

/// Select the puzzle for a date
///
/// Pure in (catalog contents, catalog order, date string): the same inputs
/// always yield the same target.
///
/// # Examples
/// ```
/// use jidle::catalog::Catalog;
/// use jidle::game::select;
///
/// let catalog = Catalog::embedded().unwrap();
/// let a = select(&catalog, "Wed Jan 01 2025");
/// let b = select(&catalog, "Wed Jan 01 2025");
/// assert_eq!(a.index(), b.index());
/// ```
#[must_use]
pub fn select<'a>(catalog: &'a Catalog, date: &str) -> Puzzle<'a> {
    let index = seed(date) % catalog.len();
    Puzzle::new(index, &catalog.countries()[index])
}
