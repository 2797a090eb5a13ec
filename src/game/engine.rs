//! Game facade for the presentation layer
//!
//! Bundles the catalog, the day's puzzle, and the session into the one
//! handle a front-end drives: submit guesses, read state, export the share
//! summary.

use super::evaluator::{GuessError, HintResult, evaluate};
use super::selector::Puzzle;
use super::session::{MAX_ATTEMPTS, Session};
use crate::catalog::Catalog;
use crate::core::{Country, Difficulty, Geometry};

/// Address appended to the share summary
pub const SHARE_URL: &str = "https://jidle.kr";

/// One playable round: catalog + puzzle + session
pub struct Game<'a> {
    catalog: &'a Catalog,
    puzzle: Puzzle<'a>,
    session: Session,
}

impl<'a> Game<'a> {
    /// Start a round for the given puzzle
    #[must_use]
    pub const fn new(catalog: &'a Catalog, puzzle: Puzzle<'a>) -> Self {
        Self {
            catalog,
            puzzle,
            session: Session::new(),
        }
    }

    /// The active puzzle
    #[inline]
    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle<'a> {
        &self.puzzle
    }

    /// The target country
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &'a Country {
        self.puzzle.target()
    }

    /// Difficulty badge for the puzzle header
    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.puzzle.target().difficulty()
    }

    /// Outline geometry for silhouette rendering
    #[inline]
    #[must_use]
    pub const fn outline(&self) -> &'a Geometry {
        self.puzzle.target().outline()
    }

    /// Session state, read-only
    #[inline]
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Submit one guess: a single atomic evaluate-and-record step
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::Empty`] for empty or whitespace-only input.
    pub fn submit_guess(&mut self, raw_guess: &str) -> Result<HintResult, GuessError> {
        evaluate(
            &mut self.session,
            self.catalog,
            self.puzzle.target(),
            raw_guess,
        )
    }

    /// Clipboard-ready summary of a finished round
    ///
    /// `"<attempts>/<max>, difficulty: <difficulty>"`, one line per hint,
    /// then the share address. `None` until the session is terminal.
    #[must_use]
    pub fn share_text(&self) -> Option<String> {
        if !self.session.is_terminal() {
            return None;
        }

        let mut text = format!(
            "{}/{}, difficulty: {}",
            self.session.attempts(),
            MAX_ATTEMPTS,
            self.difficulty()
        );
        for hint in self.session.hints() {
            text.push('\n');
            text.push_str(hint);
        }
        text.push('\n');
        text.push_str(SHARE_URL);
        Some(text)
    }

    /// Start over with a new puzzle (practice rounds)
    pub fn reset(&mut self, puzzle: Puzzle<'a>) {
        self.puzzle = puzzle;
        self.session.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coordinates;

    fn test_country(name: &str, name_ko: &str, lat: f64, lon: f64) -> Country {
        Country::new(
            name.to_string(),
            name_ko.to_string(),
            Coordinates::new(lat, lon),
            Difficulty::Medium,
            Geometry::Polygon {
                coordinates: vec![vec![
                    [lon - 1.0, lat - 1.0],
                    [lon + 1.0, lat - 1.0],
                    [lon + 1.0, lat + 1.0],
                    [lon - 1.0, lat + 1.0],
                    [lon - 1.0, lat - 1.0],
                ]],
            },
        )
    }

    fn test_catalog() -> Catalog {
        Catalog::new(vec![
            test_country("South Korea", "대한민국", 37.5665, 126.9780),
            test_country("Japan", "일본", 35.6762, 139.6503),
        ])
        .unwrap()
    }

    fn game(catalog: &Catalog) -> Game<'_> {
        Game::new(catalog, Puzzle::new(0, &catalog.countries()[0]))
    }

    #[test]
    fn exposes_puzzle_metadata() {
        let catalog = test_catalog();
        let game = game(&catalog);

        assert_eq!(game.puzzle().index(), 0);
        assert_eq!(game.target().name(), "South Korea");
        assert_eq!(game.difficulty(), Difficulty::Medium);
        assert!(!game.outline().is_empty());
    }

    #[test]
    fn share_text_requires_terminal_session() {
        let catalog = test_catalog();
        let mut game = game(&catalog);

        assert_eq!(game.share_text(), None);
        game.submit_guess("Japan").unwrap();
        assert_eq!(game.share_text(), None);
    }

    #[test]
    fn share_text_after_win() {
        let catalog = test_catalog();
        let mut game = game(&catalog);

        game.submit_guess("Japan").unwrap();
        game.submit_guess("South Korea").unwrap();

        let text = game.share_text().unwrap();
        assert_eq!(
            text,
            "2/6, difficulty: medium\n1: 1149km northwest\nhttps://jidle.kr"
        );
    }

    #[test]
    fn share_text_after_loss_has_five_hint_lines() {
        let catalog = test_catalog();
        let mut game = game(&catalog);

        for _ in 0..6 {
            game.submit_guess("Japan").unwrap();
        }

        let text = game.share_text().unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7); // header + 5 hints + url
        assert_eq!(lines[0], "6/6, difficulty: medium");
        assert_eq!(lines[1], "1: 1149km northwest");
        assert_eq!(lines[6], SHARE_URL);
    }

    #[test]
    fn reset_starts_a_fresh_round() {
        let catalog = test_catalog();
        let mut game = game(&catalog);

        game.submit_guess("South Korea").unwrap();
        assert!(game.session().is_terminal());

        game.reset(Puzzle::new(1, &catalog.countries()[1]));
        assert_eq!(game.target().name(), "Japan");
        assert_eq!(game.session().attempts(), 0);
        assert!(game.session().is_in_progress());
        assert_eq!(game.share_text(), None);
    }
}
