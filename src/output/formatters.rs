//! Formatting utilities for terminal output

use crate::core::Direction;
use crate::game::Hint;

/// Arrow glyph for a direction hint, or a dot when there is none
#[must_use]
pub const fn direction_arrow(direction: Option<Direction>) -> &'static str {
    match direction {
        Some(Direction::North) => "↑",
        Some(Direction::NorthEast) => "↗",
        Some(Direction::East) => "→",
        Some(Direction::SouthEast) => "↘",
        Some(Direction::South) => "↓",
        Some(Direction::SouthWest) => "↙",
        Some(Direction::West) => "←",
        Some(Direction::NorthWest) => "↖",
        None => "·",
    }
}

/// Attempts gauge: one filled block per used guess
#[must_use]
pub fn attempts_bar(used: u32, max: u32) -> String {
    let used = used.min(max) as usize;
    format!("{}{}", "█".repeat(used), "░".repeat(max as usize - used))
}

/// One rendered hint line, with an arrow for proximity hints
#[must_use]
pub fn hint_line(attempt: u32, hint: &Hint) -> String {
    match hint {
        Hint::UnknownCountry => format!("{attempt}: {hint}"),
        Hint::Proximity { direction, .. } => {
            format!("{attempt}: {hint} {}", direction_arrow(*direction))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempts_bar_empty() {
        assert_eq!(attempts_bar(0, 6), "░░░░░░");
    }

    #[test]
    fn attempts_bar_partial() {
        assert_eq!(attempts_bar(2, 6), "██░░░░");
    }

    #[test]
    fn attempts_bar_full() {
        assert_eq!(attempts_bar(6, 6), "██████");
    }

    #[test]
    fn attempts_bar_clamps_overflow() {
        assert_eq!(attempts_bar(9, 6), "██████");
    }

    #[test]
    fn arrows_cover_all_octants() {
        let octants = [
            (Direction::North, "↑"),
            (Direction::NorthEast, "↗"),
            (Direction::East, "→"),
            (Direction::SouthEast, "↘"),
            (Direction::South, "↓"),
            (Direction::SouthWest, "↙"),
            (Direction::West, "←"),
            (Direction::NorthWest, "↖"),
        ];
        for (direction, arrow) in octants {
            assert_eq!(direction_arrow(Some(direction)), arrow);
        }
        assert_eq!(direction_arrow(None), "·");
    }

    #[test]
    fn hint_line_proximity() {
        let hint = Hint::Proximity {
            distance_km: 1149,
            direction: Some(Direction::NorthWest),
        };
        assert_eq!(hint_line(3, &hint), "3: 1149km northwest ↖");
    }

    #[test]
    fn hint_line_unknown() {
        assert_eq!(hint_line(1, &Hint::UnknownCountry), "1: no such country!");
    }
}
