//! Playable country records
//!
//! A Country is immutable once loaded: two display names (English and
//! Korean, the two locales guesses are accepted in), a centroid coordinate,
//! an informational difficulty label, and the outline geometry.

use super::{Coordinates, Geometry};
use serde::Deserialize;
use std::fmt;

/// A single playable country
#[derive(Debug, Clone, PartialEq)]
pub struct Country {
    name: String,
    name_ko: String,
    coordinates: Coordinates,
    difficulty: Difficulty,
    outline: Geometry,
}

impl Country {
    /// Assemble a country record; the catalog loader is the only producer
    pub(crate) fn new(
        name: String,
        name_ko: String,
        coordinates: Coordinates,
        difficulty: Difficulty,
        outline: Geometry,
    ) -> Self {
        Self {
            name,
            name_ko,
            coordinates,
            difficulty,
            outline,
        }
    }

    /// English display name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Korean display name
    #[inline]
    #[must_use]
    pub fn name_ko(&self) -> &str {
        &self.name_ko
    }

    /// Representative coordinates (outline centroid)
    #[inline]
    #[must_use]
    pub const fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// Informational difficulty label
    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Boundary geometry, for silhouette rendering
    #[inline]
    #[must_use]
    pub const fn outline(&self) -> &Geometry {
        &self.outline
    }

    /// Does a normalized (trimmed, lowercased) guess name this country?
    ///
    /// Either locale matches, case-insensitively.
    #[must_use]
    pub fn matches(&self, normalized: &str) -> bool {
        self.name.to_lowercase() == normalized || self.name_ko.to_lowercase() == normalized
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.name_ko)
    }
}

/// Difficulty label attached to each country in the data file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        };
        write!(f, "{label}")
    }
}
