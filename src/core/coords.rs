//! Geographic coordinates and compass directions
//!
//! A Coordinates pair stores latitude/longitude in degrees and provides the
//! great-circle distance and octant-direction primitives the hint system is
//! built on.

use std::cmp::Ordering;
use std::fmt;

/// Mean Earth radius in kilometers, used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    lat: f64,
    lon: f64,
}

impl Coordinates {
    /// Create a new coordinate pair from degrees
    #[inline]
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude in degrees
    #[inline]
    #[must_use]
    pub const fn lat(self) -> f64 {
        self.lat
    }

    /// Longitude in degrees
    #[inline]
    #[must_use]
    pub const fn lon(self) -> f64 {
        self.lon
    }

    /// Great-circle distance to another point in kilometers
    ///
    /// Uses the haversine formula on a sphere of radius [`EARTH_RADIUS_KM`].
    /// Symmetric: `a.distance_km(b) == b.distance_km(a)`.
    ///
    /// # Examples
    /// ```
    /// use jidle::core::Coordinates;
    ///
    /// let seoul = Coordinates::new(37.5665, 126.9780);
    /// let tokyo = Coordinates::new(35.6762, 139.6503);
    /// assert_eq!(seoul.distance_km(tokyo).round(), 1149.0);
    /// ```
    #[must_use]
    pub fn distance_km(self, other: Self) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + (d_lon / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }

    /// Octant direction from this point toward `target`
    ///
    /// Classifies the signs of the component-wise deltas (`dy` = latitude,
    /// `dx` = longitude) into one of eight compass labels. Returns `None`
    /// when both deltas are zero. This is a raw-delta classification, not a
    /// spherical bearing.
    #[must_use]
    pub fn direction_to(self, target: Self) -> Option<Direction> {
        let dy = target.lat - self.lat;
        let dx = target.lon - self.lon;

        match (dx.total_cmp(&0.0), dy.total_cmp(&0.0)) {
            (Ordering::Greater, Ordering::Greater) => Some(Direction::NorthEast),
            (Ordering::Greater, Ordering::Less) => Some(Direction::SouthEast),
            (Ordering::Less, Ordering::Greater) => Some(Direction::NorthWest),
            (Ordering::Less, Ordering::Less) => Some(Direction::SouthWest),
            (Ordering::Greater, Ordering::Equal) => Some(Direction::East),
            (Ordering::Less, Ordering::Equal) => Some(Direction::West),
            (Ordering::Equal, Ordering::Greater) => Some(Direction::North),
            (Ordering::Equal, Ordering::Less) => Some(Direction::South),
            (Ordering::Equal, Ordering::Equal) => None,
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lon)
    }
}

/// One of eight compass octants
///
/// Derived from the sign of coordinate deltas, not from a computed bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::North => "north",
            Self::NorthEast => "northeast",
            Self::East => "east",
            Self::SouthEast => "southeast",
            Self::South => "south",
            Self::SouthWest => "southwest",
            Self::West => "west",
            Self::NorthWest => "northwest",
        };
        write!(f, "{label}")
    }
}
