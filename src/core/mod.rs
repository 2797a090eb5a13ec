//! Core domain types for the guessing game
//!
//! The fundamental geographic types. Everything here is pure and testable:
//! coordinates, distances, directions, outline geometry, and the country
//! record itself.

mod coords;
mod country;
mod geometry;

pub use coords::{Coordinates, Direction, EARTH_RADIUS_KM};
pub use country::{Country, Difficulty};
pub use geometry::{Geometry, Ring};
