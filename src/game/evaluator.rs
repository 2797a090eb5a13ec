//! Guess evaluation
//!
//! Turns one submitted guess into a win, a loss, or a distance/direction
//! hint, and applies the session transition in the same step. Pure apart
//! from the session mutation: no I/O, no rendering. Every non-empty guess
//! against an in-progress session yields a result, never a panic.

use super::session::{MAX_ATTEMPTS, Session, Status};
use crate::catalog::Catalog;
use crate::core::{Country, Direction};
use std::fmt;

/// Error for guesses rejected before evaluation
///
/// Rejected input consumes no attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Empty or whitespace-only input
    Empty,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "guess is empty"),
        }
    }
}

impl std::error::Error for GuessError {}

/// Outcome of evaluating one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintResult {
    /// Session already over; nothing was consumed or recorded
    AlreadyTerminal,
    /// Guess named the target; `attempts` includes the winning guess
    Win { attempts: u32 },
    /// Final attempt missed; carries the target's display name for reveal
    Loss { answer: String },
    /// Wrong guess with attempts to spare
    Hint(Hint),
}

/// The hint attached to a wrong guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    /// Guess matched no catalog entry in either locale
    UnknownCountry,
    /// Rounded distance and octant direction from the guessed country
    /// toward the target; no direction when the coordinates coincide
    Proximity {
        distance_km: u32,
        direction: Option<Direction>,
    },
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCountry => write!(f, "no such country!"),
            Self::Proximity {
                distance_km,
                direction: Some(direction),
            } => write!(f, "{distance_km}km {direction}"),
            Self::Proximity {
                distance_km,
                direction: None,
            } => write!(f, "{distance_km}km"),
        }
    }
}

/// Evaluate one guess against the target and record it on the session
///
/// One atomic step: exactly one attempt is consumed for any accepted guess,
/// the session status moves forward when the guess ends the game, and a
/// hint line is appended otherwise. Unknown country names consume an
/// attempt like any other wrong guess.
///
/// # Errors
///
/// Returns [`GuessError::Empty`] for empty or whitespace-only input, which
/// consumes nothing.
pub fn evaluate(
    session: &mut Session,
    catalog: &Catalog,
    target: &Country,
    raw_guess: &str,
) -> Result<HintResult, GuessError> {
    if session.is_terminal() {
        return Ok(HintResult::AlreadyTerminal);
    }
    if raw_guess.trim().is_empty() {
        return Err(GuessError::Empty);
    }

    let guess = raw_guess.trim().to_lowercase();
    let attempt = session.consume_attempt();

    if target.matches(&guess) {
        session.finish(Status::Won);
        return Ok(HintResult::Win { attempts: attempt });
    }

    if attempt == MAX_ATTEMPTS {
        session.finish(Status::Lost);
        return Ok(HintResult::Loss {
            answer: target.name().to_string(),
        });
    }

    let hint = match catalog.find(&guess) {
        Some(guessed) => {
            let from = guessed.coordinates();
            let to = target.coordinates();
            Hint::Proximity {
                distance_km: from.distance_km(to).round() as u32,
                direction: from.direction_to(to),
            }
        }
        None => Hint::UnknownCountry,
    };

    session.record_hint(format!("{attempt}: {hint}"));
    Ok(HintResult::Hint(hint))
}
