//! Game logic: daily selection, guess evaluation, session state
//!
//! The deterministic core of the game. [`select`] picks the day's target,
//! [`evaluate`] scores one guess, [`Session`] tracks the round, and
//! [`Game`] ties them together for a front-end.

mod engine;
mod evaluator;
mod selector;
mod session;

pub use engine::{Game, SHARE_URL};
pub use evaluator::{GuessError, Hint, HintResult, evaluate};
pub use selector::{DATE_FORMAT, Puzzle, seed, select, today_string};
pub use session::{MAX_ATTEMPTS, Session, Status};
