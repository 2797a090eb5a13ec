//! Command implementations

mod play;
mod practice;
mod preview;

pub use play::run_daily;
pub use practice::run_practice;
pub use preview::{PreviewResult, preview_date};
