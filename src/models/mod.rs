//! Data models for the leaderboard backend.
//!
//! Field names follow the roster provider's camelCase JSON so records pass through unchanged.

mod participant;
mod query;
mod stats;

pub use participant::*;
pub use query::*;
pub use stats::*;
