//! Inhouse Rating - MMR scoring and team balancing for in-house League matches
//!
//! This crate provides the skill-rating core of an in-house league: a
//! configurable MMR formula over ranked tier/division/LP snapshots, and
//! deterministic snake-seeded balancing of a scored player pool into two
//! teams.

pub mod balance;
pub mod config;
pub mod error;
pub mod mmr;
pub mod roster;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{RatingError, Result};
pub use types::*;

// Re-export key components
pub use balance::{balance_teams, snake_pattern, validate_roster};
pub use config::MmrConfig;
pub use mmr::{MmrCalculator, ScoreCalculator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
