//! Team balancing
//!
//! Deterministic snake-seeded partitioning of a scored player pool into two
//! near-equal teams.

pub mod snake;

// Re-export commonly used functions
pub use snake::{balance_teams, snake_pattern, validate_roster};
