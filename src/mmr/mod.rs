//! MMR scoring
//!
//! This module converts ranked tier/division/LP snapshots and win/loss
//! records into a single non-negative skill score.

pub mod calculator;

// Re-export commonly used types
pub use calculator::{MmrCalculator, ScoreBreakdown, ScoreCalculator};
