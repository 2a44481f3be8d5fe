//! Configuration management for the rating crate
//!
//! This module handles scoring-policy constants, application settings,
//! validation, and default values.

pub mod app;
pub mod mmr;

// Re-export commonly used types
pub use app::{validate_config, AppConfig};
pub use mmr::{KFactorStep, MmrConfig};
