//! Scoring policy configuration
//!
//! Every constant the MMR formula uses lives here so the policy can be tuned
//! (or loaded from a TOML file) without touching the algorithm or call sites.

use crate::error::RatingError;
use crate::types::{Division, Tier};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One step of the confidence table: games below `max_games` use `k`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KFactorStep {
    /// Exclusive upper bound on total games for this step
    pub max_games: u32,
    /// Winrate-delta multiplier applied inside this step
    pub k: f64,
}

/// Configuration for the MMR formula
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MmrConfig {
    /// Score spread of one full tier; division offsets are quarters of this
    pub tier_span: u32,
    /// Neutral baseline for unranked (and unrecognized) tiers
    pub unranked_base: u32,
    /// Down-weight applied to the base score for Flex-queue snapshots.
    /// Applies to the base only, never to the winrate adjustment.
    pub flex_weight: f64,
    /// Confidence steps, ascending by `max_games`
    pub k_factor_steps: Vec<KFactorStep>,
    /// Multiplier once total games exceed every step
    pub fallback_k: f64,
}

impl Default for MmrConfig {
    fn default() -> Self {
        Self {
            tier_span: 400,
            unranked_base: 1000,
            flex_weight: 0.85,
            k_factor_steps: vec![
                KFactorStep { max_games: 50, k: 20.0 },
                KFactorStep { max_games: 100, k: 12.0 },
                KFactorStep { max_games: 150, k: 8.0 },
                KFactorStep { max_games: 200, k: 4.0 },
            ],
            fallback_k: 2.0,
        }
    }
}

impl MmrConfig {
    /// Base value for a tier under this config
    ///
    /// Apex tiers all share the Master base; divisions and LP are the only
    /// fine-grained signal up there.
    pub fn base_for(&self, tier: Tier) -> u32 {
        match tier.ladder_index() {
            Some(index) => index.min(7) * self.tier_span,
            None => self.unranked_base,
        }
    }

    /// Division offset for a tier, zero for apex tiers regardless of input
    pub fn division_offset(&self, tier: Tier, division: Option<Division>) -> u32 {
        if tier.is_apex() {
            return 0;
        }
        division
            .map(|d| d.rungs() * (self.tier_span / 4))
            .unwrap_or(0)
    }

    /// Confidence multiplier for a game count
    ///
    /// Few games mean the rank is noisy and winrate swings matter a lot; lots
    /// of games mean the rank already reflects skill and winrate matters little.
    pub fn k_for(&self, total_games: u32) -> f64 {
        for step in &self.k_factor_steps {
            if total_games < step.max_games {
                return step.k;
            }
        }
        self.fallback_k
    }

    /// Load configuration overrides from a TOML file
    pub fn from_toml_file(path: &Path) -> crate::error::Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| RatingError::ConfigurationError {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;
        let config: MmrConfig =
            toml::from_str(&raw).map_err(|e| RatingError::ConfigurationError {
                message: format!("Failed to parse {}: {}", path.display(), e),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.tier_span == 0 {
            return Err(RatingError::ConfigurationError {
                message: "Tier span must be positive".to_string(),
            }
            .into());
        }

        if self.flex_weight <= 0.0 || self.flex_weight > 1.0 {
            return Err(RatingError::ConfigurationError {
                message: format!("Flex weight must be in (0, 1], got {}", self.flex_weight),
            }
            .into());
        }

        let mut previous = None;
        for step in &self.k_factor_steps {
            if step.k <= 0.0 {
                return Err(RatingError::ConfigurationError {
                    message: format!("K-factor must be positive, got {}", step.k),
                }
                .into());
            }
            if let Some(prev) = previous {
                if step.max_games <= prev {
                    return Err(RatingError::ConfigurationError {
                        message: "K-factor steps must be strictly ascending by max_games"
                            .to_string(),
                    }
                    .into());
                }
            }
            previous = Some(step.max_games);
        }

        if self.fallback_k <= 0.0 {
            return Err(RatingError::ConfigurationError {
                message: format!("Fallback k must be positive, got {}", self.fallback_k),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = MmrConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tier_span, 400);
        assert_eq!(config.flex_weight, 0.85);
    }

    #[test]
    fn test_default_tier_bases() {
        let config = MmrConfig::default();
        assert_eq!(config.base_for(Tier::Iron), 0);
        assert_eq!(config.base_for(Tier::Gold), 1200);
        assert_eq!(config.base_for(Tier::Diamond), 2400);
        // Apex tiers collapse to one base
        assert_eq!(config.base_for(Tier::Master), 2800);
        assert_eq!(config.base_for(Tier::Grandmaster), 2800);
        assert_eq!(config.base_for(Tier::Challenger), 2800);
        assert_eq!(config.base_for(Tier::Unranked), 1000);
    }

    #[test]
    fn test_division_offsets() {
        let config = MmrConfig::default();
        assert_eq!(config.division_offset(Tier::Gold, Some(Division::IV)), 0);
        assert_eq!(config.division_offset(Tier::Gold, Some(Division::III)), 100);
        assert_eq!(config.division_offset(Tier::Gold, Some(Division::II)), 200);
        assert_eq!(config.division_offset(Tier::Gold, Some(Division::I)), 300);
        assert_eq!(config.division_offset(Tier::Gold, None), 0);
        // Apex tiers ignore divisions entirely
        assert_eq!(config.division_offset(Tier::Master, Some(Division::I)), 0);
    }

    #[test]
    fn test_k_factor_steps() {
        let config = MmrConfig::default();
        assert_eq!(config.k_for(0), 20.0);
        assert_eq!(config.k_for(49), 20.0);
        assert_eq!(config.k_for(50), 12.0);
        assert_eq!(config.k_for(99), 12.0);
        assert_eq!(config.k_for(100), 8.0);
        assert_eq!(config.k_for(149), 8.0);
        assert_eq!(config.k_for(150), 4.0);
        assert_eq!(config.k_for(199), 4.0);
        assert_eq!(config.k_for(200), 2.0);
        assert_eq!(config.k_for(5000), 2.0);
    }

    #[test]
    fn test_config_validation() {
        let mut config = MmrConfig::default();
        assert!(config.validate().is_ok());

        config.tier_span = 0;
        assert!(config.validate().is_err());

        config = MmrConfig::default();
        config.flex_weight = 1.5;
        assert!(config.validate().is_err());

        config = MmrConfig::default();
        config.flex_weight = 0.0;
        assert!(config.validate().is_err());

        config = MmrConfig::default();
        config.k_factor_steps[1].max_games = 10;
        assert!(config.validate().is_err());

        config = MmrConfig::default();
        config.fallback_k = -2.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_toml_round_trip() {
        let config = MmrConfig::default();
        let raw = toml::to_string(&config).unwrap();
        let parsed: MmrConfig = toml::from_str(&raw).unwrap();
        assert_eq!(parsed.tier_span, config.tier_span);
        assert_eq!(parsed.flex_weight, config.flex_weight);
        assert_eq!(parsed.k_factor_steps, config.k_factor_steps);
    }
}
