//! The in-house MMR formula
//!
//! Blends a rank-derived base value with a confidence-weighted winrate
//! adjustment: players with few games on record get a large winrate
//! multiplier (a smurf climbing at 70% should rate well above their tier),
//! while long histories pin the score to the rank itself.

use crate::config::MmrConfig;
use crate::types::{QueueKind, RankSnapshot};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Trait for turning a rank snapshot into a skill score
pub trait ScoreCalculator: Send + Sync {
    /// Compute the skill score for a snapshot
    ///
    /// Total over the whole input domain: unknown tiers, missing divisions
    /// and zero-game records all produce a score, never an error.
    fn compute_score(&self, snapshot: &RankSnapshot) -> u32;

    /// Neutral score for players with no ranked data at all
    fn baseline(&self) -> u32;
}

/// Intermediate terms of one score computation, for display and tracing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Tier base + division offset + league points, before queue weighting
    pub raw_base: u32,
    /// Raw base after the queue weight
    pub weighted_base: f64,
    /// Winrate minus break-even, None when no games are recorded
    pub winrate_delta: Option<f64>,
    /// Confidence multiplier used, None when no games are recorded
    pub k_factor: Option<f64>,
    /// Final rounded score, floored at zero
    pub score: u32,
}

/// Production score calculator driven by an [`MmrConfig`]
#[derive(Debug, Clone)]
pub struct MmrCalculator {
    config: MmrConfig,
}

impl MmrCalculator {
    /// Create a calculator after validating the supplied policy
    pub fn new(config: MmrConfig) -> crate::error::Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The policy this calculator runs with
    pub fn config(&self) -> &MmrConfig {
        &self.config
    }

    /// Compute a score along with every intermediate term
    pub fn breakdown(&self, snapshot: &RankSnapshot) -> ScoreBreakdown {
        let raw_base = self
            .config
            .base_for(snapshot.tier)
            .saturating_add(self.config.division_offset(snapshot.tier, snapshot.division))
            .saturating_add(snapshot.league_points);

        // Flex rank is a weaker signal; the winrate adjustment below is
        // deliberately left unweighted.
        let queue_weight = match snapshot.queue {
            QueueKind::Flex => self.config.flex_weight,
            QueueKind::SoloDuo => 1.0,
        };
        let weighted_base = f64::from(raw_base) * queue_weight;

        let (winrate_delta, k_factor, score) = match snapshot.winrate() {
            None => (None, None, weighted_base.round() as u32),
            Some(winrate) => {
                let delta = winrate - 50.0;
                let k = self.config.k_for(snapshot.total_games());
                let adjusted = (weighted_base + delta * k).round().max(0.0) as u32;
                (Some(delta), Some(k), adjusted)
            }
        };

        debug!(
            tier = %snapshot.tier,
            queue = %snapshot.queue,
            raw_base,
            weighted_base,
            ?winrate_delta,
            ?k_factor,
            score,
            "computed mmr"
        );

        ScoreBreakdown {
            raw_base,
            weighted_base,
            winrate_delta,
            k_factor,
            score,
        }
    }
}

impl Default for MmrCalculator {
    fn default() -> Self {
        // The default policy is known-valid, no need to re-check it
        Self {
            config: MmrConfig::default(),
        }
    }
}

impl ScoreCalculator for MmrCalculator {
    fn compute_score(&self, snapshot: &RankSnapshot) -> u32 {
        self.breakdown(snapshot).score
    }

    fn baseline(&self) -> u32 {
        self.config.unranked_base
    }
}
