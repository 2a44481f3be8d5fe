//! Roster file model
//!
//! The serde shape the CLI reads lobby rosters from. Entries carry either a
//! precomputed score, raw rank data to score on the fly, or nothing at all
//! (scored at the neutral baseline).

use crate::error::RatingError;
use crate::mmr::ScoreCalculator;
use crate::types::{Division, QueueKind, RankSnapshot, ScoredPlayer, Tier};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A roster file: the pool of players waiting to be split into teams
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterFile {
    pub players: Vec<RosterEntry>,
}

/// One player in a roster file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    /// Stable identifier; defaults to the name when omitted
    #[serde(default)]
    pub id: Option<String>,
    /// Precomputed score; takes precedence over `rank` when both are present
    #[serde(default)]
    pub score: Option<u32>,
    /// Raw rank data to score on the fly
    #[serde(default)]
    pub rank: Option<RankEntry>,
}

/// Raw rank data as it comes out of the rank cache
///
/// Tier, division and queue are kept as strings here and parsed totally at
/// the boundary: unknown tiers fold to unranked, unknown divisions to none.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankEntry {
    pub tier: String,
    #[serde(default)]
    pub division: Option<String>,
    #[serde(default)]
    pub league_points: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub queue: Option<String>,
}

impl RankEntry {
    /// Parse into a snapshot the calculator accepts
    pub fn to_snapshot(&self) -> RankSnapshot {
        RankSnapshot::new(
            Tier::from_name(&self.tier),
            self.division.as_deref().and_then(Division::from_name),
            self.league_points,
            self.wins,
            self.losses,
            self.queue
                .as_deref()
                .map(QueueKind::from_queue_type)
                .unwrap_or(QueueKind::SoloDuo),
        )
    }
}

impl RosterFile {
    /// Load a roster from a JSON file
    pub fn from_json_file(path: &Path) -> crate::error::Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| RatingError::RosterFileError {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;
        let roster: RosterFile =
            serde_json::from_str(&raw).map_err(|e| RatingError::RosterFileError {
                message: format!("Failed to parse {}: {}", path.display(), e),
            })?;
        Ok(roster)
    }

    /// Score every entry, producing the pool the balancer consumes
    pub fn to_scored(&self, calculator: &dyn ScoreCalculator) -> Vec<ScoredPlayer> {
        self.players
            .iter()
            .map(|entry| {
                let score = match (entry.score, &entry.rank) {
                    (Some(score), _) => score,
                    (None, Some(rank)) => calculator.compute_score(&rank.to_snapshot()),
                    (None, None) => calculator.baseline(),
                };
                let id = entry.id.clone().unwrap_or_else(|| entry.name.clone());
                ScoredPlayer::new(id, entry.name.clone(), score)
            })
            .collect()
    }
}
