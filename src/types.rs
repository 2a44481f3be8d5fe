//! Common types used throughout the rating crate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for players
pub type PlayerId = String;

/// Ranked ladder tier, lowest to highest
///
/// `Master` and above are apex tiers: they carry no divisions and share a
/// single base value in the scoring tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Emerald,
    Diamond,
    Master,
    Grandmaster,
    Challenger,
    Unranked,
}

impl Tier {
    /// Position on the ranked ladder, 0 (Iron) through 9 (Challenger)
    ///
    /// `Unranked` has no ladder position; callers handle it before asking.
    pub fn ladder_index(&self) -> Option<u32> {
        match self {
            Tier::Iron => Some(0),
            Tier::Bronze => Some(1),
            Tier::Silver => Some(2),
            Tier::Gold => Some(3),
            Tier::Platinum => Some(4),
            Tier::Emerald => Some(5),
            Tier::Diamond => Some(6),
            Tier::Master => Some(7),
            Tier::Grandmaster => Some(8),
            Tier::Challenger => Some(9),
            Tier::Unranked => None,
        }
    }

    /// Whether this tier sits above the division system (Master+)
    pub fn is_apex(&self) -> bool {
        matches!(self, Tier::Master | Tier::Grandmaster | Tier::Challenger)
    }

    /// Total parse from the Riot tier strings (`"GOLD"`, `"CHALLENGER"`, ...)
    ///
    /// Unknown strings fold to `Unranked` rather than erroring, so stale or
    /// placement-era values from the rank cache never break scoring.
    pub fn from_name(name: &str) -> Tier {
        match name.trim().to_uppercase().as_str() {
            "IRON" => Tier::Iron,
            "BRONZE" => Tier::Bronze,
            "SILVER" => Tier::Silver,
            "GOLD" => Tier::Gold,
            "PLATINUM" => Tier::Platinum,
            "EMERALD" => Tier::Emerald,
            "DIAMOND" => Tier::Diamond,
            "MASTER" => Tier::Master,
            "GRANDMASTER" => Tier::Grandmaster,
            "CHALLENGER" => Tier::Challenger,
            _ => Tier::Unranked,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tier::Iron => "IRON",
            Tier::Bronze => "BRONZE",
            Tier::Silver => "SILVER",
            Tier::Gold => "GOLD",
            Tier::Platinum => "PLATINUM",
            Tier::Emerald => "EMERALD",
            Tier::Diamond => "DIAMOND",
            Tier::Master => "MASTER",
            Tier::Grandmaster => "GRANDMASTER",
            Tier::Challenger => "CHALLENGER",
            Tier::Unranked => "UNRANKED",
        };
        write!(f, "{}", name)
    }
}

/// Division within a tier, finest (IV) to coarsest (I)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Division {
    IV,
    III,
    II,
    I,
}

impl Division {
    /// Rungs climbed above division IV (IV=0 .. I=3)
    pub fn rungs(&self) -> u32 {
        match self {
            Division::IV => 0,
            Division::III => 1,
            Division::II => 2,
            Division::I => 3,
        }
    }

    /// Total parse from the Riot rank strings; unknown or empty means no division
    pub fn from_name(name: &str) -> Option<Division> {
        match name.trim().to_uppercase().as_str() {
            "IV" => Some(Division::IV),
            "III" => Some(Division::III),
            "II" => Some(Division::II),
            "I" => Some(Division::I),
            _ => None,
        }
    }
}

impl std::fmt::Display for Division {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Division::IV => "IV",
            Division::III => "III",
            Division::II => "II",
            Division::I => "I",
        };
        write!(f, "{}", name)
    }
}

/// Which ranked queue a snapshot came from
///
/// Flex rank is considered a weaker skill signal than solo/duo and its base
/// score is down-weighted by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueueKind {
    SoloDuo,
    Flex,
}

impl QueueKind {
    /// Parse from the Riot queue-type tags; anything unrecognized is treated
    /// as the primary queue
    pub fn from_queue_type(queue_type: &str) -> QueueKind {
        match queue_type.trim().to_uppercase().as_str() {
            "RANKED_FLEX_SR" | "FLEX" => QueueKind::Flex,
            _ => QueueKind::SoloDuo,
        }
    }
}

impl std::fmt::Display for QueueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueueKind::SoloDuo => write!(f, "SoloDuo"),
            QueueKind::Flex => write!(f, "Flex"),
        }
    }
}

/// The two in-house sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamSide {
    Blue,
    Red,
}

impl std::fmt::Display for TeamSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamSide::Blue => write!(f, "Blue"),
            TeamSide::Red => write!(f, "Red"),
        }
    }
}

/// Immutable snapshot of a player's competitive ranking, the MMR input
///
/// Fetched fresh from the rank cache before each recomputation; never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankSnapshot {
    pub tier: Tier,
    /// None for apex tiers and unranked entries
    pub division: Option<Division>,
    pub league_points: u32,
    pub wins: u32,
    pub losses: u32,
    pub queue: QueueKind,
    pub fetched_at: DateTime<Utc>,
}

impl RankSnapshot {
    /// Create a snapshot stamped with the current time
    pub fn new(
        tier: Tier,
        division: Option<Division>,
        league_points: u32,
        wins: u32,
        losses: u32,
        queue: QueueKind,
    ) -> Self {
        Self {
            tier,
            division,
            league_points,
            wins,
            losses,
            queue,
            fetched_at: crate::utils::current_timestamp(),
        }
    }

    /// Snapshot for a player with no ranked data at all
    pub fn unranked() -> Self {
        Self::new(Tier::Unranked, None, 0, 0, 0, QueueKind::SoloDuo)
    }

    /// Total recorded games in this queue
    pub fn total_games(&self) -> u32 {
        self.wins.saturating_add(self.losses)
    }

    /// Winrate percentage, None when no games are recorded
    pub fn winrate(&self) -> Option<f64> {
        let total = self.total_games();
        if total == 0 {
            return None;
        }
        Some(f64::from(self.wins) / f64::from(total) * 100.0)
    }
}

/// A player with a precomputed skill score, the unit the balancer consumes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredPlayer {
    pub id: PlayerId,
    /// Display label only, never used for logic
    pub name: String,
    pub score: u32,
}

impl ScoredPlayer {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>, score: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            score,
        }
    }
}

/// Result of a balancing pass: every input player on exactly one side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalancedTeams {
    pub blue: Vec<ScoredPlayer>,
    pub red: Vec<ScoredPlayer>,
}

impl BalancedTeams {
    /// Aggregate score of the blue side
    pub fn blue_total(&self) -> u64 {
        self.blue.iter().map(|p| u64::from(p.score)).sum()
    }

    /// Aggregate score of the red side
    pub fn red_total(&self) -> u64 {
        self.red.iter().map(|p| u64::from(p.score)).sum()
    }

    /// Absolute difference between the two team strengths
    pub fn score_gap(&self) -> u64 {
        self.blue_total().abs_diff(self.red_total())
    }

    /// Total number of players across both sides
    pub fn player_count(&self) -> usize {
        self.blue.len() + self.red.len()
    }
}
