//! Snake-seeded team balancing
//!
//! Sorts the pool by score and deals players to the two sides in the snake
//! block pattern Blue, Red, Red, Blue, Blue, Red, Red, ... so the strongest
//! and weakest ends of the field are spread across both teams. A single
//! deterministic pass, no rebalancing or local search.

use crate::error::RatingError;
use crate::types::{BalancedTeams, ScoredPlayer, TeamSide};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Side assignment for each sorted index of a pool of `len` players
///
/// Index 0 opens for Blue, then assignment alternates in blocks of two:
/// for ten players Blue takes sorted indices {0, 3, 4, 7, 8} and Red takes
/// {1, 2, 5, 6, 9}.
pub fn snake_pattern(len: usize) -> Vec<TeamSide> {
    (0..len)
        .map(|i| {
            if ((i + 1) / 2) % 2 == 0 {
                TeamSide::Blue
            } else {
                TeamSide::Red
            }
        })
        .collect()
}

/// Partition a pool of scored players into two near-equal teams
///
/// Sorting is stable, so players with equal scores keep their input order and
/// the partition is deterministic for identical input. Permissive by contract:
/// empty pools produce two empty teams, odd pools produce unequal sizes, and
/// tiny pools leave one side short or empty. Callers that require a full
/// ten-player lobby enforce that before balancing.
pub fn balance_teams(players: Vec<ScoredPlayer>) -> BalancedTeams {
    if players.len() < 2 {
        warn!(pool = players.len(), "balancing a degenerate pool");
    }

    let mut sorted = players;
    sorted.sort_by(|a, b| b.score.cmp(&a.score));

    let pattern = snake_pattern(sorted.len());
    let mut blue = Vec::with_capacity(sorted.len().div_ceil(2));
    let mut red = Vec::with_capacity(sorted.len() / 2);
    for (player, side) in sorted.into_iter().zip(pattern) {
        match side {
            TeamSide::Blue => blue.push(player),
            TeamSide::Red => red.push(player),
        }
    }

    let teams = BalancedTeams { blue, red };
    debug!(
        blue_total = teams.blue_total(),
        red_total = teams.red_total(),
        gap = teams.score_gap(),
        "balanced teams"
    );
    teams
}

/// Boundary check for a roster before it is handed to the balancer
///
/// The balancer itself is total; this catches structurally broken rosters
/// (empty or duplicate player ids) where they enter the system.
pub fn validate_roster(players: &[ScoredPlayer]) -> crate::error::Result<()> {
    let mut seen = HashSet::new();
    for player in players {
        if player.id.is_empty() {
            return Err(RatingError::InvalidRoster {
                reason: format!("player '{}' has an empty id", player.name),
            }
            .into());
        }
        if !seen.insert(player.id.as_str()) {
            return Err(RatingError::InvalidRoster {
                reason: format!("duplicate player id '{}'", player.id),
            }
            .into());
        }
    }
    Ok(())
}
