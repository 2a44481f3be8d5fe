//! Utility functions for the rating crate

use chrono::{DateTime, Utc};

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Calculate the absolute difference between two scores
pub fn score_difference(score1: u32, score2: u32) -> u32 {
    score1.abs_diff(score2)
}

/// Check if two scores are within the given tolerance
pub fn scores_within_tolerance(score1: u32, score2: u32, tolerance: u32) -> bool {
    score_difference(score1, score2) <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_difference() {
        assert_eq!(score_difference(1500, 1400), 100);
        assert_eq!(score_difference(1400, 1500), 100);
        assert_eq!(score_difference(1500, 1500), 0);
    }

    #[test]
    fn test_scores_within_tolerance() {
        assert!(scores_within_tolerance(1500, 1450, 100));
        assert!(!scores_within_tolerance(1500, 1350, 100));
        assert!(scores_within_tolerance(1500, 1500, 0));
    }
}
