//! Player rank tiers derived from a player's highest recorded score.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered rank tiers, lowest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Rank {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
    Master,
    Legend,
}

/// Minimum highest score for each rank, evaluated top-down; first match wins.
pub const RANK_THRESHOLDS: [(u32, Rank); 6] = [
    (10_000, Rank::Legend),
    (5_000, Rank::Master),
    (2_500, Rank::Expert),
    (1_000, Rank::Advanced),
    (500, Rank::Intermediate),
    (0, Rank::Beginner),
];

impl Rank {
    pub const ALL: [Self; 6] = [
        Self::Beginner,
        Self::Intermediate,
        Self::Advanced,
        Self::Expert,
        Self::Master,
        Self::Legend,
    ];

    /// Resolve the rank for a highest score using [`RANK_THRESHOLDS`].
    #[must_use]
    pub fn for_score(highest_score: u32) -> Self {
        RANK_THRESHOLDS
            .iter()
            .find(|(min, _)| highest_score >= *min)
            .map_or(Self::Beginner, |(_, rank)| *rank)
    }

    /// Lowest highest-score that still earns this rank.
    #[must_use]
    pub fn min_score(self) -> u32 {
        RANK_THRESHOLDS
            .iter()
            .find(|(_, rank)| *rank == self)
            .map_or(0, |(min, _)| *min)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
            Self::Master => "Master",
            Self::Legend => "Legend",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rank {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(())
    }
}
