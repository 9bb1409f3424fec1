//! Player records and their patch object.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::numbers::ratio;
use crate::rank::Rank;

/// A registered player and their accumulated statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub total_games_played: u32,
    pub total_score: u64,
    pub highest_score: u32,
    pub date_registered: DateTime<Utc>,
    pub last_played: DateTime<Utc>,
    /// Always `Rank::for_score(highest_score)`; maintained by the store.
    pub rank: Rank,
}

impl Player {
    /// Build a fresh player with zeroed statistics.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            total_games_played: 0,
            total_score: 0,
            highest_score: 0,
            date_registered: now,
            last_played: now,
            rank: Rank::Beginner,
        }
    }

    /// Average score per game, 0.0 when no games were played.
    #[must_use]
    pub fn average_score(&self) -> f64 {
        ratio(self.total_score, u64::from(self.total_games_played))
    }

    /// Re-derive the rank from the highest score.
    pub fn refresh_rank(&mut self) {
        self.rank = Rank::for_score(self.highest_score);
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | {} | Rank: {} | High Score: {} | Games: {} | Avg: {:.2}",
            self.id,
            self.name,
            self.rank,
            self.highest_score,
            self.total_games_played,
            self.average_score()
        )
    }
}

/// Field changes applied to a player by [`crate::GameDataStore::update_player`].
///
/// Rank is intentionally absent: the store derives it from `highest_score`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerPatch {
    pub name: Option<String>,
    pub total_games_played: Option<u32>,
    pub total_score: Option<u64>,
    pub highest_score: Option<u32>,
    pub date_registered: Option<DateTime<Utc>>,
    pub last_played: Option<DateTime<Utc>>,
}

impl PlayerPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub const fn total_games_played(mut self, games: u32) -> Self {
        self.total_games_played = Some(games);
        self
    }

    #[must_use]
    pub const fn total_score(mut self, score: u64) -> Self {
        self.total_score = Some(score);
        self
    }

    #[must_use]
    pub const fn highest_score(mut self, score: u32) -> Self {
        self.highest_score = Some(score);
        self
    }

    #[must_use]
    pub const fn date_registered(mut self, at: DateTime<Utc>) -> Self {
        self.date_registered = Some(at);
        self
    }

    #[must_use]
    pub const fn last_played(mut self, at: DateTime<Utc>) -> Self {
        self.last_played = Some(at);
        self
    }

    /// Patch carrying every statistic of `player` (name and id excluded).
    #[must_use]
    pub fn stats_of(player: &Player) -> Self {
        Self::new()
            .total_games_played(player.total_games_played)
            .total_score(player.total_score)
            .highest_score(player.highest_score)
            .date_registered(player.date_registered)
            .last_played(player.last_played)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.total_games_played.is_none()
            && self.total_score.is_none()
            && self.highest_score.is_none()
            && self.date_registered.is_none()
            && self.last_played.is_none()
    }

    /// Apply the patch and re-derive the rank.
    pub(crate) fn apply(&self, player: &mut Player) {
        if let Some(name) = &self.name {
            player.name.clone_from(name);
        }
        if let Some(games) = self.total_games_played {
            player.total_games_played = games;
        }
        if let Some(score) = self.total_score {
            player.total_score = score;
        }
        if let Some(score) = self.highest_score {
            player.highest_score = score;
        }
        if let Some(at) = self.date_registered {
            player.date_registered = at;
        }
        if let Some(at) = self.last_played {
            player.last_played = at;
        }
        player.refresh_rank();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Player {
        Player::new(1, "TestPlayer", Utc::now())
    }

    #[test]
    fn average_score_divides_total_by_games() {
        let mut player = sample();
        player.total_score = 5_000;
        player.total_games_played = 10;
        assert!((player.average_score() - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn average_score_is_zero_without_games() {
        assert!(sample().average_score().abs() < f64::EPSILON);
    }

    #[test]
    fn display_contains_name_rank_and_high_score() {
        let mut player = sample();
        player.highest_score = 800;
        player.refresh_rank();
        let line = player.to_string();
        assert!(line.contains("TestPlayer"));
        assert!(line.contains("Intermediate"));
        assert!(line.contains("800"));
    }

    #[test]
    fn patch_rederives_rank() {
        let mut player = sample();
        PlayerPatch::new()
            .name("Renamed")
            .highest_score(5_000)
            .apply(&mut player);
        assert_eq!(player.name, "Renamed");
        assert_eq!(player.rank, Rank::Master);
        assert!(PlayerPatch::new().is_empty());
        assert!(!PlayerPatch::stats_of(&player).is_empty());
    }
}
