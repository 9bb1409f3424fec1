//! Game session records, difficulty labels and the session patch object.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::numbers::u64_to_f64;

/// Points needed per level in the browser game.
pub const POINTS_PER_LEVEL: u32 = 1_000;

/// Level reached for a score: one level per [`POINTS_PER_LEVEL`], starting at 1.
#[must_use]
pub const fn level_for_score(score: u32) -> u32 {
    score / POINTS_PER_LEVEL + 1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    Expert,
}

impl Difficulty {
    pub const ALL: [Self; 4] = [Self::Easy, Self::Normal, Self::Hard, Self::Expert];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Normal => "Normal",
            Self::Hard => "Hard",
            Self::Expert => "Expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(())
    }
}

/// One recorded play-through by a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub id: u32,
    /// Owning player; may dangle once the player is deleted.
    pub player_id: u32,
    /// Player name at the time the session was recorded.
    pub player_name: String,
    pub score: u32,
    pub level: u32,
    pub duration_secs: u64,
    pub obstacles_dodged: u32,
    pub power_ups_collected: u32,
    pub new_high_score: bool,
    pub difficulty: Difficulty,
    pub session_date: DateTime<Utc>,
}

impl GameSession {
    #[must_use]
    pub const fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_secs)
    }

    /// Score per minute played, 0.0 for a zero-length session.
    #[must_use]
    pub fn score_per_minute(&self) -> f64 {
        if self.duration_secs == 0 {
            return 0.0;
        }
        f64::from(self.score) / (u64_to_f64(self.duration_secs) / 60.0)
    }
}

impl fmt::Display for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.new_high_score { " ★" } else { "" };
        write!(
            f,
            "Session {} | {} | Score: {} | Level: {} | Duration: {} | {}{}",
            self.id,
            self.player_name,
            self.score,
            self.level,
            format_duration(self.duration()),
            self.session_date.format("%Y-%m-%d %H:%M"),
            marker
        )
    }
}

/// Render a duration as `mm:ss`.
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Field changes applied to a session by [`crate::GameDataStore::update_game_session`].
///
/// Editing a session never replays the player statistics cascade.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionPatch {
    pub player_name: Option<String>,
    pub score: Option<u32>,
    pub level: Option<u32>,
    pub duration: Option<Duration>,
    pub obstacles_dodged: Option<u32>,
    pub power_ups_collected: Option<u32>,
    pub new_high_score: Option<bool>,
    pub difficulty: Option<Difficulty>,
    pub session_date: Option<DateTime<Utc>>,
}

impl SessionPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = Some(name.into());
        self
    }

    #[must_use]
    pub const fn score(mut self, score: u32) -> Self {
        self.score = Some(score);
        self
    }

    #[must_use]
    pub const fn level(mut self, level: u32) -> Self {
        self.level = Some(level);
        self
    }

    #[must_use]
    pub const fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub const fn obstacles_dodged(mut self, count: u32) -> Self {
        self.obstacles_dodged = Some(count);
        self
    }

    #[must_use]
    pub const fn power_ups_collected(mut self, count: u32) -> Self {
        self.power_ups_collected = Some(count);
        self
    }

    #[must_use]
    pub const fn new_high_score(mut self, flag: bool) -> Self {
        self.new_high_score = Some(flag);
        self
    }

    #[must_use]
    pub const fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    #[must_use]
    pub const fn session_date(mut self, at: DateTime<Utc>) -> Self {
        self.session_date = Some(at);
        self
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.player_name.is_none()
            && self.score.is_none()
            && self.level.is_none()
            && self.duration.is_none()
            && self.obstacles_dodged.is_none()
            && self.power_ups_collected.is_none()
            && self.new_high_score.is_none()
            && self.difficulty.is_none()
            && self.session_date.is_none()
    }

    pub(crate) fn apply(&self, session: &mut GameSession) {
        if let Some(name) = &self.player_name {
            session.player_name.clone_from(name);
        }
        if let Some(score) = self.score {
            session.score = score;
        }
        if let Some(level) = self.level {
            session.level = level.max(1);
        }
        if let Some(duration) = self.duration {
            session.duration_secs = duration.as_secs();
        }
        if let Some(count) = self.obstacles_dodged {
            session.obstacles_dodged = count;
        }
        if let Some(count) = self.power_ups_collected {
            session.power_ups_collected = count;
        }
        if let Some(flag) = self.new_high_score {
            session.new_high_score = flag;
        }
        if let Some(difficulty) = self.difficulty {
            session.difficulty = difficulty;
        }
        if let Some(at) = self.session_date {
            session.session_date = at;
        }
    }
}
