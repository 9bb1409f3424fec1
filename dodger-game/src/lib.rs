//! Dodger Game Data
//!
//! Platform-agnostic domain core for the Dodger game manager: players, game
//! sessions, obstacles and power-ups held in an in-memory store, plus the
//! reports, sample-data generator and JSON snapshot codec built on top of it.
//! This crate performs no I/O; file access and the console live in the
//! manager binary.

pub mod analytics;
pub mod generator;
pub mod numbers;
pub mod obstacle;
pub mod player;
pub mod power_up;
pub mod rank;
pub mod session;
pub mod snapshot;
pub mod store;

// Re-export commonly used types
pub use analytics::{
    AdvancedAnalytics, LeaderboardRow, LevelStats, ObstacleStatistics, PlayerPerformance,
    PlayerStatistics, PowerUpStatistics, ScoreBucket, SessionStatistics, StoreTotals,
};
pub use generator::{DataGenerator, GenerationSummary};
pub use obstacle::{Obstacle, ObstaclePatch, ObstacleType};
pub use player::{Player, PlayerPatch};
pub use power_up::{PowerUp, PowerUpPatch, PowerUpType, Rarity};
pub use rank::{RANK_THRESHOLDS, Rank};
pub use session::{Difficulty, GameSession, SessionPatch, format_duration, level_for_score};
pub use snapshot::{DataSnapshot, ExportDocument, Record, RestoreSummary, SnapshotError};
pub use store::{GameDataStore, IdCounters};
