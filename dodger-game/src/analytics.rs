//! Read-only reports computed on demand from a [`GameDataStore`].
//!
//! Whole-collection reports return `None` when the collection is empty so
//! callers never see an average, minimum or maximum of nothing. Sorted and
//! top-N outputs are stable: ties keep insertion order.
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use crate::numbers::{mean, secs_f64_to_duration, u64_to_f64};
use crate::obstacle::{Obstacle, ObstacleType};
use crate::player::Player;
use crate::power_up::{PowerUp, PowerUpType, Rarity};
use crate::rank::Rank;
use crate::session::{Difficulty, GameSession};
use crate::store::GameDataStore;

/// Default length of top-N listings.
pub const TOP_N: usize = 5;
/// Number of levels listed in the level progression.
pub const LEVEL_PROGRESSION_LIMIT: usize = 10;

/// Half-open score bins `[low, high)`; the last bin is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ScoreBucket {
    Under500,
    From500,
    From1000,
    From2500,
    From5000,
    From10000,
}

impl ScoreBucket {
    pub const ALL: [Self; 6] = [
        Self::Under500,
        Self::From500,
        Self::From1000,
        Self::From2500,
        Self::From5000,
        Self::From10000,
    ];

    /// Inclusive lower and exclusive upper bound; `None` means unbounded.
    #[must_use]
    pub const fn bounds(self) -> (u32, Option<u32>) {
        match self {
            Self::Under500 => (0, Some(500)),
            Self::From500 => (500, Some(1_000)),
            Self::From1000 => (1_000, Some(2_500)),
            Self::From2500 => (2_500, Some(5_000)),
            Self::From5000 => (5_000, Some(10_000)),
            Self::From10000 => (10_000, None),
        }
    }

    #[must_use]
    pub fn for_score(score: u32) -> Self {
        Self::ALL
            .into_iter()
            .find(|bucket| match bucket.bounds() {
                (low, Some(high)) => score >= low && score < high,
                (low, None) => score >= low,
            })
            .unwrap_or(Self::From10000)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Under500 => "0-499",
            Self::From500 => "500-999",
            Self::From1000 => "1000-2499",
            Self::From2500 => "2500-4999",
            Self::From5000 => "5000-9999",
            Self::From10000 => "10000+",
        }
    }
}

impl fmt::Display for ScoreBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Count items per key, ordered by descending count; ties keep first appearance.
fn grouped_counts<T, K, F>(items: &[T], key: F) -> Vec<(K, usize)>
where
    K: PartialEq + Copy,
    F: Fn(&T) -> K,
{
    let mut groups: Vec<(K, usize)> = Vec::new();
    for item in items {
        let k = key(item);
        if let Some(entry) = groups.iter_mut().find(|(existing, _)| *existing == k) {
            entry.1 += 1;
        } else {
            groups.push((k, 1));
        }
    }
    groups.sort_by_key(|(_, count)| Reverse(*count));
    groups
}

fn top_by<T, F>(items: &[T], n: usize, key: F) -> Vec<&T>
where
    F: Fn(&T) -> f64,
{
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by(|a, b| key(b).total_cmp(&key(a)));
    sorted.truncate(n);
    sorted
}

/// First item carrying the largest key.
fn first_max_by<T, F>(items: &[T], key: F) -> Option<&T>
where
    F: Fn(&T) -> f64,
{
    items.iter().fold(None, |best: Option<&T>, item| match best {
        Some(current) if key(item) <= key(current) => Some(current),
        _ => Some(item),
    })
}

// Players --------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerStatistics {
    pub total_players: usize,
    pub average_high_score: f64,
    pub max_high_score: u32,
    pub min_high_score: u32,
    pub total_games_played: u64,
    pub players_by_rank: Vec<(Rank, usize)>,
    pub most_active: Vec<Player>,
    pub top_scorers: Vec<Player>,
}

#[must_use]
pub fn player_statistics(store: &GameDataStore) -> Option<PlayerStatistics> {
    let players = store.players();
    let max_high_score = players.iter().map(|p| p.highest_score).max()?;
    let min_high_score = players.iter().map(|p| p.highest_score).min()?;
    Some(PlayerStatistics {
        total_players: players.len(),
        average_high_score: mean(players.iter().map(|p| f64::from(p.highest_score))),
        max_high_score,
        min_high_score,
        total_games_played: players
            .iter()
            .map(|p| u64::from(p.total_games_played))
            .sum(),
        players_by_rank: grouped_counts(players, |p| p.rank),
        most_active: top_by(players, TOP_N, |p| f64::from(p.total_games_played))
            .into_iter()
            .cloned()
            .collect(),
        top_scorers: top_by(players, TOP_N, |p| f64::from(p.highest_score))
            .into_iter()
            .cloned()
            .collect(),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardRow {
    /// 1-based position.
    pub position: usize,
    pub player_id: u32,
    pub name: String,
    pub highest_score: u32,
    pub average_score: f64,
    pub games_played: u32,
}

/// Every player ordered by highest score, best first.
#[must_use]
pub fn player_leaderboard(store: &GameDataStore) -> Vec<LeaderboardRow> {
    let players = store.players();
    top_by(players, players.len(), |p| f64::from(p.highest_score))
        .into_iter()
        .enumerate()
        .map(|(index, player)| LeaderboardRow {
            position: index + 1,
            player_id: player.id,
            name: player.name.clone(),
            highest_score: player.highest_score,
            average_score: player.average_score(),
            games_played: player.total_games_played,
        })
        .collect()
}

/// Players whose name contains `term`, ignoring case.
#[must_use]
pub fn search_players<'a>(store: &'a GameDataStore, term: &str) -> Vec<&'a Player> {
    let needle = term.to_lowercase();
    store
        .players()
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect()
}

// Sessions -------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionStatistics {
    pub total_sessions: usize,
    pub average_score: f64,
    pub max_score: u32,
    pub average_level: f64,
    pub max_level: u32,
    pub average_duration: Duration,
    pub sessions_by_difficulty: Vec<(Difficulty, usize)>,
    pub total_obstacles_dodged: u64,
    pub total_power_ups_collected: u64,
    pub new_high_score_sessions: usize,
}

#[must_use]
pub fn session_statistics(store: &GameDataStore) -> Option<SessionStatistics> {
    let sessions = store.sessions();
    let max_score = sessions.iter().map(|s| s.score).max()?;
    let max_level = sessions.iter().map(|s| s.level).max()?;
    Some(SessionStatistics {
        total_sessions: sessions.len(),
        average_score: mean(sessions.iter().map(|s| f64::from(s.score))),
        max_score,
        average_level: mean(sessions.iter().map(|s| f64::from(s.level))),
        max_level,
        average_duration: average_duration(sessions.iter()),
        sessions_by_difficulty: grouped_counts(sessions, |s| s.difficulty),
        total_obstacles_dodged: sessions.iter().map(|s| u64::from(s.obstacles_dodged)).sum(),
        total_power_ups_collected: sessions
            .iter()
            .map(|s| u64::from(s.power_ups_collected))
            .sum(),
        new_high_score_sessions: sessions.iter().filter(|s| s.new_high_score).count(),
    })
}

fn average_duration<'a>(sessions: impl Iterator<Item = &'a GameSession>) -> Duration {
    secs_f64_to_duration(mean(sessions.map(|s| u64_to_f64(s.duration_secs))))
}

/// The `count` most recent sessions, newest first.
#[must_use]
pub fn recent_sessions(store: &GameDataStore, count: usize) -> Vec<&GameSession> {
    let mut sessions: Vec<&GameSession> = store.sessions().iter().collect();
    sessions.sort_by_key(|s| Reverse(s.session_date));
    sessions.truncate(count);
    sessions
}

// Obstacles ------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObstacleStatistics {
    pub total_obstacles: usize,
    pub average_speed: f64,
    pub fastest: Obstacle,
    pub average_damage: f64,
    pub most_dangerous: Obstacle,
    pub obstacles_by_type: Vec<(ObstacleType, usize)>,
    pub active: usize,
    pub inactive: usize,
}

#[must_use]
pub fn obstacle_statistics(store: &GameDataStore) -> Option<ObstacleStatistics> {
    let obstacles = store.obstacles();
    let fastest = first_max_by(obstacles, |o| o.speed)?.clone();
    let most_dangerous = first_max_by(obstacles, |o| f64::from(o.damage_points))?.clone();
    let active = obstacles.iter().filter(|o| o.is_active).count();
    Some(ObstacleStatistics {
        total_obstacles: obstacles.len(),
        average_speed: mean(obstacles.iter().map(|o| o.speed)),
        fastest,
        average_damage: mean(obstacles.iter().map(|o| f64::from(o.damage_points))),
        most_dangerous,
        obstacles_by_type: grouped_counts(obstacles, |o| o.obstacle_type),
        active,
        inactive: obstacles.len() - active,
    })
}

/// Obstacles with `min <= speed <= max`, fastest first.
#[must_use]
pub fn obstacles_by_speed(store: &GameDataStore, min: f64, max: f64) -> Vec<&Obstacle> {
    let mut results: Vec<&Obstacle> = store
        .obstacles()
        .iter()
        .filter(|o| o.speed >= min && o.speed <= max)
        .collect();
    results.sort_by(|a, b| b.speed.total_cmp(&a.speed));
    results
}

// Power-ups ------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerUpStatistics {
    pub total_power_ups: usize,
    pub average_points: f64,
    pub most_valuable: PowerUp,
    pub average_duration_seconds: f64,
    /// Ordered by rarity, most common first.
    pub power_ups_by_rarity: Vec<(Rarity, usize)>,
    pub power_ups_by_type: Vec<(PowerUpType, usize)>,
    pub top_valuable: Vec<PowerUp>,
}

#[must_use]
pub fn power_up_statistics(store: &GameDataStore) -> Option<PowerUpStatistics> {
    let power_ups = store.power_ups();
    let most_valuable = first_max_by(power_ups, |p| f64::from(p.points_value))?.clone();
    let mut by_rarity: BTreeMap<Rarity, usize> = BTreeMap::new();
    for power_up in power_ups {
        *by_rarity.entry(power_up.rarity).or_default() += 1;
    }
    Some(PowerUpStatistics {
        total_power_ups: power_ups.len(),
        average_points: mean(power_ups.iter().map(|p| f64::from(p.points_value))),
        most_valuable,
        average_duration_seconds: mean(power_ups.iter().map(|p| f64::from(p.duration_seconds))),
        power_ups_by_rarity: by_rarity.into_iter().collect(),
        power_ups_by_type: grouped_counts(power_ups, |p| p.power_up_type),
        top_valuable: top_by(power_ups, TOP_N, |p| f64::from(p.points_value))
            .into_iter()
            .cloned()
            .collect(),
    })
}

// Cross-collection -----------------------------------------------------------

/// One player joined with their recorded sessions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerPerformance {
    pub player_id: u32,
    pub name: String,
    pub rank: Rank,
    pub total_sessions: usize,
    /// Mean session score, 0.0 without sessions.
    pub average_score: f64,
    pub best_score: u32,
}

/// Join every player with their sessions, in player insertion order.
#[must_use]
pub fn player_performance(store: &GameDataStore) -> Vec<PlayerPerformance> {
    store
        .players()
        .iter()
        .map(|player| {
            let scores: Vec<f64> = store
                .sessions_for_player(player.id)
                .map(|s| f64::from(s.score))
                .collect();
            PlayerPerformance {
                player_id: player.id,
                name: player.name.clone(),
                rank: player.rank,
                total_sessions: scores.len(),
                average_score: mean(scores.iter().copied()),
                best_score: player.highest_score,
            }
        })
        .collect()
}

/// Session counts for every bucket, in bucket order (empty buckets included).
#[must_use]
pub fn score_distribution(store: &GameDataStore) -> Vec<(ScoreBucket, usize)> {
    let mut counts: BTreeMap<ScoreBucket, usize> =
        ScoreBucket::ALL.into_iter().map(|b| (b, 0)).collect();
    for session in store.sessions() {
        *counts.entry(ScoreBucket::for_score(session.score)).or_default() += 1;
    }
    counts.into_iter().collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelStats {
    pub level: u32,
    pub session_count: usize,
    pub average_score: f64,
    pub average_duration: Duration,
}

/// Per-level session aggregates for the lowest `limit` levels.
#[must_use]
pub fn level_progression(store: &GameDataStore, limit: usize) -> Vec<LevelStats> {
    let mut by_level: BTreeMap<u32, Vec<&GameSession>> = BTreeMap::new();
    for session in store.sessions() {
        by_level.entry(session.level).or_default().push(session);
    }
    by_level
        .into_iter()
        .take(limit)
        .map(|(level, sessions)| LevelStats {
            level,
            session_count: sessions.len(),
            average_score: mean(sessions.iter().map(|s| f64::from(s.score))),
            average_duration: average_duration(sessions.iter().copied()),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvancedAnalytics {
    pub top_performers: Vec<PlayerPerformance>,
    pub score_distribution: Vec<(ScoreBucket, usize)>,
    pub level_progression: Vec<LevelStats>,
}

/// Cross-collection report; `None` unless both players and sessions exist.
#[must_use]
pub fn advanced_analytics(store: &GameDataStore) -> Option<AdvancedAnalytics> {
    if store.players().is_empty() || store.sessions().is_empty() {
        return None;
    }
    let performance = player_performance(store);
    Some(AdvancedAnalytics {
        top_performers: top_by(&performance, TOP_N, |p| p.average_score)
            .into_iter()
            .cloned()
            .collect(),
        score_distribution: score_distribution(store),
        level_progression: level_progression(store, LEVEL_PROGRESSION_LIMIT),
    })
}

/// Headline counts for the whole store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreTotals {
    pub players: usize,
    pub sessions: usize,
    pub obstacles: usize,
    pub power_ups: usize,
}

#[must_use]
pub fn store_totals(store: &GameDataStore) -> StoreTotals {
    StoreTotals {
        players: store.player_count(),
        sessions: store.session_count(),
        obstacles: store.obstacle_count(),
        power_ups: store.power_up_count(),
    }
}

/// Timestamp of the most recent session, if any.
#[must_use]
pub fn last_activity(store: &GameDataStore) -> Option<DateTime<Utc>> {
    store.sessions().iter().map(|s| s.session_date).max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayerPatch;
    use crate::power_up::PowerUpPatch;
    use crate::session::SessionPatch;
    use chrono::Duration as TimeDelta;

    fn minutes(m: u64) -> Duration {
        Duration::from_secs(m * 60)
    }

    #[test]
    fn empty_store_reports_no_data() {
        let store = GameDataStore::new();
        assert!(player_statistics(&store).is_none());
        assert!(session_statistics(&store).is_none());
        assert!(obstacle_statistics(&store).is_none());
        assert!(power_up_statistics(&store).is_none());
        assert!(advanced_analytics(&store).is_none());
        assert!(player_leaderboard(&store).is_empty());
        assert!(recent_sessions(&store, 10).is_empty());
    }

    #[test]
    fn advanced_analytics_needs_sessions_too() {
        let mut store = GameDataStore::new();
        store.create_player("Lonely");
        assert!(advanced_analytics(&store).is_none());
    }

    #[test]
    fn player_statistics_aggregate_and_group() {
        let mut store = GameDataStore::new();
        for (name, best, games) in [("A", 200, 3), ("B", 12_000, 9), ("C", 300, 12)] {
            let id = store.create_player(name).id;
            store.update_player(
                id,
                &PlayerPatch::new()
                    .highest_score(best)
                    .total_games_played(games),
            );
        }
        let stats = player_statistics(&store).expect("players exist");
        assert_eq!(stats.total_players, 3);
        assert_eq!(stats.max_high_score, 12_000);
        assert_eq!(stats.min_high_score, 200);
        assert!((stats.average_high_score - 4_166.666_666_666_667).abs() < 1e-6);
        assert_eq!(stats.total_games_played, 24);
        assert_eq!(
            stats.players_by_rank,
            vec![(Rank::Beginner, 2), (Rank::Legend, 1)]
        );
        assert_eq!(stats.most_active[0].name, "C");
        assert_eq!(stats.top_scorers[0].name, "B");
    }

    #[test]
    fn grouped_counts_break_ties_by_first_appearance() {
        let items = ["x", "y", "y", "z", "x"];
        let groups = grouped_counts(&items, |s| *s);
        assert_eq!(groups, vec![("x", 2), ("y", 2), ("z", 1)]);
    }

    #[test]
    fn leaderboard_positions_follow_highest_score() {
        let mut store = GameDataStore::new();
        for (name, score) in [("Low", 100), ("High", 9_000), ("Mid", 1_500)] {
            let id = store.create_player(name).id;
            store.create_game_session(id, name, score, 1, minutes(2));
        }
        let board = player_leaderboard(&store);
        let names: Vec<&str> = board.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["High", "Mid", "Low"]);
        assert_eq!(board[0].position, 1);
        assert!((board[2].average_score - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let mut store = GameDataStore::new();
        store.create_player("StarNavigator101");
        store.create_player("CosmicPilot202");
        store.create_player("LuckySTAR303");
        let found: Vec<&str> = search_players(&store, "star")
            .into_iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(found, vec!["StarNavigator101", "LuckySTAR303"]);
        assert!(search_players(&store, "nebula").is_empty());
    }

    #[test]
    fn session_statistics_cover_totals() {
        let mut store = GameDataStore::new();
        let id = store.create_player("P").id;
        let first = store.create_game_session(id, "P", 1_000, 2, minutes(2));
        store.create_game_session(id, "P", 3_000, 4, minutes(4));
        store.update_game_session(
            first.id,
            &SessionPatch::new()
                .obstacles_dodged(50)
                .power_ups_collected(3)
                .difficulty(Difficulty::Hard),
        );
        let stats = session_statistics(&store).expect("sessions exist");
        assert_eq!(stats.total_sessions, 2);
        assert!((stats.average_score - 2_000.0).abs() < f64::EPSILON);
        assert_eq!(stats.max_score, 3_000);
        assert!((stats.average_level - 3.0).abs() < f64::EPSILON);
        assert_eq!(stats.max_level, 4);
        assert_eq!(stats.average_duration, minutes(3));
        assert_eq!(stats.total_obstacles_dodged, 50);
        assert_eq!(stats.total_power_ups_collected, 3);
        assert_eq!(stats.new_high_score_sessions, 2);
        assert_eq!(
            stats.sessions_by_difficulty,
            vec![(Difficulty::Hard, 1), (Difficulty::Normal, 1)]
        );
    }

    #[test]
    fn recent_sessions_are_newest_first() {
        let mut store = GameDataStore::new();
        let id = store.create_player("P").id;
        let base = Utc::now();
        for (offset, score) in [(5, 1), (1, 2), (3, 3)] {
            let session = store.create_game_session(id, "P", score, 1, minutes(1));
            store.update_game_session(
                session.id,
                &SessionPatch::new().session_date(base - TimeDelta::days(offset)),
            );
        }
        let scores: Vec<u32> = recent_sessions(&store, 2).iter().map(|s| s.score).collect();
        assert_eq!(scores, vec![2, 3]);
        assert_eq!(last_activity(&store), Some(base - TimeDelta::days(1)));
    }

    #[test]
    fn speed_filter_is_inclusive_and_descending() {
        let mut store = GameDataStore::new();
        for (name, speed) in [("a", 2.9), ("b", 3.0), ("c", 4.2), ("d", 5.0), ("e", 5.01)] {
            store.create_obstacle(name, ObstacleType::Meteor, speed, 100, 20);
        }
        let names: Vec<&str> = obstacles_by_speed(&store, 3.0, 5.0)
            .into_iter()
            .map(|o| o.name.as_str())
            .collect();
        assert_eq!(names, vec!["d", "c", "b"]);
    }

    #[test]
    fn obstacle_statistics_pick_first_extremes() {
        let mut store = GameDataStore::new();
        store.create_obstacle("Slow", ObstacleType::Debris, 1.0, 150, 20);
        store.create_obstacle("Fast", ObstacleType::Comet, 6.0, 50, 20);
        store.create_obstacle("AlsoFast", ObstacleType::Comet, 6.0, 150, 20);
        store.update_obstacle(1, &crate::obstacle::ObstaclePatch::new().is_active(false));
        let stats = obstacle_statistics(&store).expect("obstacles exist");
        assert_eq!(stats.fastest.name, "Fast");
        assert_eq!(stats.most_dangerous.name, "Slow");
        assert_eq!(stats.obstacles_by_type[0], (ObstacleType::Comet, 2));
        assert_eq!((stats.active, stats.inactive), (2, 1));
    }

    #[test]
    fn power_up_rarity_groups_follow_rarity_order() {
        let mut store = GameDataStore::new();
        for (name, rarity, points) in [
            ("Epic", Rarity::Epic, 900),
            ("Common", Rarity::Common, 100),
            ("Rare", Rarity::Rare, 400),
            ("Common2", Rarity::Common, 100),
        ] {
            let id = store
                .create_power_up(name, PowerUpType::Bonus, "Points", 5, points)
                .id;
            store.update_power_up(id, &PowerUpPatch::new().rarity(rarity));
        }
        let stats = power_up_statistics(&store).expect("power-ups exist");
        assert_eq!(
            stats.power_ups_by_rarity,
            vec![(Rarity::Common, 2), (Rarity::Rare, 1), (Rarity::Epic, 1)]
        );
        assert_eq!(stats.most_valuable.name, "Epic");
        assert_eq!(stats.top_valuable.len(), 4);
        assert!((stats.average_points - 375.0).abs() < f64::EPSILON);
    }

    #[test]
    fn score_buckets_are_half_open() {
        let cases = [
            (0, ScoreBucket::Under500),
            (499, ScoreBucket::Under500),
            (500, ScoreBucket::From500),
            (999, ScoreBucket::From500),
            (1_000, ScoreBucket::From1000),
            (2_499, ScoreBucket::From1000),
            (2_500, ScoreBucket::From2500),
            (4_999, ScoreBucket::From2500),
            (5_000, ScoreBucket::From5000),
            (9_999, ScoreBucket::From5000),
            (10_000, ScoreBucket::From10000),
            (u32::MAX, ScoreBucket::From10000),
        ];
        for (score, bucket) in cases {
            assert_eq!(ScoreBucket::for_score(score), bucket, "score {score}");
        }
    }

    #[test]
    fn advanced_analytics_joins_players_and_sessions() {
        let mut store = GameDataStore::new();
        let a = store.create_player("Alpha").id;
        let b = store.create_player("Beta").id;
        store.create_player("Idle");
        store.create_game_session(a, "Alpha", 400, 1, minutes(2));
        store.create_game_session(a, "Alpha", 600, 1, minutes(4));
        store.create_game_session(b, "Beta", 12_000, 13, minutes(10));

        let report = advanced_analytics(&store).expect("data exists");
        assert_eq!(report.top_performers[0].name, "Beta");
        assert_eq!(report.top_performers[1].total_sessions, 2);
        assert!((report.top_performers[1].average_score - 500.0).abs() < f64::EPSILON);
        assert_eq!(report.top_performers[2].total_sessions, 0);
        assert!(report.top_performers[2].average_score.abs() < f64::EPSILON);

        assert_eq!(report.score_distribution.len(), 6);
        assert_eq!(report.score_distribution[0], (ScoreBucket::Under500, 1));
        assert_eq!(report.score_distribution[1], (ScoreBucket::From500, 1));
        assert_eq!(report.score_distribution[5], (ScoreBucket::From10000, 1));

        assert_eq!(report.level_progression[0].level, 1);
        assert_eq!(report.level_progression[0].session_count, 2);
        assert_eq!(report.level_progression[0].average_duration, minutes(3));
        assert_eq!(report.level_progression[1].level, 13);
    }

    #[test]
    fn totals_count_every_collection() {
        let mut store = GameDataStore::new();
        store.create_player("One");
        store.create_obstacle("Rock", ObstacleType::Asteroid, 2.0, 60, 20);
        let totals = store_totals(&store);
        assert_eq!((totals.players, totals.obstacles), (1, 1));
        assert_eq!((totals.sessions, totals.power_ups), (0, 0));
    }
}
