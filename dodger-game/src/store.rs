//! In-memory domain store owning every entity collection and its id counter.
use chrono::Utc;
use std::time::Duration;

use crate::obstacle::{
    DEFAULT_OBSTACLE_COLOR, Obstacle, ObstaclePatch, ObstacleType, default_points_on_dodge,
};
use crate::player::{Player, PlayerPatch};
use crate::power_up::{DEFAULT_SPAWN_RATE, PowerUp, PowerUpPatch, PowerUpType, Rarity};
use crate::session::{Difficulty, GameSession, SessionPatch};
use crate::snapshot::DataSnapshot;

/// Next id to hand out for each entity kind. Counters only ever grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdCounters {
    pub player: u32,
    pub session: u32,
    pub obstacle: u32,
    pub power_up: u32,
}

impl Default for IdCounters {
    fn default() -> Self {
        Self {
            player: 1,
            session: 1,
            obstacle: 1,
            power_up: 1,
        }
    }
}

fn take_id(counter: &mut u32) -> u32 {
    let id = *counter;
    *counter += 1;
    id
}

fn remove_by<T>(items: &mut Vec<T>, matches: impl Fn(&T) -> bool) -> bool {
    if let Some(index) = items.iter().position(matches) {
        items.remove(index);
        true
    } else {
        false
    }
}

/// Sole owner of players, sessions, obstacles and power-ups.
///
/// Single-writer: mutation goes through `&mut self`, and every read hands out
/// either a borrowed slice or an owned [`DataSnapshot`].
#[derive(Debug, Clone, Default)]
pub struct GameDataStore {
    players: Vec<Player>,
    sessions: Vec<GameSession>,
    obstacles: Vec<Obstacle>,
    power_ups: Vec<PowerUp>,
    next_ids: IdCounters,
}

impl GameDataStore {
    /// Create an empty store whose counters start at 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn id_counters(&self) -> IdCounters {
        self.next_ids
    }

    // Players ----------------------------------------------------------------

    /// Register a new player with zeroed statistics and rank Beginner.
    pub fn create_player(&mut self, name: impl Into<String>) -> Player {
        let player = Player::new(take_id(&mut self.next_ids.player), name, Utc::now());
        log::debug!("created player {} ({})", player.id, player.name);
        self.players.push(player.clone());
        player
    }

    #[must_use]
    pub fn player_by_id(&self, id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Apply `patch` to the player and re-derive its rank.
    /// Returns false (changing nothing) when the id is unknown.
    pub fn update_player(&mut self, id: u32, patch: &PlayerPatch) -> bool {
        let Some(player) = self.players.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        patch.apply(player);
        log::debug!("updated player {id}");
        true
    }

    /// Remove a player. Their sessions stay behind with a dangling player id.
    pub fn delete_player(&mut self, id: u32) -> bool {
        let removed = remove_by(&mut self.players, |p| p.id == id);
        if removed {
            log::debug!("deleted player {id}");
        }
        removed
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    // Sessions ---------------------------------------------------------------

    /// Record a session and fold it into the owning player's statistics.
    ///
    /// When the player exists: games played and total score grow, the highest
    /// score and rank are refreshed, last-played becomes now, and the session
    /// is flagged as a new high score if it beat the previous best. A missing
    /// player still yields a session that references the unknown id.
    pub fn create_game_session(
        &mut self,
        player_id: u32,
        player_name: impl Into<String>,
        score: u32,
        level: u32,
        duration: Duration,
    ) -> GameSession {
        let now = Utc::now();
        let mut session = GameSession {
            id: take_id(&mut self.next_ids.session),
            player_id,
            player_name: player_name.into(),
            score,
            level: level.max(1),
            duration_secs: duration.as_secs(),
            obstacles_dodged: 0,
            power_ups_collected: 0,
            new_high_score: false,
            difficulty: Difficulty::default(),
            session_date: now,
        };

        if let Some(player) = self.players.iter_mut().find(|p| p.id == player_id) {
            session.new_high_score = score > player.highest_score;
            player.total_games_played = player.total_games_played.saturating_add(1);
            player.total_score = player.total_score.saturating_add(u64::from(score));
            player.highest_score = player.highest_score.max(score);
            player.last_played = now;
            player.refresh_rank();
        } else {
            log::warn!(
                "session {} references unknown player {player_id}",
                session.id
            );
        }

        log::debug!(
            "created session {} for player {player_id} (score {score})",
            session.id
        );
        self.sessions.push(session.clone());
        session
    }

    #[must_use]
    pub fn game_session_by_id(&self, id: u32) -> Option<&GameSession> {
        self.sessions.iter().find(|s| s.id == id)
    }

    #[must_use]
    pub fn sessions(&self) -> &[GameSession] {
        &self.sessions
    }

    /// Sessions recorded for one player, in insertion order.
    pub fn sessions_for_player(&self, player_id: u32) -> impl Iterator<Item = &GameSession> {
        self.sessions.iter().filter(move |s| s.player_id == player_id)
    }

    pub fn update_game_session(&mut self, id: u32, patch: &SessionPatch) -> bool {
        let Some(session) = self.sessions.iter_mut().find(|s| s.id == id) else {
            return false;
        };
        patch.apply(session);
        log::debug!("updated session {id}");
        true
    }

    pub fn delete_game_session(&mut self, id: u32) -> bool {
        let removed = remove_by(&mut self.sessions, |s| s.id == id);
        if removed {
            log::debug!("deleted session {id}");
        }
        removed
    }

    #[must_use]
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    // Obstacles --------------------------------------------------------------

    /// Add an active obstacle with the default color and dodge reward.
    pub fn create_obstacle(
        &mut self,
        name: impl Into<String>,
        obstacle_type: ObstacleType,
        speed: f64,
        damage_points: u32,
        size: u32,
    ) -> Obstacle {
        let obstacle = Obstacle {
            id: take_id(&mut self.next_ids.obstacle),
            name: name.into(),
            obstacle_type,
            speed,
            damage_points,
            size,
            color: DEFAULT_OBSTACLE_COLOR.to_string(),
            points_on_dodge: default_points_on_dodge(speed, damage_points),
            is_active: true,
        };
        log::debug!("created obstacle {} ({})", obstacle.id, obstacle.name);
        self.obstacles.push(obstacle.clone());
        obstacle
    }

    #[must_use]
    pub fn obstacle_by_id(&self, id: u32) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.id == id)
    }

    #[must_use]
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn update_obstacle(&mut self, id: u32, patch: &ObstaclePatch) -> bool {
        let Some(obstacle) = self.obstacles.iter_mut().find(|o| o.id == id) else {
            return false;
        };
        patch.apply(obstacle);
        log::debug!("updated obstacle {id}");
        true
    }

    pub fn delete_obstacle(&mut self, id: u32) -> bool {
        let removed = remove_by(&mut self.obstacles, |o| o.id == id);
        if removed {
            log::debug!("deleted obstacle {id}");
        }
        removed
    }

    #[must_use]
    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    // Power-ups --------------------------------------------------------------

    /// Add a collectible, common power-up with the default spawn rate.
    pub fn create_power_up(
        &mut self,
        name: impl Into<String>,
        power_up_type: PowerUpType,
        effect: impl Into<String>,
        duration_seconds: u32,
        points_value: u32,
    ) -> PowerUp {
        let power_up = PowerUp {
            id: take_id(&mut self.next_ids.power_up),
            name: name.into(),
            power_up_type,
            duration_seconds,
            points_value,
            effect: effect.into(),
            spawn_rate: DEFAULT_SPAWN_RATE,
            rarity: Rarity::default(),
            is_collectible: true,
        };
        log::debug!("created power-up {} ({})", power_up.id, power_up.name);
        self.power_ups.push(power_up.clone());
        power_up
    }

    #[must_use]
    pub fn power_up_by_id(&self, id: u32) -> Option<&PowerUp> {
        self.power_ups.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn power_ups(&self) -> &[PowerUp] {
        &self.power_ups
    }

    pub fn update_power_up(&mut self, id: u32, patch: &PowerUpPatch) -> bool {
        let Some(power_up) = self.power_ups.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        patch.apply(power_up);
        log::debug!("updated power-up {id}");
        true
    }

    pub fn delete_power_up(&mut self, id: u32) -> bool {
        let removed = remove_by(&mut self.power_ups, |p| p.id == id);
        if removed {
            log::debug!("deleted power-up {id}");
        }
        removed
    }

    #[must_use]
    pub fn power_up_count(&self) -> usize {
        self.power_ups.len()
    }

    // Whole store ------------------------------------------------------------

    /// Empty every collection. Id counters keep their values.
    pub fn clear_all(&mut self) {
        self.players.clear();
        self.sessions.clear();
        self.obstacles.clear();
        self.power_ups.clear();
        log::debug!("cleared all collections (next ids {:?})", self.next_ids);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
            && self.sessions.is_empty()
            && self.obstacles.is_empty()
            && self.power_ups.is_empty()
    }

    /// Owned copy of every collection, unaffected by later mutation.
    #[must_use]
    pub fn snapshot(&self) -> DataSnapshot {
        DataSnapshot {
            players: self.players.clone(),
            sessions: self.sessions.clone(),
            obstacles: self.obstacles.clone(),
            power_ups: self.power_ups.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::Rank;

    fn minutes(m: u64) -> Duration {
        Duration::from_secs(m * 60)
    }

    #[test]
    fn create_player_assigns_sequential_ids() {
        let mut store = GameDataStore::new();
        let ids: Vec<u32> = ["Player1", "Player2", "Player3"]
            .into_iter()
            .map(|name| store.create_player(name).id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(store.player_count(), 3);
        assert_eq!(store.players()[0].rank, Rank::Beginner);
    }

    #[test]
    fn lookups_return_none_for_unknown_ids() {
        let store = GameDataStore::new();
        assert!(store.player_by_id(999).is_none());
        assert!(store.game_session_by_id(999).is_none());
        assert!(store.obstacle_by_id(999).is_none());
        assert!(store.power_up_by_id(999).is_none());
    }

    #[test]
    fn update_player_applies_patch_and_rank() {
        let mut store = GameDataStore::new();
        let id = store.create_player("OriginalName").id;
        let applied = store.update_player(
            id,
            &PlayerPatch::new()
                .name("UpdatedName")
                .highest_score(5_000)
                .total_games_played(10),
        );
        assert!(applied);
        let player = store.player_by_id(id).expect("player exists");
        assert_eq!(player.name, "UpdatedName");
        assert_eq!(player.highest_score, 5_000);
        assert_eq!(player.total_games_played, 10);
        assert_eq!(player.rank, Rank::Master);
    }

    #[test]
    fn update_of_missing_id_is_a_silent_no_op() {
        let mut store = GameDataStore::new();
        store.create_player("Someone");
        let before = store.snapshot();
        assert!(!store.update_player(42, &PlayerPatch::new().name("Ghost")));
        assert!(!store.update_game_session(42, &SessionPatch::new().score(1)));
        assert!(!store.update_obstacle(42, &ObstaclePatch::new().speed(1.0)));
        assert!(!store.update_power_up(42, &PowerUpPatch::new().points_value(1)));
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn session_cascade_updates_player_stats() {
        let mut store = GameDataStore::new();
        let player = store.create_player("TestPlayer");
        let session = store.create_game_session(player.id, &player.name, 3_000, 3, minutes(5));

        assert_eq!(session.id, 1);
        assert!(session.new_high_score);
        let updated = store.player_by_id(player.id).expect("player exists");
        assert_eq!(updated.highest_score, 3_000);
        assert_eq!(updated.total_score, 3_000);
        assert_eq!(updated.total_games_played, 1);
        assert_eq!(updated.rank, Rank::Expert);
        assert!(updated.last_played >= player.last_played);
    }

    #[test]
    fn lower_score_keeps_best_and_is_not_a_high_score() {
        let mut store = GameDataStore::new();
        let id = store.create_player("Steady").id;
        store.create_game_session(id, "Steady", 12_000, 12, minutes(10));
        let second = store.create_game_session(id, "Steady", 400, 1, minutes(2));

        assert!(!second.new_high_score);
        let player = store.player_by_id(id).expect("player exists");
        assert_eq!(player.highest_score, 12_000);
        assert_eq!(player.total_score, 12_400);
        assert_eq!(player.total_games_played, 2);
        assert_eq!(player.rank, Rank::Legend);
    }

    #[test]
    fn equal_score_is_not_a_new_high_score() {
        let mut store = GameDataStore::new();
        let id = store.create_player("Tie").id;
        store.create_game_session(id, "Tie", 700, 1, minutes(1));
        assert!(!store.create_game_session(id, "Tie", 700, 1, minutes(1)).new_high_score);
    }

    #[test]
    fn session_for_missing_player_is_still_recorded() {
        let mut store = GameDataStore::new();
        let session = store.create_game_session(77, "Nobody", 100, 0, minutes(1));
        assert_eq!(session.player_id, 77);
        assert_eq!(session.level, 1);
        assert!(!session.new_high_score);
        assert_eq!(store.session_count(), 1);
    }

    #[test]
    fn deleting_a_player_leaves_sessions_dangling() {
        let mut store = GameDataStore::new();
        let id = store.create_player("Gone").id;
        store.create_game_session(id, "Gone", 900, 1, minutes(3));
        assert!(store.delete_player(id));
        assert!(store.player_by_id(id).is_none());
        assert_eq!(store.sessions_for_player(id).count(), 1);
    }

    #[test]
    fn delete_missing_id_returns_false_and_keeps_size() {
        let mut store = GameDataStore::new();
        store.create_obstacle("Meteor", ObstacleType::Meteor, 3.0, 100, 20);
        assert!(!store.delete_obstacle(999));
        assert!(!store.delete_player(999));
        assert!(!store.delete_game_session(999));
        assert!(!store.delete_power_up(999));
        assert_eq!(store.obstacle_count(), 1);
    }

    #[test]
    fn ids_are_never_reused_after_delete() {
        let mut store = GameDataStore::new();
        let first = store.create_power_up("Shield", PowerUpType::Defensive, "Protection", 5, 200);
        assert!(store.delete_power_up(first.id));
        let second = store.create_power_up("Magnet", PowerUpType::Utility, "Attract", 5, 100);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn catalog_defaults_are_applied() {
        let mut store = GameDataStore::new();
        let obstacle = store.create_obstacle("Test Meteor", ObstacleType::Meteor, 3.5, 150, 25);
        assert!(obstacle.is_active);
        assert_eq!(obstacle.color, DEFAULT_OBSTACLE_COLOR);
        assert_eq!(obstacle.points_on_dodge, 32);

        let power_up =
            store.create_power_up("Test Shield", PowerUpType::Defensive, "Invincible", 10, 500);
        assert!(power_up.is_collectible);
        assert_eq!(power_up.rarity, Rarity::Common);
        assert!((power_up.spawn_rate - DEFAULT_SPAWN_RATE).abs() < f64::EPSILON);
    }

    #[test]
    fn clear_all_empties_collections_but_keeps_counters() {
        let mut store = GameDataStore::new();
        let player = store.create_player("TestPlayer");
        store.create_game_session(player.id, &player.name, 1_000, 1, minutes(5));
        store.create_obstacle("Meteor", ObstacleType::Meteor, 3.0, 100, 20);
        store.create_power_up("Shield", PowerUpType::Defensive, "Protection", 5, 200);

        store.clear_all();

        assert!(store.is_empty());
        assert!(store.players().is_empty());
        assert!(store.sessions().is_empty());
        assert!(store.obstacles().is_empty());
        assert!(store.power_ups().is_empty());
        assert_eq!(store.create_player("After").id, 2);
        assert_eq!(store.id_counters().session, 2);
    }

    #[test]
    fn snapshot_is_detached_from_later_mutation() {
        let mut store = GameDataStore::new();
        store.create_player("Before");
        let snapshot = store.snapshot();
        store.create_player("After");
        store.update_player(1, &PlayerPatch::new().name("Changed"));
        assert_eq!(snapshot.players.len(), 1);
        assert_eq!(snapshot.players[0].name, "Before");
    }
}
