//! Store snapshots and their JSON representation.
//!
//! Saved files hold one JSON array per entity kind. Loading matches field
//! names case- and underscore-insensitively, so `"PlayerName"`, `"playername"`
//! and `"player_name"` all address the same field. Restoring goes through the
//! store's public create/update contract, so every restored entity receives a
//! fresh id.
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use thiserror::Error;

use crate::obstacle::{Obstacle, ObstaclePatch};
use crate::player::{Player, PlayerPatch};
use crate::power_up::{PowerUp, PowerUpPatch};
use crate::session::{GameSession, SessionPatch};
use crate::store::GameDataStore;

/// Errors raised while encoding or decoding snapshot documents.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{kind} document must be a JSON array")]
    NotAnArray { kind: &'static str },
    #[error("{kind} record {index} is malformed: {source}")]
    Record {
        kind: &'static str,
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// A serializable entity kind with its canonical field names.
pub trait Record: Serialize + DeserializeOwned {
    /// Collection label used in errors and logs.
    const KIND: &'static str;
    const FIELDS: &'static [&'static str];
}

impl Record for Player {
    const KIND: &'static str = "players";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "total_games_played",
        "total_score",
        "highest_score",
        "date_registered",
        "last_played",
        "rank",
    ];
}

impl Record for GameSession {
    const KIND: &'static str = "sessions";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "player_id",
        "player_name",
        "score",
        "level",
        "duration_secs",
        "obstacles_dodged",
        "power_ups_collected",
        "new_high_score",
        "difficulty",
        "session_date",
    ];
}

impl Record for Obstacle {
    const KIND: &'static str = "obstacles";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "obstacle_type",
        "speed",
        "damage_points",
        "size",
        "color",
        "points_on_dodge",
        "is_active",
    ];
}

impl Record for PowerUp {
    const KIND: &'static str = "power-ups";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "power_up_type",
        "duration_seconds",
        "points_value",
        "effect",
        "spawn_rate",
        "rarity",
        "is_collectible",
    ];
}

/// Point-in-time copy of all four collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSnapshot {
    pub players: Vec<Player>,
    pub sessions: Vec<GameSession>,
    pub obstacles: Vec<Obstacle>,
    pub power_ups: Vec<PowerUp>,
}

impl DataSnapshot {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
            && self.sessions.is_empty()
            && self.obstacles.is_empty()
            && self.power_ups.is_empty()
    }
}

/// Combined single-file export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub export_date: DateTime<Utc>,
    pub players: Vec<Player>,
    pub game_sessions: Vec<GameSession>,
    pub obstacles: Vec<Obstacle>,
    pub power_ups: Vec<PowerUp>,
}

impl ExportDocument {
    #[must_use]
    pub fn new(snapshot: DataSnapshot, export_date: DateTime<Utc>) -> Self {
        Self {
            export_date,
            players: snapshot.players,
            game_sessions: snapshot.sessions,
            obstacles: snapshot.obstacles,
            power_ups: snapshot.power_ups,
        }
    }

    /// Render as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Counts of what [`restore_into`] recreated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestoreSummary {
    pub players: usize,
    pub sessions: usize,
    pub skipped_sessions: usize,
    pub obstacles: usize,
    pub power_ups: usize,
}

/// Render records as an indented JSON array.
///
/// # Errors
///
/// Returns an error if a record cannot be serialized.
pub fn encode_records<T: Record>(records: &[T]) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Parse a JSON array of records, matching field names case-insensitively.
///
/// # Errors
///
/// Returns an error if the text is not JSON, is not an array, or holds a
/// record that does not describe a `T`.
pub fn decode_records<T: Record>(json: &str) -> Result<Vec<T>, SnapshotError> {
    let Value::Array(items) = serde_json::from_str::<Value>(json)? else {
        return Err(SnapshotError::NotAnArray { kind: T::KIND });
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(canonicalize_keys(item, T::FIELDS)).map_err(|source| {
                SnapshotError::Record {
                    kind: T::KIND,
                    index,
                    source,
                }
            })
        })
        .collect()
}

fn fold_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Rename object keys to their canonical field names; unknown keys pass through.
fn canonicalize_keys(value: Value, fields: &[&str]) -> Value {
    let Value::Object(map) = value else {
        return value;
    };
    let canonical: HashMap<String, &str> = fields.iter().map(|f| (fold_key(f), *f)).collect();
    let renamed: Map<String, Value> = map
        .into_iter()
        .map(|(key, v)| {
            let name = canonical
                .get(&fold_key(&key))
                .map_or(key, |field| (*field).to_string());
            (name, v)
        })
        .collect();
    Value::Object(renamed)
}

/// Rebuild `snapshot` inside `store` through its create/update operations.
///
/// Players, obstacles and power-ups are recreated first. Sessions are linked
/// to the recreated player via the old-to-new id map; sessions whose player is
/// absent from the snapshot are skipped. Saved player statistics are applied
/// last so the session cascade does not count restored games twice.
pub fn restore_into(store: &mut GameDataStore, snapshot: &DataSnapshot) -> RestoreSummary {
    let mut summary = RestoreSummary::default();
    let mut player_ids: HashMap<u32, u32> = HashMap::with_capacity(snapshot.players.len());

    for player in &snapshot.players {
        let created = store.create_player(player.name.clone());
        player_ids.insert(player.id, created.id);
        summary.players += 1;
    }

    for obstacle in &snapshot.obstacles {
        let created = store.create_obstacle(
            obstacle.name.clone(),
            obstacle.obstacle_type,
            obstacle.speed,
            obstacle.damage_points,
            obstacle.size,
        );
        store.update_obstacle(
            created.id,
            &ObstaclePatch::new()
                .color(obstacle.color.clone())
                .points_on_dodge(obstacle.points_on_dodge)
                .is_active(obstacle.is_active),
        );
        summary.obstacles += 1;
    }

    for power_up in &snapshot.power_ups {
        let created = store.create_power_up(
            power_up.name.clone(),
            power_up.power_up_type,
            power_up.effect.clone(),
            power_up.duration_seconds,
            power_up.points_value,
        );
        store.update_power_up(
            created.id,
            &PowerUpPatch::new()
                .rarity(power_up.rarity)
                .spawn_rate(power_up.spawn_rate)
                .is_collectible(power_up.is_collectible),
        );
        summary.power_ups += 1;
    }

    for session in &snapshot.sessions {
        let Some(&player_id) = player_ids.get(&session.player_id) else {
            log::warn!(
                "skipping session {}: player {} not in snapshot",
                session.id,
                session.player_id
            );
            summary.skipped_sessions += 1;
            continue;
        };
        let created = store.create_game_session(
            player_id,
            session.player_name.clone(),
            session.score,
            session.level,
            session.duration(),
        );
        store.update_game_session(
            created.id,
            &SessionPatch::new()
                .obstacles_dodged(session.obstacles_dodged)
                .power_ups_collected(session.power_ups_collected)
                .difficulty(session.difficulty)
                .session_date(session.session_date)
                .new_high_score(session.new_high_score),
        );
        summary.sessions += 1;
    }

    for player in &snapshot.players {
        if let Some(&id) = player_ids.get(&player.id) {
            store.update_player(id, &PlayerPatch::stats_of(player));
        }
    }

    log::debug!("restored snapshot: {summary:?}");
    summary
}
