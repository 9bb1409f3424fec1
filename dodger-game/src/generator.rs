//! Seeded random sample data for demos and manual testing.
//!
//! Everything is created through the public store contract, so generated
//! sessions run the same player cascade as hand-entered ones.
use chrono::{Duration as TimeDelta, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::Serialize;
use std::collections::HashSet;
use std::time::Duration;

use crate::obstacle::{ObstaclePatch, ObstacleType, default_points_on_dodge};
use crate::player::PlayerPatch;
use crate::power_up::{PowerUpPatch, PowerUpType, Rarity};
use crate::session::{Difficulty, SessionPatch, level_for_score};
use crate::store::GameDataStore;

const PLAYER_NAMES: &[&str] = &[
    "SpaceAce",
    "MeteorMaster",
    "DodgeKing",
    "StarNavigator",
    "CosmicPilot",
    "NovaHunter",
    "OrbitRacer",
    "GalaxyGuardian",
    "StellarDodger",
    "AstroNinja",
    "NebulaKnight",
    "QuasarQueen",
    "VoidVoyager",
    "PlanetaryPro",
    "CometCrusher",
    "LunarLegend",
    "SolarSurfer",
    "ZenithZapper",
    "HorizonHero",
    "CelestialChamp",
];

const OBSTACLE_NAMES: &[&str] = &[
    "Red Meteor",
    "Blue Comet",
    "Asteroid Fragment",
    "Space Debris",
    "Ice Crystal",
    "Burning Rock",
    "Dark Matter",
    "Plasma Ball",
    "Cosmic Stone",
    "Solar Flare",
    "Iron Meteorite",
    "Crystal Shard",
    "Frozen Boulder",
    "Lava Rock",
    "Neutron Star Chunk",
];

const OBSTACLE_COLORS: &[&str] = &[
    "Red", "Blue", "Green", "Purple", "Orange", "Yellow", "White", "Black",
];

const POWER_UP_NAMES: &[&str] = &[
    "Shield Boost",
    "Speed Burst",
    "Score Multiplier",
    "Invincibility",
    "Time Slow",
    "Magnet",
    "Double Points",
    "Extra Life",
    "Turbo Charge",
    "Star Power",
    "Energy Shield",
    "Hyper Mode",
    "Lucky Star",
    "Power Surge",
    "Cosmic Blessing",
];

const POWER_UP_EFFECTS: &[&str] = &[
    "Temporary Shield",
    "Increased Speed",
    "2x Score",
    "Immunity",
    "Slow Motion",
    "Attract Points",
    "Double Points",
    "Extra Life",
    "Boost Speed",
    "All Buffs",
    "Damage Protection",
    "Ultra Fast",
    "Lucky Bonus",
    "Power Increase",
    "Divine Protection",
];

/// Sizes used by [`DataGenerator::generate_complete_dataset`].
pub const DATASET_PLAYERS: usize = 15;
pub const DATASET_OBSTACLES: usize = 20;
pub const DATASET_POWER_UPS: usize = 12;
pub const DATASET_SESSIONS: usize = 50;

const MAX_NAME_ATTEMPTS: usize = 1_000;

/// Counts of records created by one generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GenerationSummary {
    pub players: usize,
    pub obstacles: usize,
    pub power_ups: usize,
    pub sessions: usize,
}

/// Random data source; reproducible when seeded.
#[derive(Debug, Clone)]
pub struct DataGenerator {
    rng: ChaCha20Rng,
}

impl DataGenerator {
    /// Seeded when `seed` is given, entropy-seeded otherwise.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha20Rng::from_entropy(),
        }
    }

    fn pick<T: Copy>(&mut self, pool: &[T]) -> T {
        pool[self.rng.gen_range(0..pool.len())]
    }

    fn chance(&mut self, tenths: u32) -> bool {
        self.rng.gen_range(0..10) < tenths
    }

    fn round_to(value: f64, places: i32) -> f64 {
        let scale = 10_f64.powi(places);
        (value * scale).round() / scale
    }

    fn unique_player_name(&mut self, taken: &mut HashSet<String>) -> String {
        for _ in 0..MAX_NAME_ATTEMPTS {
            let candidate = format!(
                "{}{}",
                self.pick(PLAYER_NAMES),
                self.rng.gen_range(100..999)
            );
            if taken.insert(candidate.clone()) {
                return candidate;
            }
        }
        let base = self.pick(PLAYER_NAMES);
        let mut suffix = 1_000_u32;
        loop {
            let candidate = format!("{base}{suffix}");
            if taken.insert(candidate.clone()) {
                return candidate;
            }
            suffix += 1;
        }
    }

    /// Create `count` players with distinct names and plausible history.
    pub fn generate_players(&mut self, store: &mut GameDataStore, count: usize) -> usize {
        let mut taken: HashSet<String> = store.players().iter().map(|p| p.name.clone()).collect();
        let now = Utc::now();
        for _ in 0..count {
            let name = self.unique_player_name(&mut taken);
            let games = self.rng.gen_range(5..100);
            let highest = self.rng.gen_range(100..15_000);
            let total = u64::from(highest) + self.rng.gen_range(1_000..50_000_u64);
            let registered = now - TimeDelta::days(self.rng.gen_range(1..365));
            let last_played = now - TimeDelta::days(self.rng.gen_range(0..30));

            let id = store.create_player(name).id;
            store.update_player(
                id,
                &PlayerPatch::new()
                    .total_games_played(games)
                    .highest_score(highest)
                    .total_score(total)
                    .date_registered(registered)
                    .last_played(last_played),
            );
        }
        log::info!("generated {count} players");
        count
    }

    pub fn generate_obstacles(&mut self, store: &mut GameDataStore, count: usize) -> usize {
        for _ in 0..count {
            let name = self.pick(OBSTACLE_NAMES);
            let kind = self.pick(&ObstacleType::ALL);
            let speed = Self::round_to(self.rng.gen_range(0.0..1.0) * 5.0 + 1.0, 2);
            let damage = self.rng.gen_range(50..150);
            let size = self.rng.gen_range(15..40);
            let color = self.pick(OBSTACLE_COLORS);
            let active = self.chance(9);

            let id = store.create_obstacle(name, kind, speed, damage, size).id;
            store.update_obstacle(
                id,
                &ObstaclePatch::new()
                    .color(color)
                    .points_on_dodge(default_points_on_dodge(speed, damage))
                    .is_active(active),
            );
        }
        log::info!("generated {count} obstacles");
        count
    }

    /// Create `count` power-ups; rarer tiers are worth more and spawn less.
    pub fn generate_power_ups(&mut self, store: &mut GameDataStore, count: usize) -> usize {
        for _ in 0..count {
            let name = self.pick(POWER_UP_NAMES);
            let kind = self.pick(&PowerUpType::ALL);
            let effect = self.pick(POWER_UP_EFFECTS);
            let duration = self.rng.gen_range(3..15);
            let points = self.rng.gen_range(50..500);
            let rarity = self.pick(&Rarity::ALL);
            let spawn_rate = Self::round_to(self.rng.gen_range(0.0..1.0) * 0.3, 3);
            let collectible = self.chance(9);
            let (points, spawn_rate) = rarity_adjusted(rarity, points, spawn_rate);

            let id = store
                .create_power_up(name, kind, effect, duration, points)
                .id;
            store.update_power_up(
                id,
                &PowerUpPatch::new()
                    .rarity(rarity)
                    .spawn_rate(spawn_rate)
                    .is_collectible(collectible),
            );
        }
        log::info!("generated {count} power-ups");
        count
    }

    /// Record `count` sessions for random existing players; 0 without players.
    pub fn generate_sessions(&mut self, store: &mut GameDataStore, count: usize) -> usize {
        if store.players().is_empty() {
            log::warn!("no players to generate sessions for");
            return 0;
        }
        let now = Utc::now();
        for _ in 0..count {
            let player = &store.players()[self.rng.gen_range(0..store.player_count())];
            let (player_id, player_name) = (player.id, player.name.clone());
            let score = self.rng.gen_range(100..15_000);
            let minutes: u64 = self.rng.gen_range(1..15);
            let seconds: u64 = self.rng.gen_range(0..60);
            let duration = Duration::from_secs(minutes * 60 + seconds);

            let session = store.create_game_session(
                player_id,
                player_name,
                score,
                level_for_score(score),
                duration,
            );
            let patch = SessionPatch::new()
                .obstacles_dodged(self.rng.gen_range(50..500))
                .power_ups_collected(self.rng.gen_range(0..20))
                .difficulty(self.pick(&Difficulty::ALL))
                .session_date(now - TimeDelta::days(self.rng.gen_range(0..90)));
            store.update_game_session(session.id, &patch);
        }
        log::info!("generated {count} game sessions");
        count
    }

    /// Players, obstacles and power-ups first, then sessions over those players.
    pub fn generate_complete_dataset(&mut self, store: &mut GameDataStore) -> GenerationSummary {
        let summary = GenerationSummary {
            players: self.generate_players(store, DATASET_PLAYERS),
            obstacles: self.generate_obstacles(store, DATASET_OBSTACLES),
            power_ups: self.generate_power_ups(store, DATASET_POWER_UPS),
            sessions: self.generate_sessions(store, DATASET_SESSIONS),
        };
        log::info!("complete dataset generated: {summary:?}");
        summary
    }
}

/// Scale points and spawn rate for a rarity tier.
#[must_use]
pub fn rarity_adjusted(rarity: Rarity, points: u32, spawn_rate: f64) -> (u32, f64) {
    match rarity {
        Rarity::Legendary => (points.saturating_mul(3), spawn_rate * 0.2),
        Rarity::Epic => (points.saturating_mul(2), spawn_rate * 0.5),
        Rarity::Rare => (points.saturating_add(points / 2), spawn_rate * 0.7),
        Rarity::Common | Rarity::Uncommon => (points, spawn_rate),
    }
}
