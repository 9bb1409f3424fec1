//! Power-up catalog entries, types and rarity tiers.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_SPAWN_RATE: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpType {
    Defensive,
    Offensive,
    Bonus,
    Utility,
    Special,
}

impl PowerUpType {
    pub const ALL: [Self; 5] = [
        Self::Defensive,
        Self::Offensive,
        Self::Bonus,
        Self::Utility,
        Self::Special,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Defensive => "Defensive",
            Self::Offensive => "Offensive",
            Self::Bonus => "Bonus",
            Self::Utility => "Utility",
            Self::Special => "Special",
        }
    }
}

impl fmt::Display for PowerUpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PowerUpType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(())
    }
}

/// Rarity tiers, most common first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub const ALL: [Self; 5] = [
        Self::Common,
        Self::Uncommon,
        Self::Rare,
        Self::Epic,
        Self::Legendary,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Common => "Common",
            Self::Uncommon => "Uncommon",
            Self::Rare => "Rare",
            Self::Epic => "Epic",
            Self::Legendary => "Legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rarity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub id: u32,
    pub name: String,
    pub power_up_type: PowerUpType,
    pub duration_seconds: u32,
    pub points_value: u32,
    pub effect: String,
    /// Spawn probability in `[0, 1]`.
    pub spawn_rate: f64,
    pub rarity: Rarity,
    pub is_collectible: bool,
}

/// Clamp a spawn rate into `[0, 1]`; NaN becomes 0.
#[must_use]
pub fn clamp_spawn_rate(rate: f64) -> f64 {
    if rate.is_nan() { 0.0 } else { rate.clamp(0.0, 1.0) }
}

impl fmt::Display for PowerUp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | {} ({}) | {} | {}s | {} pts | {} | Spawn: {:.1}%",
            self.id,
            self.name,
            self.power_up_type,
            self.effect,
            self.duration_seconds,
            self.points_value,
            self.rarity,
            self.spawn_rate * 100.0
        )
    }
}

/// Field changes applied by [`crate::GameDataStore::update_power_up`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PowerUpPatch {
    pub name: Option<String>,
    pub power_up_type: Option<PowerUpType>,
    pub duration_seconds: Option<u32>,
    pub points_value: Option<u32>,
    pub effect: Option<String>,
    pub spawn_rate: Option<f64>,
    pub rarity: Option<Rarity>,
    pub is_collectible: Option<bool>,
}

impl PowerUpPatch {
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
    pub const fn power_up_type(mut self, kind: PowerUpType) -> Self {
        self.power_up_type = Some(kind);
        self
    }

    #[must_use]
    pub const fn duration_seconds(mut self, secs: u32) -> Self {
        self.duration_seconds = Some(secs);
        self
    }

    #[must_use]
    pub const fn points_value(mut self, points: u32) -> Self {
        self.points_value = Some(points);
        self
    }

    #[must_use]
    pub fn effect(mut self, effect: impl Into<String>) -> Self {
        self.effect = Some(effect.into());
        self
    }

    #[must_use]
    pub const fn spawn_rate(mut self, rate: f64) -> Self {
        self.spawn_rate = Some(rate);
        self
    }

    #[must_use]
    pub const fn rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = Some(rarity);
        self
    }

    #[must_use]
    pub const fn is_collectible(mut self, collectible: bool) -> Self {
        self.is_collectible = Some(collectible);
        self
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.power_up_type.is_none()
            && self.duration_seconds.is_none()
            && self.points_value.is_none()
            && self.effect.is_none()
            && self.spawn_rate.is_none()
            && self.rarity.is_none()
            && self.is_collectible.is_none()
    }

    pub(crate) fn apply(&self, power_up: &mut PowerUp) {
        if let Some(name) = &self.name {
            power_up.name.clone_from(name);
        }
        if let Some(kind) = self.power_up_type {
            power_up.power_up_type = kind;
        }
        if let Some(secs) = self.duration_seconds {
            power_up.duration_seconds = secs;
        }
        if let Some(points) = self.points_value {
            power_up.points_value = points;
        }
        if let Some(effect) = &self.effect {
            power_up.effect.clone_from(effect);
        }
        if let Some(rate) = self.spawn_rate {
            power_up.spawn_rate = clamp_spawn_rate(rate);
        }
        if let Some(rarity) = self.rarity {
            power_up.rarity = rarity;
        }
        if let Some(collectible) = self.is_collectible {
            power_up.is_collectible = collectible;
        }
    }
}
