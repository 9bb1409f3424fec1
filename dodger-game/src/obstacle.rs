//! Obstacle catalog entries.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::numbers::floor_f64_to_u32;

pub const DEFAULT_OBSTACLE_COLOR: &str = "Gray";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleType {
    Meteor,
    Comet,
    Asteroid,
    Debris,
    Crystal,
}

impl ObstacleType {
    pub const ALL: [Self; 5] = [
        Self::Meteor,
        Self::Comet,
        Self::Asteroid,
        Self::Debris,
        Self::Crystal,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Meteor => "Meteor",
            Self::Comet => "Comet",
            Self::Asteroid => "Asteroid",
            Self::Debris => "Debris",
            Self::Crystal => "Crystal",
        }
    }
}

impl fmt::Display for ObstacleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObstacleType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub name: String,
    pub obstacle_type: ObstacleType,
    pub speed: f64,
    pub damage_points: u32,
    pub size: u32,
    pub color: String,
    pub points_on_dodge: u32,
    pub is_active: bool,
}

/// Default dodge reward: five points per unit of speed plus a tenth of the damage.
#[must_use]
pub fn default_points_on_dodge(speed: f64, damage_points: u32) -> u32 {
    floor_f64_to_u32(speed * 5.0).saturating_add(damage_points / 10)
}

impl fmt::Display for Obstacle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_active { "Active" } else { "Inactive" };
        write!(
            f,
            "ID: {} | {} ({}) | Speed: {} | Damage: {} | Size: {} | {} | Dodge: {} pts | {}",
            self.id,
            self.name,
            self.obstacle_type,
            self.speed,
            self.damage_points,
            self.size,
            self.color,
            self.points_on_dodge,
            status
        )
    }
}

/// Field changes applied by [`crate::GameDataStore::update_obstacle`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObstaclePatch {
    pub name: Option<String>,
    pub obstacle_type: Option<ObstacleType>,
    pub speed: Option<f64>,
    pub damage_points: Option<u32>,
    pub size: Option<u32>,
    pub color: Option<String>,
    pub points_on_dodge: Option<u32>,
    pub is_active: Option<bool>,
}

impl ObstaclePatch {
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
    pub const fn obstacle_type(mut self, kind: ObstacleType) -> Self {
        self.obstacle_type = Some(kind);
        self
    }

    #[must_use]
    pub const fn speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    #[must_use]
    pub const fn damage_points(mut self, damage: u32) -> Self {
        self.damage_points = Some(damage);
        self
    }

    #[must_use]
    pub const fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub const fn points_on_dodge(mut self, points: u32) -> Self {
        self.points_on_dodge = Some(points);
        self
    }

    #[must_use]
    pub const fn is_active(mut self, active: bool) -> Self {
        self.is_active = Some(active);
        self
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.obstacle_type.is_none()
            && self.speed.is_none()
            && self.damage_points.is_none()
            && self.size.is_none()
            && self.color.is_none()
            && self.points_on_dodge.is_none()
            && self.is_active.is_none()
    }

    pub(crate) fn apply(&self, obstacle: &mut Obstacle) {
        if let Some(name) = &self.name {
            obstacle.name.clone_from(name);
        }
        if let Some(kind) = self.obstacle_type {
            obstacle.obstacle_type = kind;
        }
        if let Some(speed) = self.speed {
            obstacle.speed = speed;
        }
        if let Some(damage) = self.damage_points {
            obstacle.damage_points = damage;
        }
        if let Some(size) = self.size {
            obstacle.size = size;
        }
        if let Some(color) = &self.color {
            obstacle.color.clone_from(color);
        }
        if let Some(points) = self.points_on_dodge {
            obstacle.points_on_dodge = points;
        }
        if let Some(active) = self.is_active {
            obstacle.is_active = active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dodge_points_scale_with_speed_and_damage() {
        assert_eq!(default_points_on_dodge(3.5, 150), 17 + 15);
        assert_eq!(default_points_on_dodge(1.0, 9), 5);
    }

    #[test]
    fn display_contains_name_type_and_speed() {
        let obstacle = Obstacle {
            id: 1,
            name: "Giant Asteroid".to_string(),
            obstacle_type: ObstacleType::Asteroid,
            speed: 3.0,
            damage_points: 300,
            size: 50,
            color: "Gray".to_string(),
            points_on_dodge: 200,
            is_active: true,
        };
        let line = obstacle.to_string();
        assert!(line.contains("Giant Asteroid"));
        assert!(line.contains("(Asteroid)"));
        assert!(line.contains("Speed: 3"));
    }

    #[test]
    fn type_round_trips_through_text() {
        for kind in ObstacleType::ALL {
            assert_eq!(kind.to_string().to_lowercase().parse(), Ok(kind));
        }
    }
}
