use std::io::{self, BufRead, Write};

use dodger_game::analytics::obstacles_by_speed;
use dodger_game::{ObstaclePatch, ObstacleType};

use super::{choose, not_found, unknown};
use crate::console::{Console, parse_yes_no};
use crate::context::AppContext;
use crate::render;

const OPTIONS: &[&str] = &[
    "Create Obstacle",
    "View All Obstacles",
    "Find Obstacle by ID",
    "Update Obstacle",
    "Delete Obstacle",
    "Filter Obstacles by Speed",
];

const TYPE_PROMPT: &str = "Type (Meteor/Comet/Asteroid/Debris/Crystal)";

/// Finite, strictly positive obstacle speed.
fn parse_speed(text: &str) -> Option<f64> {
    parse_speed_bound(text).filter(|speed| *speed > 0.0)
}

/// Finite, non-negative filter bound.
fn parse_speed_bound(text: &str) -> Option<f64> {
    text.parse::<f64>()
        .ok()
        .filter(|speed| speed.is_finite() && *speed >= 0.0)
}

pub fn run<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    loop {
        let Some(choice) = choose(console, "☄️ Obstacle Management", OPTIONS, "Back")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => create(ctx, console)?,
            "2" => render::listing(
                console.out(),
                "All Obstacles",
                ctx.store.obstacles(),
                "obstacles",
            )?,
            "3" => find(ctx, console)?,
            "4" => update(ctx, console)?,
            "5" => delete(ctx, console)?,
            "6" => filter_by_speed(ctx, console)?,
            "0" => return Ok(()),
            other => unknown(console, other)?,
        }
        if console.is_closed() {
            return Ok(());
        }
    }
}

fn create<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let Some(name) = console.require::<String>("Obstacle name: ", "name")? else {
        return Ok(());
    };
    let Some(kind) = console.require::<ObstacleType>(&format!("{TYPE_PROMPT}: "), "type")? else {
        return Ok(());
    };
    let Some(speed) = console.require_with("Speed: ", "speed", parse_speed)? else {
        return Ok(());
    };
    let Some(damage) = console.require::<u32>("Damage points: ", "damage")? else {
        return Ok(());
    };
    let Some(size) = console.require::<u32>("Size: ", "size")? else {
        return Ok(());
    };
    let obstacle = ctx.store.create_obstacle(name, kind, speed, damage, size);
    console.success(&format!("Created obstacle {obstacle}"))
}

fn find<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let Some(id) = console.require::<u32>("Obstacle ID: ", "obstacle ID")? else {
        return Ok(());
    };
    match ctx.store.obstacle_by_id(id) {
        Some(obstacle) => console.line(obstacle),
        None => not_found(console, "Obstacle", id),
    }
}

fn update<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let Some(id) = console.require::<u32>("Obstacle ID: ", "obstacle ID")? else {
        return Ok(());
    };
    let Some(current) = ctx.store.obstacle_by_id(id).cloned() else {
        return not_found(console, "Obstacle", id);
    };
    console.line(&current)?;
    let Some(name) = console
        .change::<String>(&format!("Name [{}]: ", current.name), "name")?
        .accepted()
    else {
        return Ok(());
    };
    let Some(speed) = console
        .change_with(&format!("Speed [{}]: ", current.speed), "speed", parse_speed)?
        .accepted()
    else {
        return Ok(());
    };
    let Some(damage) = console
        .change::<u32>(
            &format!("Damage points [{}]: ", current.damage_points),
            "damage",
        )?
        .accepted()
    else {
        return Ok(());
    };
    let Some(color) = console
        .change::<String>(&format!("Color [{}]: ", current.color), "color")?
        .accepted()
    else {
        return Ok(());
    };
    let Some(active) = console
        .change_with(
            &format!("Active (y/n) [{}]: ", if current.is_active { "y" } else { "n" }),
            "answer",
            parse_yes_no,
        )?
        .accepted()
    else {
        return Ok(());
    };

    let patch = ObstaclePatch {
        name,
        speed,
        damage_points: damage,
        color,
        is_active: active,
        ..ObstaclePatch::default()
    };
    if patch.is_empty() {
        return console.line("No changes.");
    }
    if ctx.store.update_obstacle(id, &patch) {
        console.success(&format!("Obstacle {id} updated."))
    } else {
        not_found(console, "Obstacle", id)
    }
}

fn delete<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let Some(id) = console.require::<u32>("Obstacle ID: ", "obstacle ID")? else {
        return Ok(());
    };
    if ctx.store.delete_obstacle(id) {
        console.success(&format!("Obstacle {id} deleted."))
    } else {
        not_found(console, "Obstacle", id)
    }
}

fn filter_by_speed<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let Some(min) = console.require_with("Minimum speed: ", "speed", parse_speed_bound)? else {
        return Ok(());
    };
    let Some(max) = console.require_with("Maximum speed: ", "speed", parse_speed_bound)? else {
        return Ok(());
    };
    if min > max {
        return console.error("Minimum speed must not exceed maximum speed.");
    }
    let matching = obstacles_by_speed(&ctx.store, min, max);
    render::listing(
        console.out(),
        &format!("Obstacles with speed {min:.2} to {max:.2}"),
        &matching,
        "obstacles in that range",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(script: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(script.as_bytes(), Vec::new())
    }

    fn written(console: Console<&[u8], Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).expect("utf8")
    }

    #[test]
    fn speed_must_be_finite_and_positive() {
        assert_eq!(parse_speed("3.25"), Some(3.25));
        assert_eq!(parse_speed("0"), None);
        assert_eq!(parse_speed("-1"), None);
        assert_eq!(parse_speed("NaN"), None);
        assert_eq!(parse_speed("inf"), None);
    }

    #[test]
    fn filter_bounds_may_start_at_zero() {
        assert_eq!(parse_speed_bound("0"), Some(0.0));
        assert_eq!(parse_speed_bound("-0.5"), None);
    }

    #[test]
    fn create_rejects_zero_speed() {
        let mut ctx = AppContext::new(std::env::temp_dir(), Some(1));
        // name, type, speed, damage, size
        let mut rejected = console("Rock\nMeteor\n0\n10\n10\n");
        create(&mut ctx, &mut rejected).expect("create");
        assert!(written(rejected).contains("Invalid speed: '0'."));
        assert!(ctx.store.obstacles().is_empty());

        let mut accepted = console("Rock\nMeteor\n2.5\n10\n10\n");
        create(&mut ctx, &mut accepted).expect("create");
        let speeds: Vec<f64> = ctx.store.obstacles().iter().map(|o| o.speed).collect();
        assert_eq!(speeds, vec![2.5]);
    }

    #[test]
    fn update_rejects_zero_speed() {
        let mut ctx = AppContext::new(std::env::temp_dir(), Some(1));
        ctx.store
            .create_obstacle("Rock", ObstacleType::Asteroid, 2.0, 10, 10);
        // id, name, speed
        let mut c = console("1\n\n0\n");
        update(&mut ctx, &mut c).expect("update");
        assert!(written(c).contains("Invalid speed: '0'."));
        let obstacle = ctx.store.obstacle_by_id(1).expect("obstacle");
        assert!((obstacle.speed - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn filter_accepts_a_zero_lower_bound() {
        let mut ctx = AppContext::new(std::env::temp_dir(), Some(1));
        ctx.store
            .create_obstacle("Slow", ObstacleType::Debris, 1.5, 5, 5);
        let mut c = console("0\n2\n");
        filter_by_speed(&mut ctx, &mut c).expect("filter");
        assert!(written(c).contains("Slow"));
    }
}
