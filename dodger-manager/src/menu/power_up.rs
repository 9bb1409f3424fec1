use std::io::{self, BufRead, Write};

use dodger_game::{PowerUpPatch, PowerUpType, Rarity};

use super::{choose, not_found, unknown};
use crate::console::{Console, parse_yes_no};
use crate::context::AppContext;
use crate::render;

const OPTIONS: &[&str] = &[
    "Create Power-up",
    "View All Power-ups",
    "Find Power-up by ID",
    "Update Power-up",
    "Delete Power-up",
];

fn parse_spawn_rate(text: &str) -> Option<f64> {
    text.parse::<f64>()
        .ok()
        .filter(|rate| (0.0..=1.0).contains(rate))
}

pub fn run<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    loop {
        let Some(choice) = choose(console, "⭐ Power-up Management", OPTIONS, "Back")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => create(ctx, console)?,
            "2" => render::listing(
                console.out(),
                "All Power-ups",
                ctx.store.power_ups(),
                "power-ups",
            )?,
            "3" => find(ctx, console)?,
            "4" => update(ctx, console)?,
            "5" => delete(ctx, console)?,
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
    let Some(name) = console.require::<String>("Power-up name: ", "name")? else {
        return Ok(());
    };
    let Some(kind) = console.require::<PowerUpType>(
        "Type (Defensive/Offensive/Bonus/Utility/Special): ",
        "type",
    )?
    else {
        return Ok(());
    };
    let Some(effect) = console.require::<String>("Effect: ", "effect")? else {
        return Ok(());
    };
    let Some(duration) = console.require::<u32>("Duration (seconds): ", "duration")? else {
        return Ok(());
    };
    let Some(points) = console.require::<u32>("Points value: ", "points")? else {
        return Ok(());
    };
    let power_up = ctx
        .store
        .create_power_up(name, kind, effect, duration, points);
    console.success(&format!("Created power-up {power_up}"))
}

fn find<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let Some(id) = console.require::<u32>("Power-up ID: ", "power-up ID")? else {
        return Ok(());
    };
    match ctx.store.power_up_by_id(id) {
        Some(power_up) => console.line(power_up),
        None => not_found(console, "Power-up", id),
    }
}

fn update<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let Some(id) = console.require::<u32>("Power-up ID: ", "power-up ID")? else {
        return Ok(());
    };
    let Some(current) = ctx.store.power_up_by_id(id).cloned() else {
        return not_found(console, "Power-up", id);
    };
    console.line(&current)?;
    let Some(name) = console
        .change::<String>(&format!("Name [{}]: ", current.name), "name")?
        .accepted()
    else {
        return Ok(());
    };
    let Some(points) = console
        .change::<u32>(
            &format!("Points value [{}]: ", current.points_value),
            "points",
        )?
        .accepted()
    else {
        return Ok(());
    };
    let Some(spawn_rate) = console
        .change_with(
            &format!("Spawn rate 0-1 [{}]: ", current.spawn_rate),
            "spawn rate",
            parse_spawn_rate,
        )?
        .accepted()
    else {
        return Ok(());
    };
    let Some(rarity) = console
        .change::<Rarity>(
            &format!(
                "Rarity (Common/Uncommon/Rare/Epic/Legendary) [{}]: ",
                current.rarity
            ),
            "rarity",
        )?
        .accepted()
    else {
        return Ok(());
    };
    let Some(collectible) = console
        .change_with(
            &format!(
                "Collectible (y/n) [{}]: ",
                if current.is_collectible { "y" } else { "n" }
            ),
            "answer",
            parse_yes_no,
        )?
        .accepted()
    else {
        return Ok(());
    };

    let patch = PowerUpPatch {
        name,
        points_value: points,
        spawn_rate,
        rarity,
        is_collectible: collectible,
        ..PowerUpPatch::default()
    };
    if patch.is_empty() {
        return console.line("No changes.");
    }
    if ctx.store.update_power_up(id, &patch) {
        console.success(&format!("Power-up {id} updated."))
    } else {
        not_found(console, "Power-up", id)
    }
}

fn delete<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let Some(id) = console.require::<u32>("Power-up ID: ", "power-up ID")? else {
        return Ok(());
    };
    if ctx.store.delete_power_up(id) {
        console.success(&format!("Power-up {id} deleted."))
    } else {
        not_found(console, "Power-up", id)
    }
}
