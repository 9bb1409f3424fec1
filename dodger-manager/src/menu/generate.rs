use std::io::{self, BufRead, Write};

use dodger_game::analytics::store_totals;
use dodger_game::{DataGenerator, GameDataStore};

use super::{choose, unknown};
use crate::console::Console;
use crate::context::AppContext;
use crate::render;

const OPTIONS: &[&str] = &[
    "Generate Players",
    "Generate Obstacles",
    "Generate Power-ups",
    "Generate Game Sessions",
    "Generate Complete Dataset",
    "Clear All Data",
];

type Generate = fn(&mut DataGenerator, &mut GameDataStore, usize) -> usize;

pub fn run<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    loop {
        let Some(choice) = choose(console, "🎲 Data Generation", OPTIONS, "Back")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => batch(ctx, console, "players", DataGenerator::generate_players)?,
            "2" => batch(ctx, console, "obstacles", DataGenerator::generate_obstacles)?,
            "3" => batch(ctx, console, "power-ups", DataGenerator::generate_power_ups)?,
            "4" => sessions(ctx, console)?,
            "5" => {
                let summary = ctx.generator.generate_complete_dataset(&mut ctx.store);
                render::generation_summary(console.out(), &summary)?;
                render::totals(console.out(), &store_totals(&ctx.store))?;
            }
            "6" => clear(ctx, console)?,
            "0" => return Ok(()),
            other => unknown(console, other)?,
        }
        if console.is_closed() {
            return Ok(());
        }
    }
}

fn batch<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
    what: &str,
    generate: Generate,
) -> io::Result<()> {
    let Some(count) = console.require::<usize>(&format!("How many {what}? "), "count")? else {
        return Ok(());
    };
    let created = generate(&mut ctx.generator, &mut ctx.store, count);
    console.success(&format!("Generated {created} {what}."))
}

fn sessions<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    if ctx.store.players().is_empty() {
        return console.error("No players found. Generate players first.");
    }
    batch(
        ctx,
        console,
        "game sessions",
        DataGenerator::generate_sessions,
    )
}

fn clear<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    if !console.confirm("Delete ALL players, sessions, obstacles and power-ups?")? {
        return console.line("Clear cancelled.");
    }
    ctx.store.clear_all();
    console.success("All data cleared.")
}
