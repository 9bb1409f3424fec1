//! Non-interactive walkthrough: build a sample dataset and print every report.
use colored::Colorize;
use std::io::{self, Write};

use dodger_game::analytics::{obstacles_by_speed, search_players};

use crate::context::AppContext;
use crate::menu::all_reports;
use crate::render;

pub const DEMO_SEARCH_TERM: &str = "Star";
pub const DEMO_SPEED_RANGE: (f64, f64) = (3.0, 5.0);

pub fn run_demo<W: Write>(ctx: &mut AppContext, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "🚀 Dodger Game Data Manager - Demo".bright_cyan().bold())?;
    writeln!(out, "{}", "==================================".cyan())?;

    let summary = ctx.generator.generate_complete_dataset(&mut ctx.store);
    render::generation_summary(out, &summary)?;
    all_reports(&ctx.store, out)?;

    let found = search_players(&ctx.store, DEMO_SEARCH_TERM);
    render::listing(
        out,
        &format!("🔍 Players matching '{DEMO_SEARCH_TERM}'"),
        &found,
        "matching players",
    )?;

    let (min, max) = DEMO_SPEED_RANGE;
    let fast = obstacles_by_speed(&ctx.store, min, max);
    render::listing(
        out,
        &format!("Obstacles with speed {min:.2} to {max:.2}"),
        &fast,
        "obstacles in that range",
    )?;

    writeln!(out)?;
    writeln!(out, "{}", "✓ Demo complete".green().bold())
}
