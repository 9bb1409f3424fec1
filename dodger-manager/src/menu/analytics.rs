use std::io::{self, BufRead, Write};

use dodger_game::GameDataStore;
use dodger_game::analytics::{
    advanced_analytics, obstacle_statistics, player_leaderboard, player_statistics,
    power_up_statistics, session_statistics, store_totals,
};

use super::{choose, unknown};
use crate::console::Console;
use crate::context::AppContext;
use crate::render;

const OPTIONS: &[&str] = &[
    "Player Statistics",
    "Game Session Statistics",
    "Obstacle Statistics",
    "Power-up Statistics",
    "Advanced Analytics",
    "Leaderboard",
    "All Reports",
];

/// Every report in menu order, preceded by the store totals.
pub fn all_reports<W: Write>(store: &GameDataStore, out: &mut W) -> io::Result<()> {
    render::heading(out, "📦 Data Summary")?;
    render::totals(out, &store_totals(store))?;
    render::player_statistics(out, player_statistics(store).as_ref())?;
    render::session_statistics(out, session_statistics(store).as_ref())?;
    render::obstacle_statistics(out, obstacle_statistics(store).as_ref())?;
    render::power_up_statistics(out, power_up_statistics(store).as_ref())?;
    render::advanced_analytics(out, advanced_analytics(store).as_ref())
}

pub fn run<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    loop {
        let Some(choice) = choose(console, "📊 Analytics & Reports", OPTIONS, "Back")? else {
            return Ok(());
        };
        let store = &ctx.store;
        let out = console.out();
        match choice.as_str() {
            "1" => render::player_statistics(out, player_statistics(store).as_ref())?,
            "2" => render::session_statistics(out, session_statistics(store).as_ref())?,
            "3" => render::obstacle_statistics(out, obstacle_statistics(store).as_ref())?,
            "4" => render::power_up_statistics(out, power_up_statistics(store).as_ref())?,
            "5" => render::advanced_analytics(out, advanced_analytics(store).as_ref())?,
            "6" => render::leaderboard(out, &player_leaderboard(store))?,
            "7" => all_reports(store, out)?,
            "0" => return Ok(()),
            other => unknown(console, other)?,
        }
        if console.is_closed() {
            return Ok(());
        }
    }
}
