use std::io::{self, BufRead, Write};

use dodger_game::PlayerPatch;
use dodger_game::analytics::{player_leaderboard, search_players};

use super::{choose, not_found, unknown};
use crate::console::Console;
use crate::context::AppContext;
use crate::render;

const OPTIONS: &[&str] = &[
    "Create Player",
    "View All Players",
    "Find Player by ID",
    "Update Player",
    "Delete Player",
    "Search Players by Name",
    "Leaderboard",
];

pub fn run<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    loop {
        let Some(choice) = choose(console, "👤 Player Management", OPTIONS, "Back")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => create(ctx, console)?,
            "2" => render::listing(console.out(), "All Players", ctx.store.players(), "players")?,
            "3" => find(ctx, console)?,
            "4" => update(ctx, console)?,
            "5" => delete(ctx, console)?,
            "6" => search(ctx, console)?,
            "7" => render::leaderboard(console.out(), &player_leaderboard(&ctx.store))?,
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
    let Some(name) = console.require::<String>("Player name: ", "name")? else {
        return Ok(());
    };
    let player = ctx.store.create_player(name);
    console.success(&format!("Created player {player}"))
}

fn find<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let Some(id) = console.require::<u32>("Player ID: ", "player ID")? else {
        return Ok(());
    };
    let Some(player) = ctx.store.player_by_id(id) else {
        return not_found(console, "Player", id);
    };
    console.line(player)?;
    console.line(format!(
        "  Registered: {} | Last played: {} | Total score: {}",
        player.date_registered.format("%Y-%m-%d"),
        player.last_played.format("%Y-%m-%d %H:%M"),
        player.total_score
    ))?;
    for session in ctx.store.sessions_for_player(id) {
        console.line(format!("  {session}"))?;
    }
    Ok(())
}

fn update<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let Some(id) = console.require::<u32>("Player ID: ", "player ID")? else {
        return Ok(());
    };
    let Some(current) = ctx.store.player_by_id(id).map(|p| p.name.clone()) else {
        return not_found(console, "Player", id);
    };
    let Some(name) = console
        .change::<String>(&format!("New name [{current}]: "), "name")?
        .accepted()
    else {
        return Ok(());
    };
    let Some(name) = name else {
        return console.line("No changes.");
    };
    if ctx.store.update_player(id, &PlayerPatch::new().name(name)) {
        console.success(&format!("Player {id} updated."))
    } else {
        not_found(console, "Player", id)
    }
}

fn delete<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let Some(id) = console.require::<u32>("Player ID: ", "player ID")? else {
        return Ok(());
    };
    if ctx.store.player_by_id(id).is_none() {
        return not_found(console, "Player", id);
    }
    if !console.confirm(&format!("Delete player {id}? Their sessions are kept"))? {
        return console.line("Delete cancelled.");
    }
    if ctx.store.delete_player(id) {
        console.success(&format!("Player {id} deleted."))
    } else {
        not_found(console, "Player", id)
    }
}

fn search<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let Some(term) = console.require::<String>("Search term: ", "search term")? else {
        return Ok(());
    };
    let found = search_players(&ctx.store, &term);
    render::listing(
        console.out(),
        &format!("🔍 Players matching '{term}'"),
        &found,
        "matching players",
    )
}
