use std::io::{self, BufRead, Write};
use std::time::Duration;

use dodger_game::analytics::recent_sessions;
use dodger_game::{Difficulty, GameSession, SessionPatch, level_for_score};

use super::{choose, not_found, unknown};
use crate::console::Console;
use crate::context::AppContext;
use crate::render;

const OPTIONS: &[&str] = &[
    "Record Game Session",
    "View All Sessions",
    "View Sessions for Player",
    "Recent Sessions",
    "Update Session",
    "Delete Session",
];

const DEFAULT_RECENT: usize = 10;

/// Longest session the console accepts: one day.
const MAX_MINUTES: u64 = 24 * 60;

fn parse_minutes(text: &str) -> Option<u64> {
    text.parse().ok().filter(|mins| *mins <= MAX_MINUTES)
}

fn parse_seconds(text: &str) -> Option<u64> {
    text.parse().ok().filter(|secs| *secs < 60)
}

pub fn run<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    loop {
        let Some(choice) = choose(console, "🎮 Game Session Management", OPTIONS, "Back")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => record(ctx, console)?,
            "2" => render::listing(
                console.out(),
                "All Game Sessions",
                ctx.store.sessions(),
                "game sessions",
            )?,
            "3" => for_player(ctx, console)?,
            "4" => recent(ctx, console)?,
            "5" => update(ctx, console)?,
            "6" => delete(ctx, console)?,
            "0" => return Ok(()),
            other => unknown(console, other)?,
        }
        if console.is_closed() {
            return Ok(());
        }
    }
}

fn record<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let Some(player_id) = console.require::<u32>("Player ID: ", "player ID")? else {
        return Ok(());
    };
    let Some(player_name) = ctx.store.player_by_id(player_id).map(|p| p.name.clone()) else {
        return not_found(console, "Player", player_id);
    };
    let Some(score) = console.require::<u32>("Score: ", "score")? else {
        return Ok(());
    };
    let derived = level_for_score(score);
    let Some(level) = console
        .change::<u32>(&format!("Level [{derived}]: "), "level")?
        .accepted()
    else {
        return Ok(());
    };
    let Some(minutes) = console.require_with("Duration minutes: ", "minutes", parse_minutes)?
    else {
        return Ok(());
    };
    let Some(seconds) = console
        .change_with("Duration seconds [0]: ", "seconds", parse_seconds)?
        .accepted()
    else {
        return Ok(());
    };
    let Some(difficulty) = console
        .change::<Difficulty>(
            &format!("Difficulty (Easy/Normal/Hard/Expert) [{}]: ", Difficulty::default()),
            "difficulty",
        )?
        .accepted()
    else {
        return Ok(());
    };

    let duration = Duration::from_secs(minutes * 60 + seconds.unwrap_or(0));
    let session = ctx.store.create_game_session(
        player_id,
        player_name,
        score,
        level.unwrap_or(derived),
        duration,
    );
    if let Some(difficulty) = difficulty {
        ctx.store
            .update_game_session(session.id, &SessionPatch::new().difficulty(difficulty));
    }
    console.success(&format!("Recorded session {}", session.id))?;
    if session.new_high_score {
        console.success("New high score!")?;
    }
    if let Some(player) = ctx.store.player_by_id(player_id) {
        console.line(format!("  {player}"))?;
    }
    Ok(())
}

fn for_player<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let Some(player_id) = console.require::<u32>("Player ID: ", "player ID")? else {
        return Ok(());
    };
    let sessions: Vec<&GameSession> = ctx.store.sessions_for_player(player_id).collect();
    render::listing(
        console.out(),
        &format!("Sessions for player {player_id}"),
        &sessions,
        "game sessions",
    )
}

fn recent<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let Some(count) = console
        .change::<usize>(
            &format!("How many sessions [{DEFAULT_RECENT}]: "),
            "count",
        )?
        .accepted()
    else {
        return Ok(());
    };
    let sessions = recent_sessions(&ctx.store, count.unwrap_or(DEFAULT_RECENT));
    render::listing(console.out(), "🕒 Recent Sessions", &sessions, "game sessions")
}

fn update<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let Some(id) = console.require::<u32>("Session ID: ", "session ID")? else {
        return Ok(());
    };
    let Some(current) = ctx.store.game_session_by_id(id).cloned() else {
        return not_found(console, "Session", id);
    };
    console.line(&current)?;
    let Some(dodged) = console
        .change::<u32>(
            &format!("Obstacles dodged [{}]: ", current.obstacles_dodged),
            "count",
        )?
        .accepted()
    else {
        return Ok(());
    };
    let Some(collected) = console
        .change::<u32>(
            &format!("Power-ups collected [{}]: ", current.power_ups_collected),
            "count",
        )?
        .accepted()
    else {
        return Ok(());
    };
    let Some(difficulty) = console
        .change::<Difficulty>(
            &format!("Difficulty [{}]: ", current.difficulty),
            "difficulty",
        )?
        .accepted()
    else {
        return Ok(());
    };

    let mut patch = SessionPatch::new();
    patch.obstacles_dodged = dodged;
    patch.power_ups_collected = collected;
    patch.difficulty = difficulty;
    if patch.is_empty() {
        return console.line("No changes.");
    }
    if ctx.store.update_game_session(id, &patch) {
        console.success(&format!("Session {id} updated."))
    } else {
        not_found(console, "Session", id)
    }
}

fn delete<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let Some(id) = console.require::<u32>("Session ID: ", "session ID")? else {
        return Ok(());
    };
    if ctx.store.delete_game_session(id) {
        console.success(&format!("Session {id} deleted."))
    } else {
        not_found(console, "Session", id)
    }
}
