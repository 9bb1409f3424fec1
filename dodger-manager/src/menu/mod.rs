//! Interactive menu tree driven by numbered choices.
mod analytics;
mod generate;
mod obstacle;
mod player;
mod power_up;
mod session;

use colored::Colorize;
use std::io::{self, BufRead, Write};

use crate::console::Console;
use crate::context::AppContext;
use crate::persistence::DEFAULT_EXPORT_FILE;
use crate::render;

pub use analytics::all_reports;

const MAIN_OPTIONS: &[&str] = &[
    "Player Management",
    "Game Session Management",
    "Obstacle Management",
    "Power-up Management",
    "Data Generation",
    "Analytics & Reports",
    "Save Data",
    "Load Data",
    "Export Data",
];

/// Print a numbered menu with a trailing zero option and read the choice.
fn choose<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    title: &str,
    options: &[&str],
    zero: &str,
) -> io::Result<Option<String>> {
    console.title(title)?;
    for (index, option) in options.iter().enumerate() {
        console.line(format!("{}. {option}", index + 1))?;
    }
    console.line(format!("0. {zero}"))?;
    console.read_line("Select an option: ")
}

fn unknown<R: BufRead, W: Write>(console: &mut Console<R, W>, choice: &str) -> io::Result<()> {
    console.error(&format!("Unknown option '{choice}'."))
}

fn not_found<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    what: &str,
    id: u32,
) -> io::Result<()> {
    console.error(&format!("{what} {id} not found."))
}

/// Run the main menu until the user exits or input ends.
pub async fn run<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    console.line("🚀 Dodger Game Data Manager".bright_cyan().bold())?;
    console.line("================================".cyan())?;
    if ctx.persistence.has_saved_data().await {
        console.line(format!(
            "Saved data found in {}. Choose 'Load Data' to restore it.",
            ctx.persistence.data_dir().display()
        ))?;
    }

    loop {
        let Some(choice) = choose(console, "Main Menu", MAIN_OPTIONS, "Exit")? else {
            break;
        };
        match choice.as_str() {
            "1" => player::run(ctx, console)?,
            "2" => session::run(ctx, console)?,
            "3" => obstacle::run(ctx, console)?,
            "4" => power_up::run(ctx, console)?,
            "5" => generate::run(ctx, console)?,
            "6" => analytics::run(ctx, console)?,
            "7" => save(ctx, console).await?,
            "8" => load(ctx, console).await?,
            "9" => export(ctx, console).await?,
            "0" => {
                console.success("Goodbye!")?;
                break;
            }
            other => unknown(console, other)?,
        }
        if console.is_closed() {
            break;
        }
    }
    log::debug!("console session finished");
    Ok(())
}

async fn save<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    console.line("💾 Saving all data...")?;
    if ctx.save().await {
        console.success("All data saved.")?;
        render::totals(console.out(), &dodger_game::analytics::store_totals(&ctx.store))?;
        console.line(format!(
            "📁 Data location: {}",
            ctx.persistence.data_dir().display()
        ))
    } else {
        console.error("Saving failed; see the log for details.")
    }
}

async fn load<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    if !ctx.store.is_empty()
        && !console.confirm("Loaded records are added to the current data. Continue?")?
    {
        return console.line("Load cancelled.");
    }
    console.line("📂 Loading data...")?;
    match ctx.load().await {
        Some(summary) => render::restore_summary(console.out(), &summary),
        None => console.error("Nothing was loaded; no saved data or the files could not be read."),
    }
}

async fn export<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let Some(name) = console.read_line(&format!("Export file name [{DEFAULT_EXPORT_FILE}]: "))?
    else {
        return Ok(());
    };
    let file_name = if name.is_empty() {
        DEFAULT_EXPORT_FILE
    } else {
        name.as_str()
    };
    match ctx.export(file_name).await {
        Some(path) => console.success(&format!("Data exported to {}", path.display())),
        None => console.error("Export failed; see the log for details."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_dir(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "dodger-menu-{label}-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ))
    }

    async fn drive(ctx: &mut AppContext, script: &str) -> String {
        let mut console = Console::new(script.as_bytes(), Vec::new());
        run(ctx, &mut console).await.expect("menu run");
        String::from_utf8(console.into_output()).expect("utf8")
    }

    #[tokio::test]
    async fn exit_choice_ends_the_session() {
        let mut ctx = AppContext::new(temp_dir("exit"), Some(1));
        let out = drive(&mut ctx, "0\n").await;
        assert!(out.contains("Main Menu"));
        assert!(out.contains("Goodbye!"));
    }

    #[tokio::test]
    async fn end_of_input_exits_cleanly() {
        let mut ctx = AppContext::new(temp_dir("eof"), Some(1));
        let out = drive(&mut ctx, "1\n").await;
        assert!(out.contains("Player Management"));
        assert!(!out.contains("Goodbye!"));
    }

    #[tokio::test]
    async fn unknown_choice_is_reported() {
        let mut ctx = AppContext::new(temp_dir("unknown"), Some(1));
        let out = drive(&mut ctx, "42\n0\n").await;
        assert!(out.contains("Unknown option '42'."));
    }

    #[tokio::test]
    async fn create_and_list_players() {
        let mut ctx = AppContext::new(temp_dir("players"), Some(1));
        let out = drive(&mut ctx, "1\n1\nAce\n1\n\n2\n0\n0\n").await;
        assert_eq!(ctx.store.player_count(), 1);
        assert!(out.contains("name is required."));
        assert!(out.contains("ID: 1 | Ace | Rank: Beginner"));
    }

    #[tokio::test]
    async fn session_for_unknown_player_is_rejected() {
        let mut ctx = AppContext::new(temp_dir("sessions"), Some(1));
        let out = drive(&mut ctx, "2\n1\n9\n0\n0\n").await;
        assert!(out.contains("Player 9 not found."));
        assert_eq!(ctx.store.session_count(), 0);
    }

    #[tokio::test]
    async fn recording_a_session_updates_the_player() {
        let mut ctx = AppContext::new(temp_dir("cascade"), Some(1));
        ctx.store.create_player("Ace");
        // player id, score, level (derived), minutes, seconds, difficulty
        let out = drive(&mut ctx, "2\n1\n1\n12000\n\n4\n30\nhard\n0\n0\n").await;
        assert!(out.contains("New high score!"));
        let player = ctx.store.player_by_id(1).expect("player");
        assert_eq!(player.highest_score, 12_000);
        assert_eq!(player.rank, dodger_game::Rank::Legend);
        let session = ctx.store.game_session_by_id(1).expect("session");
        assert_eq!(session.level, 13);
        assert_eq!(session.duration_secs, 270);
        assert_eq!(session.difficulty, dodger_game::Difficulty::Hard);
    }

    #[tokio::test]
    async fn save_load_and_export_through_the_menu() {
        let dir = temp_dir("files");
        let mut ctx = AppContext::new(&dir, Some(5));
        let out = drive(&mut ctx, "5\n5\n0\n7\n9\n\n0\n").await;
        assert!(out.contains("All data saved."));
        assert!(out.contains("game_data_export.json"));
        assert!(dir.join("players.json").exists());

        let mut fresh = AppContext::new(&dir, None);
        let out = drive(&mut fresh, "8\n0\n").await;
        assert!(out.contains("Saved data found"));
        assert!(out.contains("Loaded 15 players, 50 game sessions"));
        assert_eq!(fresh.store.obstacle_count(), 20);
        let _ = std::fs::remove_dir_all(dir);
    }
}
