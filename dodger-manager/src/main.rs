mod console;
mod context;
mod demo;
mod menu;
mod persistence;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;

use console::Console;
use context::AppContext;

#[derive(Debug, Parser)]
#[command(name = "dodger-manager", version)]
#[command(
    about = "Console manager for Dodger game data - players, sessions, obstacles, power-ups and analytics"
)]
struct Args {
    /// Directory holding the JSON data files
    #[arg(long, default_value = "GameData")]
    data_dir: PathBuf,

    /// Seed for the sample data generator (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Generate a complete sample dataset, print every report and exit
    #[arg(long)]
    demo: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    log::debug!("starting with {args:?}");

    let mut ctx = AppContext::new(&args.data_dir, args.seed);

    if args.demo {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        demo::run_demo(&mut ctx, &mut out).context("failed to write demo output")?;
        return Ok(());
    }

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    menu::run(&mut ctx, &mut console)
        .await
        .context("console session failed")?;
    Ok(())
}

/// `RUST_LOG` wins; otherwise `debug` with `--verbose` and `warn` without.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}
