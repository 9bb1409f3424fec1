use std::io::Write;
use std::process::{Command, Stdio};

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "dodger-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

fn run_with_input(args: &[&str], input: &str) -> std::process::Output {
    let exe = env!("CARGO_BIN_EXE_dodger-manager");
    let mut child = Command::new(exe)
        .args(args)
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn cli");
    child
        .stdin
        .take()
        .expect("stdin handle")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for cli")
}

#[test]
fn cli_demo_prints_reports() {
    let exe = env!("CARGO_BIN_EXE_dodger-manager");
    let data_dir = temp_path("demo");
    let output = Command::new(exe)
        .args(["--demo", "--seed", "7", "--data-dir"])
        .arg(&data_dir)
        .env("NO_COLOR", "1")
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Player Statistics"));
    assert!(stdout.contains("Score Distribution"));
    assert!(stdout.contains("Generated 15 players, 20 obstacles, 12 power-ups and 50 game sessions"));
    assert!(!data_dir.exists(), "demo never writes files");
}

#[test]
fn cli_demo_is_reproducible_with_a_seed() {
    let exe = env!("CARGO_BIN_EXE_dodger-manager");
    let run = || {
        let output = Command::new(exe)
            .args(["--demo", "--seed", "11"])
            .env("NO_COLOR", "1")
            .output()
            .expect("run cli");
        String::from_utf8_lossy(&output.stdout).into_owned()
    };
    let first = run();
    let leaderboard_line = |text: &str| {
        text.lines()
            .skip_while(|line| !line.contains("Top scorers"))
            .nth(1)
            .map(str::to_owned)
    };
    assert!(leaderboard_line(&first).is_some());
    assert_eq!(leaderboard_line(&first), leaderboard_line(&run()));
}

#[test]
fn cli_save_then_exit_writes_data_files() {
    let data_dir = temp_path("save");
    let dir_arg = data_dir.to_string_lossy().into_owned();
    let output = run_with_input(
        &["--seed", "3", "--data-dir", &dir_arg],
        "1\n1\nAce\n0\n7\n0\n",
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("All data saved."));
    assert!(stdout.contains("Goodbye!"));
    let players = std::fs::read_to_string(data_dir.join("players.json")).expect("players file");
    assert!(players.contains("\"name\": \"Ace\""));
    for file in ["sessions.json", "obstacles.json", "powerups.json"] {
        assert!(data_dir.join(file).exists(), "{file} written");
    }
    let _ = std::fs::remove_dir_all(data_dir);
}

#[test]
fn cli_exits_cleanly_when_input_ends() {
    let data_dir = temp_path("eof");
    let dir_arg = data_dir.to_string_lossy().into_owned();
    let output = run_with_input(&["--data-dir", &dir_arg], "abc\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Unknown option 'abc'."));
}
