use colored::Colorize;
use std::fmt::Display;
use std::io::{self, Write};

use dodger_game::analytics::{
    AdvancedAnalytics, LeaderboardRow, ObstacleStatistics, PlayerStatistics, PowerUpStatistics,
    SessionStatistics, StoreTotals,
};
use dodger_game::{GenerationSummary, RestoreSummary, format_duration};

pub fn heading<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", title.bright_cyan().bold())?;
    writeln!(out, "{}", "=".repeat(title.chars().count()).cyan())
}

fn subheading<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", title.bright_yellow().bold())
}

fn no_data<W: Write>(out: &mut W, what: &str) -> io::Result<()> {
    writeln!(out, "{}", format!("No {what} available.").yellow())
}

fn counts<W: Write, K: Display>(out: &mut W, rows: &[(K, usize)], unit: &str) -> io::Result<()> {
    for (key, count) in rows {
        writeln!(out, "  {key}: {count} {unit}")?;
    }
    Ok(())
}

/// Numbered list of any displayable records.
pub fn listing<W: Write, T: Display>(
    out: &mut W,
    title: &str,
    items: &[T],
    empty: &str,
) -> io::Result<()> {
    heading(out, title)?;
    if items.is_empty() {
        return no_data(out, empty);
    }
    for item in items {
        writeln!(out, "  {item}")?;
    }
    writeln!(out, "{}", format!("Total: {}", items.len()).dimmed())
}

pub fn player_statistics<W: Write>(
    out: &mut W,
    stats: Option<&PlayerStatistics>,
) -> io::Result<()> {
    heading(out, "👤 Player Statistics")?;
    let Some(stats) = stats else {
        return no_data(out, "player data");
    };
    writeln!(out, "Total players: {}", stats.total_players)?;
    writeln!(out, "Average high score: {:.2}", stats.average_high_score)?;
    writeln!(out, "Highest score: {}", stats.max_high_score.to_string().green())?;
    writeln!(out, "Lowest high score: {}", stats.min_high_score)?;
    writeln!(out, "Total games played: {}", stats.total_games_played)?;

    subheading(out, "Players by rank")?;
    counts(out, &stats.players_by_rank, "players")?;

    subheading(out, "Most active players")?;
    for (index, player) in stats.most_active.iter().enumerate() {
        writeln!(
            out,
            "  {}. {} - {} games",
            index + 1,
            player.name,
            player.total_games_played
        )?;
    }

    subheading(out, "Top scorers")?;
    for (index, player) in stats.top_scorers.iter().enumerate() {
        writeln!(
            out,
            "  {}. {} - {} ({})",
            index + 1,
            player.name,
            player.highest_score,
            player.rank
        )?;
    }
    Ok(())
}

pub fn leaderboard<W: Write>(out: &mut W, rows: &[LeaderboardRow]) -> io::Result<()> {
    heading(out, "🏆 Leaderboard")?;
    if rows.is_empty() {
        return no_data(out, "players");
    }
    writeln!(
        out,
        "{:<5} {:<22} {:>10} {:>10} {:>6}",
        "#", "Player", "Best", "Average", "Games"
    )?;
    for row in rows {
        let position = match row.position {
            1 => row.position.to_string().bright_yellow().bold(),
            2 | 3 => row.position.to_string().yellow(),
            _ => row.position.to_string().normal(),
        };
        writeln!(
            out,
            "{:<5} {:<22} {:>10} {:>10.2} {:>6}",
            position, row.name, row.highest_score, row.average_score, row.games_played
        )?;
    }
    Ok(())
}

pub fn session_statistics<W: Write>(
    out: &mut W,
    stats: Option<&SessionStatistics>,
) -> io::Result<()> {
    heading(out, "🎮 Game Session Statistics")?;
    let Some(stats) = stats else {
        return no_data(out, "session data");
    };
    writeln!(out, "Total sessions: {}", stats.total_sessions)?;
    writeln!(out, "Average score: {:.2}", stats.average_score)?;
    writeln!(out, "Highest score: {}", stats.max_score.to_string().green())?;
    writeln!(out, "Average level: {:.2}", stats.average_level)?;
    writeln!(out, "Highest level: {}", stats.max_level)?;
    writeln!(
        out,
        "Average duration: {}",
        format_duration(stats.average_duration)
    )?;
    writeln!(out, "Obstacles dodged: {}", stats.total_obstacles_dodged)?;
    writeln!(out, "Power-ups collected: {}", stats.total_power_ups_collected)?;
    writeln!(out, "New high scores: {}", stats.new_high_score_sessions)?;

    subheading(out, "Sessions by difficulty")?;
    counts(out, &stats.sessions_by_difficulty, "sessions")
}

pub fn obstacle_statistics<W: Write>(
    out: &mut W,
    stats: Option<&ObstacleStatistics>,
) -> io::Result<()> {
    heading(out, "☄️ Obstacle Statistics")?;
    let Some(stats) = stats else {
        return no_data(out, "obstacle data");
    };
    writeln!(out, "Total obstacles: {}", stats.total_obstacles)?;
    writeln!(out, "Average speed: {:.2}", stats.average_speed)?;
    writeln!(
        out,
        "Fastest: {} ({:.2})",
        stats.fastest.name.red(),
        stats.fastest.speed
    )?;
    writeln!(out, "Average damage: {:.2}", stats.average_damage)?;
    writeln!(
        out,
        "Most dangerous: {} ({} damage)",
        stats.most_dangerous.name.red(),
        stats.most_dangerous.damage_points
    )?;
    writeln!(
        out,
        "Active: {} | Inactive: {}",
        stats.active.to_string().green(),
        stats.inactive.to_string().dimmed()
    )?;

    subheading(out, "Obstacles by type")?;
    counts(out, &stats.obstacles_by_type, "obstacles")
}

pub fn power_up_statistics<W: Write>(
    out: &mut W,
    stats: Option<&PowerUpStatistics>,
) -> io::Result<()> {
    heading(out, "⭐ Power-up Statistics")?;
    let Some(stats) = stats else {
        return no_data(out, "power-up data");
    };
    writeln!(out, "Total power-ups: {}", stats.total_power_ups)?;
    writeln!(out, "Average points: {:.2}", stats.average_points)?;
    writeln!(
        out,
        "Most valuable: {} ({} pts)",
        stats.most_valuable.name.green(),
        stats.most_valuable.points_value
    )?;
    writeln!(
        out,
        "Average duration: {:.2}s",
        stats.average_duration_seconds
    )?;

    subheading(out, "Power-ups by rarity")?;
    counts(out, &stats.power_ups_by_rarity, "power-ups")?;
    subheading(out, "Power-ups by type")?;
    counts(out, &stats.power_ups_by_type, "power-ups")?;

    subheading(out, "Most valuable power-ups")?;
    for (index, power_up) in stats.top_valuable.iter().enumerate() {
        writeln!(
            out,
            "  {}. {} - {} pts ({})",
            index + 1,
            power_up.name,
            power_up.points_value,
            power_up.rarity
        )?;
    }
    Ok(())
}

pub fn advanced_analytics<W: Write>(
    out: &mut W,
    report: Option<&AdvancedAnalytics>,
) -> io::Result<()> {
    heading(out, "📊 Advanced Analytics")?;
    let Some(report) = report else {
        return no_data(out, "player and session data");
    };

    subheading(out, "Top performers (by average session score)")?;
    for (index, perf) in report.top_performers.iter().enumerate() {
        writeln!(
            out,
            "  {}. {} [{}] - {} sessions, avg {:.2}, best {}",
            index + 1,
            perf.name,
            perf.rank,
            perf.total_sessions,
            perf.average_score,
            perf.best_score
        )?;
    }

    subheading(out, "Score Distribution")?;
    for (bucket, count) in &report.score_distribution {
        writeln!(out, "  {:<10} {:>4} {}", bucket.label(), count, "█".repeat(*count))?;
    }

    subheading(out, "Level Progression")?;
    for level in &report.level_progression {
        writeln!(
            out,
            "  Level {:>2}: {} sessions, avg score {:.2}, avg duration {}",
            level.level,
            level.session_count,
            level.average_score,
            format_duration(level.average_duration)
        )?;
    }
    Ok(())
}

pub fn totals<W: Write>(out: &mut W, totals: &StoreTotals) -> io::Result<()> {
    writeln!(out, "  Players:       {}", totals.players)?;
    writeln!(out, "  Game sessions: {}", totals.sessions)?;
    writeln!(out, "  Obstacles:     {}", totals.obstacles)?;
    writeln!(out, "  Power-ups:     {}", totals.power_ups)
}

pub fn generation_summary<W: Write>(out: &mut W, summary: &GenerationSummary) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!(
            "✓ Generated {} players, {} obstacles, {} power-ups and {} game sessions",
            summary.players, summary.obstacles, summary.power_ups, summary.sessions
        )
        .green()
    )
}

pub fn restore_summary<W: Write>(out: &mut W, summary: &RestoreSummary) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!(
            "✓ Loaded {} players, {} game sessions, {} obstacles, {} power-ups",
            summary.players, summary.sessions, summary.obstacles, summary.power_ups
        )
        .green()
    )?;
    if summary.skipped_sessions > 0 {
        writeln!(
            out,
            "{}",
            format!(
                "⚠ Skipped {} sessions for players missing from the saved data",
                summary.skipped_sessions
            )
            .yellow()
        )?;
    }
    Ok(())
}
