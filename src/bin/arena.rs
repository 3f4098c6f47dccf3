use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_four_minimax::ai::Difficulty;
use connect_four_minimax::arena::{run_series, SeriesSummary};
use connect_four_minimax::config::AppConfig;

/// Play a series of Connect Four games between two engine presets.
#[derive(Parser)]
#[command(name = "arena", about = "Pit Connect Four engine presets against each other")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override number of games
    #[arg(long)]
    games: Option<usize>,

    /// Override the home preset (Red in the first game)
    #[arg(long, value_enum)]
    red: Option<Difficulty>,

    /// Override the away preset (Yellow in the first game)
    #[arg(long, value_enum)]
    yellow: Option<Difficulty>,

    /// Override the base random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// Print a config file with all default values and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    if let Some(games) = cli.games {
        config.arena.games = games;
    }
    if let Some(red) = cli.red {
        config.arena.red = red;
    }
    if let Some(yellow) = cli.yellow {
        config.arena.yellow = yellow;
    }
    if cli.seed.is_some() {
        config.arena.seed = cli.seed;
    }
    config.validate().context("validating overrides")?;

    let summary = run_series(&config.arena, &config.search).context("running series")?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("serializing summary")?
        );
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn print_summary(summary: &SeriesSummary) {
    let stats = &summary.stats;
    println!(
        "{} vs {} over {} games",
        summary.home.label(),
        summary.away.label(),
        stats.games
    );
    println!(
        "  {:<10} {:>4} wins ({:.0}%)",
        summary.home.label(),
        stats.home_wins,
        stats.home_win_rate() * 100.0
    );
    println!(
        "  {:<10} {:>4} wins ({:.0}%)",
        summary.away.label(),
        stats.away_wins,
        stats.away_win_rate() * 100.0
    );
    println!(
        "  {:<10} {:>4}      ({:.0}%)",
        "draws",
        stats.draws,
        stats.draw_rate() * 100.0
    );
    println!(
        "  average length {:.1} moves, {:.0} µs per move",
        stats.average_game_length(),
        stats.average_think_micros()
    );
}
