//! Monte Carlo simulator CLI - plays seeded games in memory with a fixed
//! strategy and records how far each one gets.

mod metrics;
mod output;
mod simulator;
mod strategy;
mod types;

use std::time::{Duration, Instant};

use clap::Parser;
use metrics::{build_game_metrics, RunConfig};
use monte_carlo::{derive_strategy_seed, random_game_number, GameConfig};
use output::OutputWriter;
use simulator::{GameResult, Simulator};
use strategy::create_strategy;
use tracing::{info, warn};
use types::{MetricsLevel, OutputFormat, StrategyKind};

#[derive(Parser)]
#[command(name = "monte-carlo-sim")]
#[command(about = "Fast in-memory Monte Carlo solitaire simulator")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Move strategy used for every game
    #[arg(long, default_value = "first-hint")]
    strategy: StrategyKind,

    /// Base seed; game k is dealt with seed + k - 1
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i64>,

    /// Tableau rows (defaults to MONTE_CARLO_ROWS or 5)
    #[arg(long)]
    rows: Option<usize>,

    /// Tableau columns (defaults to MONTE_CARLO_COLS or 5)
    #[arg(long)]
    cols: Option<usize>,

    /// Give up on a game after this many strategy steps
    #[arg(long, default_value = "10000")]
    max_steps: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress output files
    #[arg(long)]
    compress: bool,

    /// Metrics detail level
    #[arg(long, default_value = "detailed")]
    metrics_level: MetricsLevel,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only show warnings/errors
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = resolve_config(&args)?;

    if args.show_output {
        info!("Starting Monte Carlo simulator");
        info!(
            "Configuration: {} games, {}x{} tableau, strategy={}",
            args.games,
            config.rows,
            config.cols,
            args.strategy.name()
        );
    }

    let mut output_writer =
        OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;
    if args.show_output {
        info!("Output directory: {}", args.output_dir);
    }

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;
    let mut seed_source = rand::rng();

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let game_seed = match args.seed {
            Some(base) => base.wrapping_add(i64::from(game_num) - 1),
            None => random_game_number(&mut seed_source),
        };

        match run_game(&config, game_seed, &args) {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let run_config = RunConfig {
                    strategy: args.strategy,
                    rows: config.rows,
                    cols: config.cols,
                    total_games: args.games,
                    max_steps: args.max_steps,
                };
                let metrics = build_game_metrics(
                    game_num,
                    run_config,
                    &result,
                    &args.metrics_level,
                    duration_ms,
                );

                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!("Failed to write metrics for game {}: {}", game_num, e);
                }

                if args.verbose {
                    info!(
                        "Game {} (seed {}) completed: score={}, stop={:?}",
                        game_num, game_seed, result.score, result.stop_reason
                    );
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Game {} failed: {}", game_num, e);
            }
        }
    }

    let elapsed = start.elapsed();

    // Get output file paths before finishing
    let (detail_path, csv_path) = output_writer.output_paths();
    let detail_path = detail_path.cloned();
    let csv_path = csv_path.cloned();

    output_writer.finish()?;

    if args.show_output {
        if let Some(path) = detail_path {
            info!("Detailed results written to: {}", path.display());
        }
        if let Some(path) = csv_path {
            info!("Summary CSV written to: {}", path.display());
        }

        print_summary(&results, errors, elapsed, args.games);
    }

    Ok(())
}

/// CLI dimensions override the environment, which overrides the 5x5 default.
fn resolve_config(args: &Args) -> Result<GameConfig, monte_carlo::DomainError> {
    let base = GameConfig::from_env()?;
    GameConfig::new(
        args.rows.unwrap_or(base.rows),
        args.cols.unwrap_or(base.cols),
    )
}

fn run_game(
    config: &GameConfig,
    game_seed: i64,
    args: &Args,
) -> Result<GameResult, Box<dyn std::error::Error>> {
    // Strategy randomness follows the game seed so every record can be replayed
    let strategy = create_strategy(args.strategy, Some(derive_strategy_seed(game_seed)));
    let simulator = Simulator::new(config, game_seed, args.max_steps)?;
    simulator
        .simulate_game(strategy.as_ref())
        .map_err(|e| e.into())
}

fn print_summary(results: &[GameResult], errors: u32, elapsed: Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);

    if results.is_empty() {
        return;
    }
    println!("Average time per game: {:?}", elapsed / results.len() as u32);

    let games = results.len() as f64;
    let wins = results.iter().filter(|r| r.won).count();
    let total_score: usize = results.iter().map(|r| r.score).sum();
    let best = results.iter().map(|r| r.score).max().unwrap_or(0);
    let stuck = results
        .iter()
        .filter(|r| r.stop_reason == types::StopReason::Stuck)
        .count();

    println!("\n=== Results ===");
    println!("Wins: {} ({:.1}%)", wins, wins as f64 / games * 100.0);
    println!("Average score: {:.1}", total_score as f64 / games);
    println!("Best score: {}", best);
    println!("Stuck games: {}", stuck);
}
