//! CLI entry point for the inhouse-rating crate
//!
//! Small operator tool over the library: score a single rank snapshot, or
//! read a lobby roster from a file and print the balanced teams.

use anyhow::Result;
use clap::{Parser, Subcommand};
use inhouse_rating::balance::{balance_teams, validate_roster};
use inhouse_rating::config::{AppConfig, MmrConfig};
use inhouse_rating::mmr::MmrCalculator;
use inhouse_rating::roster::RosterFile;
use inhouse_rating::types::{Division, QueueKind, RankSnapshot, Tier};
use std::path::PathBuf;
use tracing::{info, warn};

/// Inhouse Rating - MMR scoring and snake-draft team balancing
#[derive(Parser)]
#[command(
    name = "inhouse-rating",
    version,
    about = "MMR scoring and snake-draft team balancing for in-house League matches",
    long_about = "Computes skill scores from ranked tier/division/LP snapshots using a \
                 confidence-weighted winrate adjustment, and splits scored player pools \
                 into two near-equal teams with deterministic snake seeding."
)]
struct Args {
    /// Scoring policy file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to scoring policy overrides (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the skill score for one rank snapshot
    Score {
        /// Ranked tier (IRON..CHALLENGER; anything else counts as unranked)
        #[arg(long, default_value = "UNRANKED")]
        tier: String,

        /// Division within the tier (IV, III, II, I)
        #[arg(long)]
        division: Option<String>,

        /// League points within the division
        #[arg(long, default_value_t = 0)]
        lp: u32,

        /// Ranked wins on record
        #[arg(long, default_value_t = 0)]
        wins: u32,

        /// Ranked losses on record
        #[arg(long, default_value_t = 0)]
        losses: u32,

        /// Queue the snapshot came from (solo or flex)
        #[arg(long, default_value = "solo")]
        queue: String,
    },

    /// Balance a roster file into two teams
    Balance {
        /// Roster file (JSON format)
        #[arg(value_name = "ROSTER")]
        roster: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut app_config = AppConfig::from_env()?;
    if let Some(level) = args.log_level {
        app_config.log_level = level;
        inhouse_rating::config::validate_config(&app_config)?;
    }
    init_logging(&app_config.log_level)?;

    let mmr_config = match &args.config {
        Some(path) => MmrConfig::from_toml_file(path)?,
        None => MmrConfig::default(),
    };
    let calculator = MmrCalculator::new(mmr_config)?;

    match args.command {
        Command::Score {
            tier,
            division,
            lp,
            wins,
            losses,
            queue,
        } => {
            let snapshot = RankSnapshot::new(
                Tier::from_name(&tier),
                division.as_deref().and_then(Division::from_name),
                lp,
                wins,
                losses,
                QueueKind::from_queue_type(&queue),
            );
            print_score(&calculator, &snapshot);
        }
        Command::Balance { roster } => {
            let roster = RosterFile::from_json_file(&roster)?;
            let players = roster.to_scored(&calculator);
            validate_roster(&players)?;
            if players.len() != app_config.pool_size {
                warn!(
                    pool = players.len(),
                    expected = app_config.pool_size,
                    "roster is not a full lobby, balancing anyway"
                );
            }
            info!(pool = players.len(), "balancing roster");

            let teams = balance_teams(players);
            println!("Blue ({} total):", teams.blue_total());
            for player in &teams.blue {
                println!("  {:>5}  {}", player.score, player.name);
            }
            println!("Red ({} total):", teams.red_total());
            for player in &teams.red {
                println!("  {:>5}  {}", player.score, player.name);
            }
            println!("Gap: {}", teams.score_gap());
        }
    }

    Ok(())
}

fn print_score(calculator: &MmrCalculator, snapshot: &RankSnapshot) {
    let breakdown = calculator.breakdown(snapshot);
    println!(
        "{} {} {} LP, {}W/{}L ({})",
        snapshot.tier,
        snapshot
            .division
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string()),
        snapshot.league_points,
        snapshot.wins,
        snapshot.losses,
        snapshot.queue
    );
    println!("  base:     {}", breakdown.raw_base);
    println!("  weighted: {:.1}", breakdown.weighted_base);
    match (breakdown.winrate_delta, breakdown.k_factor) {
        (Some(delta), Some(k)) => {
            println!("  winrate:  {:+.1} x k={}", delta, k);
        }
        _ => println!("  winrate:  no games on record"),
    }
    println!("  score:    {}", breakdown.score);
}

fn init_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("inhouse_rating={}", log_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    Ok(())
}
