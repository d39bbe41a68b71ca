use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tennis_team_scheduler::{
    config::{MalformedRowPolicy, SchedulerConfig},
    parse_csv::load_matches,
    scheduler::{get_teams, opponent_report, suggest_next_opponents},
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Suggest unplayed opponents from a CSV of completed matches", long_about = None)]
struct Cli {
    /// Path to the matches CSV (overrides MATCHES_CSV_PATH)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Skip rows that cannot be parsed instead of aborting
    #[arg(long, global = true)]
    skip_malformed: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every team that appears in the matches file
    Teams,
    /// List the teams a given team has not played yet
    Suggest {
        /// Team identifier, matched exactly
        team: String,
    },
    /// Show played and unplayed opponents for every team
    Report {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = SchedulerConfig::from_env();
    if let Some(file) = cli.file {
        config.loader.path = file;
    }
    if cli.skip_malformed {
        config.loader.malformed_rows = MalformedRowPolicy::Skip;
    }

    let matches = load_matches(&config.loader.path, &config.loader)
        .with_context(|| format!("Failed to load matches from {:?}", config.loader.path))?;

    match cli.command {
        Commands::Teams => {
            let mut teams: Vec<_> = get_teams(&matches).into_iter().collect();
            teams.sort_unstable();
            info!("Found {} teams", teams.len());
            for team in teams {
                println!("{}", team);
            }
        }
        Commands::Suggest { team } => {
            let opponents = suggest_next_opponents(&team, &matches);
            info!("{} has {} unplayed opponents", team, opponents.len());
            for opponent in opponents {
                println!("{}", opponent);
            }
        }
        Commands::Report { json } => {
            let report = opponent_report(&matches);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for schedule in report {
                    println!("{}", schedule.display());
                }
            }
        }
    }

    Ok(())
}
