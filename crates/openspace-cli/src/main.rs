//! OpenSpace organizer CLI.
//!
//! Loads the room configuration and an optional roster, runs the bulk
//! seating pass (with the lonely-table fixup), exports the plan, and then
//! hands over to the interactive menu.

mod config;
mod files;
mod menu;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use openspace_logic::Openspace;

use crate::config::RoomConfig;
use crate::files::FileError;

/// Seat a roster of colleagues at tables, avoiding lonely seatings.
#[derive(Debug, Parser)]
#[command(name = "openspace", version)]
struct Cli {
    /// Path to the JSON room configuration.
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// CSV roster to organize on startup, one name per row.
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Where the seating plan is written on save.
    #[arg(long, default_value = "output.csv")]
    output: PathBuf,

    /// Seed for the shuffle; omit for a random arrangement.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "openspace=info".into()),
        )
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), FileError> {
    let config = if cli.config.exists() {
        RoomConfig::load(&cli.config)?
    } else {
        tracing::warn!(
            "configuration {} not found, using defaults",
            cli.config.display()
        );
        RoomConfig::default()
    };

    let problems = config.validate();
    if !problems.is_empty() {
        return Err(FileError::InvalidConfig(problems.join("; ")));
    }
    tracing::info!(
        "room: {} tables × {} seats ({} total)",
        config.tables,
        config.seats_per_table,
        config.total_seats()
    );

    let mut room = Openspace::new(config.tables, config.seats_per_table);

    if let Some(roster_path) = &cli.roster {
        let names = files::load_roster(roster_path)?;
        tracing::info!("loaded {} names from {}", names.len(), roster_path.display());

        let mut rng: StdRng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        room.organize(&names, &mut rng);

        menu::print_room(&room);
        menu::print_organize_summary(&room);

        if room.is_there_lonely_person() {
            println!(">>> Lonely persons detected, redistributing...");
            let moves = room.eliminate_lonely_tables();
            for mv in &moves {
                println!(
                    "{} was moved from table {} to table {}.",
                    mv.name, mv.from_table, mv.to_table
                );
            }
            if !moves.is_empty() {
                menu::print_room(&room);
            }
        }

        files::store_plan(&room, &cli.output)?;
        tracing::info!("seating plan saved to {}", cli.output.display());
    }

    menu::run_menu(&mut room, &cli.output)
}
