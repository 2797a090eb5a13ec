//! Jidle - CLI
//!
//! Daily country-guessing game: guess the country in six tries, with
//! distance and direction hints after every miss.

use anyhow::Result;
use clap::{Parser, Subcommand};
use jidle::{
    catalog::Catalog,
    commands::{preview_date, run_daily, run_practice},
    output::{print_countries, print_preview},
};

#[derive(Parser)]
#[command(
    name = "jidle",
    about = "Daily country-guessing game with distance and direction hints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Catalog: path to a GeoJSON country file (default: embedded dataset)
    #[arg(short = 'd', long, global = true)]
    data: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play today's puzzle (default)
    Play,

    /// Practice against random countries
    Practice,

    /// Show which country a date selects (spoils the answer)
    Preview {
        /// Date string, e.g. "Wed Jan 01 2025" (default: today)
        date: Option<String>,
    },

    /// List all playable countries
    Countries,
}

/// Load the catalog from the -d flag or fall back to the embedded dataset
fn load_catalog(data: Option<&str>) -> Result<Catalog> {
    let catalog = match data {
        Some(path) => Catalog::load_from_file(path)?,
        None => Catalog::embedded()?,
    };
    Ok(catalog)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let catalog = load_catalog(cli.data.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_daily(&catalog).map_err(|e| anyhow::anyhow!(e)),
        Commands::Practice => run_practice(&catalog).map_err(|e| anyhow::anyhow!(e)),
        Commands::Preview { date } => {
            let result = preview_date(&catalog, date);
            print_preview(&result);
            Ok(())
        }
        Commands::Countries => {
            print_countries(&catalog);
            Ok(())
        }
    }
}
