use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for eventgeo
#[derive(Debug, Parser)]
#[command(
    name = "eventgeo",
    version,
    about = "Find sporting events near a ZIP code or \"City, State\""
)]
pub struct CliArgs {
    /// Path to the reference CSV, plain or .gz (default: uszips.csv shipped with eventgeo-core)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the reference table
    Stats,

    /// Lookup coordinates for a 5-digit ZIP code
    Zip {
        /// ZIP code (e.g. 90210)
        zip: String,
    },

    /// Lookup coordinates for a city and state
    Place {
        /// City name (case-insensitive)
        city: String,
        /// Two-letter state code or full state name
        state: String,
    },

    /// Normalize a scraped location string to "City, ST"
    Normalize {
        /// Raw text, e.g. "Hinkle Fieldhouse (Indianapolis, Ind.)"
        raw: String,
    },

    /// Resolve coordinates for scraped events
    Enrich {
        /// JSON array of scraped events (title, sport, date, time, location)
        #[arg(short = 'e', long = "events")]
        events: PathBuf,

        /// Where to write the enriched JSON (default: stdout)
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
    },

    /// Search events near a ZIP code or "City, State"
    Search {
        /// ZIP code or "City, State"
        query: String,

        /// JSON array of events with latitude/longitude
        #[arg(short = 'e', long = "events")]
        events: PathBuf,

        /// Search radius in miles, clamped to 1..=500
        #[arg(short = 'r', long = "radius", default_value_t = 50.0)]
        radius: f64,

        /// Only show this sport ("all" for every sport)
        #[arg(short = 's', long = "sport", default_value = "all")]
        sport: String,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn search_defaults() {
        let args = CliArgs::parse_from(["eventgeo", "search", "Boise, Idaho", "--events", "events.json"]);
        match args.command {
            Commands::Search {
                query,
                radius,
                sport,
                json,
                ..
            } => {
                assert_eq!(query, "Boise, Idaho");
                assert_eq!(radius, 50.0);
                assert_eq!(sport, "all");
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn input_is_global() {
        let args = CliArgs::parse_from(["eventgeo", "zip", "90210", "--input", "/tmp/uszips.csv.gz"]);
        assert_eq!(args.input, Some(PathBuf::from("/tmp/uszips.csv.gz")));
    }
}
