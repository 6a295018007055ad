//! eventgeo — Command-line interface for eventgeo-core
//!
//! Resolves places from the bundled US reference table and ranks
//! sporting events by distance.
//!
//! Usage examples
//! --------------
//!
//! - Show reference table stats
//!   $ eventgeo stats
//!
//! - Resolve a ZIP or a city
//!   $ eventgeo zip 90210
//!   $ eventgeo place "Los Angeles" California
//!
//! - Check how a scraped location string is read
//!   $ eventgeo normalize "Hinkle Fieldhouse (Indianapolis, Ind.)"
//!
//! - Attach coordinates to scraped events, then search them
//!   $ eventgeo enrich --events scraped.json --output events.json
//!   $ eventgeo search 84602 --events events.json --radius 150 --sport Football
//!
//! Set `RUST_LOG=debug` to see which event locations failed to resolve.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use eventgeo_core::ingest::{enrich, load_events, RawEvent};
use eventgeo_core::normalize::normalize;
use eventgeo_core::search::{format_distance, search, SearchOutcome, SearchQuery};
use eventgeo_core::{Event, PlaceLookup, ReferenceIndex, SportFilter};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = CliArgs::parse();

    let input_path = args.input.unwrap_or_else(|| {
        ReferenceIndex::default_data_dir().join(ReferenceIndex::default_dataset_filename())
    });
    let index = ReferenceIndex::load_from_path(&input_path)
        .with_context(|| format!("loading reference table {}", input_path.display()))?;

    match args.command {
        Commands::Stats => {
            let stats = index.stats();
            println!("Reference table statistics:");
            println!("  Records: {}", stats.records);
            println!("  Place keys: {}", stats.places);
            println!("  ZIP codes: {}", stats.zips);
        }

        Commands::Zip { zip } => match index.find_zip(zip.trim()) {
            Some(r) => println!("{} — {}, {} ({}, {})", zip, r.city, r.state_code, r.lat, r.lon),
            None => eprintln!("No coordinates for ZIP code: {zip}"),
        },

        Commands::Place { city, state } => match index.find_city_state(&city, &state) {
            Some(r) => println!("{}, {} — {} ({}, {})", r.city, r.state_code, r.zip, r.lat, r.lon),
            None => eprintln!("No coordinates for: {city}, {state}"),
        },

        Commands::Normalize { raw } => match normalize(&raw) {
            Some(place) => {
                let status = if index.resolve_city_state(&place.city, &place.state_code).is_some() {
                    "resolved"
                } else {
                    "not in reference table"
                };
                println!("{place} ({status})");
            }
            None => eprintln!("Could not normalize: {raw}"),
        },

        Commands::Enrich { events, output } => {
            let raw: Vec<RawEvent> = load_events(&events).with_context(|| format!("reading {}", events.display()))?;
            let enriched = enrich(raw, &index);
            match output {
                Some(path) => {
                    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
                    let mut w = BufWriter::new(file);
                    serde_json::to_writer_pretty(&mut w, &enriched)?;
                    w.flush()?;
                    eprintln!("Events saved to {}", path.display());
                }
                None => {
                    let stdout = io::stdout();
                    let mut w = stdout.lock();
                    serde_json::to_writer_pretty(&mut w, &enriched)?;
                    writeln!(w)?;
                }
            }
        }

        Commands::Search {
            query,
            events,
            radius,
            sport,
            json,
        } => {
            let query = SearchQuery::parse(&query, Some(radius), Some(&sport))?;
            let events: Vec<Event> = load_events(&events).with_context(|| format!("reading {}", events.display()))?;

            match search(&index, &query, &events) {
                SearchOutcome::OriginNotFound => {
                    eprintln!("Sorry, we don't have location data for: {}", query.origin);
                }
                SearchOutcome::Matches(matches) if json => {
                    println!("{}", serde_json::to_string_pretty(&matches)?);
                }
                SearchOutcome::Matches(matches) if matches.is_empty() => {
                    let what = match &query.sport {
                        SportFilter::All => "events".to_string(),
                        SportFilter::Sport(s) => format!("{s} events"),
                    };
                    println!("No {what} within {} miles of {}", query.radius_miles, query.origin);
                }
                SearchOutcome::Matches(matches) => {
                    for m in matches {
                        let e = &m.event;
                        println!("{} — {}", e.title, e.sport);
                        println!("  {} {}", e.date, e.time);
                        if !e.venue.is_empty() {
                            println!("  Venue: {}", e.venue);
                        }
                        println!("  Location: {}", e.location);
                        println!("  Distance: {} away", format_distance(m.distance));
                    }
                }
            }
        }
    }

    Ok(())
}
