// crates/eventgeo-core/src/lib.rs

//! # eventgeo-core
//!
//! Finds sporting events near a ZIP code or a "City, State" string.
//!
//! The pipeline is:
//!
//! 1. [`ReferenceIndex`] parses a US places dataset (`uszips.csv`) once.
//! 2. [`normalize::normalize`] turns scraped location text such as
//!    `"Hinkle Fieldhouse (Indianapolis, Ind.)"` into a [`NormalizedPlace`].
//! 3. [`PlaceLookup`] resolves a place or ZIP to a [`Coordinate`].
//! 4. [`matching::match_events`] ranks events around that origin.
//!
//! ```rust
//! use eventgeo_core::{PlaceLookup, ReferenceIndex};
//!
//! let csv = "zip,lat,lng,city,state_id,state_name\n\
//!            83702,43.63,-116.20,Boise,ID,Idaho\n";
//! let index = ReferenceIndex::from_csv(csv);
//!
//! let place = eventgeo_core::normalize::normalize("Boise State Esports Arena").unwrap();
//! let coord = index.resolve_city_state(&place.city, &place.state_code).unwrap();
//! assert_eq!(coord, index.resolve_zip("83702").unwrap());
//! ```

pub mod distance;
pub mod error;
pub mod index;
pub mod ingest;
pub mod loader;
pub mod matching;
pub mod model;
pub mod normalize;
pub mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::error::{GeoError, Result};
pub use crate::index::{IndexStats, ReferenceIndex};
pub use crate::model::{Coordinate, Event, MatchResult, NormalizedPlace, PlaceRecord};
pub use crate::search::{SearchOutcome, SearchQuery, SportFilter};
pub use crate::traits::PlaceLookup;
