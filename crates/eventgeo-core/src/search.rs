// crates/eventgeo-core/src/search.rs

//! Search requests from a UI or CLI and their outcomes.

use crate::error::{GeoError, Result};
use crate::matching::match_events;
use crate::model::{Coordinate, Event, MatchResult, NormalizedPlace};
use crate::normalize::normalize;
use crate::text::is_zip5;
use crate::traits::PlaceLookup;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_RADIUS_MILES: f64 = 50.0;
pub const MIN_RADIUS_MILES: f64 = 1.0;
pub const MAX_RADIUS_MILES: f64 = 500.0;

/// Sport restriction for a search. `"all"` disables it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SportFilter {
    #[default]
    All,
    Sport(String),
}

impl SportFilter {
    /// Exact, case-sensitive comparison against the event's sport.
    pub fn accepts(&self, sport: &str) -> bool {
        match self {
            SportFilter::All => true,
            SportFilter::Sport(s) => s == sport,
        }
    }
}

impl FromStr for SportFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        Ok(if s.is_empty() || s == "all" {
            SportFilter::All
        } else {
            SportFilter::Sport(s.to_owned())
        })
    }
}

impl fmt::Display for SportFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SportFilter::All => f.write_str("all"),
            SportFilter::Sport(s) => f.write_str(s),
        }
    }
}

/// Where the user wants to search from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Origin {
    Zip(String),
    Place(NormalizedPlace),
}

impl Origin {
    pub fn resolve<L: PlaceLookup + ?Sized>(&self, index: &L) -> Option<Coordinate> {
        match self {
            Origin::Zip(zip) => index.resolve_zip(zip),
            Origin::Place(p) => index.resolve_city_state(&p.city, &p.state_code),
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Zip(zip) => f.write_str(zip),
            Origin::Place(p) => write!(f, "{p}"),
        }
    }
}

/// A validated search request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub origin: Origin,
    pub radius_miles: f64,
    pub sport: SportFilter,
}

impl SearchQuery {
    /// Validates user input.
    ///
    /// Five digits are a ZIP code; any other all-digit input is rejected.
    /// Anything else goes through the location normalizer, so
    /// `"Boise, Idaho"` and `"Boise, ID"` are the same query. The radius
    /// defaults to 50 miles and is clamped to 1..=500.
    ///
    /// ```rust
    /// use eventgeo_core::search::{Origin, SearchQuery};
    ///
    /// let q = SearchQuery::parse(" 90210 ", None, None).unwrap();
    /// assert_eq!(q.origin, Origin::Zip("90210".into()));
    /// assert_eq!(q.radius_miles, 50.0);
    ///
    /// let q = SearchQuery::parse("Seattle, Wash.", Some(9000.0), Some("Soccer")).unwrap();
    /// assert_eq!(q.origin.to_string(), "Seattle, WA");
    /// assert_eq!(q.radius_miles, 500.0);
    ///
    /// assert!(SearchQuery::parse("1234", None, None).is_err());
    /// ```
    pub fn parse(input: &str, radius_miles: Option<f64>, sport: Option<&str>) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(GeoError::InvalidQuery("enter a ZIP code or \"City, State\"".into()));
        }

        let origin = if input.bytes().all(|b| b.is_ascii_digit()) {
            if !is_zip5(input) {
                return Err(GeoError::InvalidQuery("enter a valid 5-digit ZIP code".into()));
            }
            Origin::Zip(input.to_owned())
        } else {
            let place = normalize(input).ok_or_else(|| {
                GeoError::InvalidQuery(format!("could not read a city and state from '{input}'"))
            })?;
            Origin::Place(place)
        };

        let sport = match sport {
            Some(s) => s.parse().unwrap_or_default(),
            None => SportFilter::All,
        };

        Ok(Self {
            origin,
            radius_miles: clamp_radius(radius_miles),
            sport,
        })
    }
}

/// Applies the default radius and clamps to the supported range.
pub fn clamp_radius(radius_miles: Option<f64>) -> f64 {
    match radius_miles {
        Some(r) if r.is_nan() => DEFAULT_RADIUS_MILES,
        Some(r) => r.clamp(MIN_RADIUS_MILES, MAX_RADIUS_MILES),
        None => DEFAULT_RADIUS_MILES,
    }
}

/// Result of a search. Keeps "unknown origin" apart from "nothing nearby".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SearchOutcome {
    OriginNotFound,
    Matches(Vec<MatchResult>),
}

impl SearchOutcome {
    pub fn matches(&self) -> &[MatchResult] {
        match self {
            SearchOutcome::OriginNotFound => &[],
            SearchOutcome::Matches(m) => m,
        }
    }
}

/// Resolves the query origin and ranks `events` around it.
pub fn search<L: PlaceLookup + ?Sized>(index: &L, query: &SearchQuery, events: &[Event]) -> SearchOutcome {
    let Some(origin) = query.origin.resolve(index) else {
        tracing::debug!(origin = %query.origin, "search origin not found");
        return SearchOutcome::OriginNotFound;
    };

    let matches = match_events(origin, events, query.radius_miles, &query.sport);
    tracing::debug!(origin = %query.origin, radius = query.radius_miles, sport = %query.sport, hits = matches.len(), "search complete");
    SearchOutcome::Matches(matches)
}

/// Human-readable distance: feet under a mile, otherwise tenths of miles.
///
/// ```rust
/// use eventgeo_core::search::format_distance;
///
/// assert_eq!(format_distance(0.5), "2640 feet");
/// assert_eq!(format_distance(12.345), "12.3 miles");
/// ```
pub fn format_distance(miles: f64) -> String {
    if miles < 1.0 {
        format!("{:.0} feet", miles * 5280.0)
    } else {
        format!("{miles:.1} miles")
    }
}
