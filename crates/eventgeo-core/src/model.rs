// crates/eventgeo-core/src/model.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// A WGS84 point in degrees. Ranges are not validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// One row of the reference table.
///
/// Many records share a city name across states; the identity of a record
/// for lookup purposes is `(city, state_code)` folded to lowercase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub city: String,
    pub state_code: String,
    pub state_name: String,
    pub lat: f64,
    pub lon: f64,
    /// Empty when the dataset has no `zip` column.
    pub zip: String,
}

impl PlaceRecord {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }
}

/// Canonical `(city, state)` key produced by the normalizer.
///
/// `state_code` is a two-letter code whenever the abbreviation table knew
/// the token; otherwise it is the token as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NormalizedPlace {
    pub city: String,
    pub state_code: String,
}

impl NormalizedPlace {
    pub fn new(city: impl Into<String>, state_code: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            state_code: state_code.into(),
        }
    }
}

impl fmt::Display for NormalizedPlace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.city, self.state_code)
    }
}

/// A sporting event as delivered by the ingestion step.
///
/// `latitude`/`longitude` were resolved upstream and are `None` when the
/// location could not be resolved.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub sport: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Event {
    /// The event position, if both halves are present and finite.
    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => {
                Some(Coordinate::new(lat, lon))
            }
            _ => None,
        }
    }
}

/// An event annotated with its distance (miles) from the search origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub event: Event,
    pub distance: f64,
}
