// crates/eventgeo-core/src/ingest.rs

//! Turns scraper output into [`Event`]s with resolved coordinates.
//!
//! Uses the same normalizer and resolver pair as the search side, so an
//! event's stored position is exactly what a search for its location
//! string would resolve to.

use crate::error::Result;
use crate::loader::open_stream;
use crate::model::Event;
use crate::normalize::{normalize, parenthetical};
use crate::traits::PlaceLookup;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// One scraped listing, before location resolution.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawEvent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub sport: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
}

/// Separates the place part of a listing from the venue part.
///
/// The place is the text before the first `/`, or the parenthesized part
/// of it when there is one. The venue is the second `/` segment, else the
/// text in front of the parentheses.
///
/// ```rust
/// use eventgeo_core::ingest::split_venue;
///
/// assert_eq!(
///     split_venue("Lawrence, Kansas / Rim Rock Farm"),
///     ("Lawrence, Kansas".to_string(), "Rim Rock Farm".to_string())
/// );
/// assert_eq!(
///     split_venue("Hinkle Fieldhouse (Indianapolis, Ind.)"),
///     ("Indianapolis, Ind.".to_string(), "Hinkle Fieldhouse".to_string())
/// );
/// ```
pub fn split_venue(raw: &str) -> (String, String) {
    let mut segments = raw.trim().split('/');
    let head = segments.next().unwrap_or("").trim();
    let slash_venue = segments.next().map(str::trim).unwrap_or("");

    if let (Some(inner), Some(open)) = (parenthetical(head), head.find('(')) {
        let prefix = head[..open].trim();
        let venue = if prefix.is_empty() { slash_venue } else { prefix };
        return (inner.to_owned(), venue.to_owned());
    }

    (head.to_owned(), slash_venue.to_owned())
}

/// Resolves one raw listing. Unresolvable locations leave the coordinates
/// empty; they never fail the batch.
pub fn enrich_one<L: PlaceLookup + ?Sized>(raw: RawEvent, index: &L) -> Event {
    let (location, venue) = split_venue(&raw.location);

    let coord = match normalize(&raw.location) {
        Some(place) => {
            let coord = index.resolve_city_state(&place.city, &place.state_code);
            if coord.is_none() {
                tracing::debug!(normalized = %place, original = %raw.location, "no coordinates for location");
            }
            coord
        }
        None => {
            tracing::debug!(original = %raw.location, "location could not be normalized");
            None
        }
    };

    Event {
        id: None,
        title: raw.title,
        sport: raw.sport,
        date: raw.date,
        time: raw.time,
        venue,
        location,
        latitude: coord.map(|c| c.lat),
        longitude: coord.map(|c| c.lon),
    }
}

/// Reads a JSON array of events (raw or enriched) from any reader.
pub fn read_events<T: DeserializeOwned>(reader: impl Read) -> Result<Vec<T>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Reads a JSON event file; `*.gz` files are decompressed like the
/// reference table.
pub fn load_events<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>> {
    read_events(open_stream(path.as_ref())?)
}

/// Resolves a batch of listings, preserving order.
pub fn enrich<L: PlaceLookup + ?Sized>(raw: Vec<RawEvent>, index: &L) -> Vec<Event> {
    let events: Vec<Event> = raw.into_iter().map(|r| enrich_one(r, index)).collect();
    let resolved = events.iter().filter(|e| e.coordinate().is_some()).count();
    tracing::info!(total = events.len(), resolved, "enriched events");
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeoError;
    use crate::index::ReferenceIndex;

    fn index() -> ReferenceIndex {
        ReferenceIndex::from_csv(
            "city,state_id,state_name,lat,lng\n\
             Lawrence,KS,Kansas,38.97,-95.24\n\
             Boise,ID,Idaho,43.61,-116.20\n\
             Indianapolis,IN,Indiana,39.77,-86.16\n",
        )
    }

    fn raw(location: &str) -> RawEvent {
        RawEvent {
            title: "BYU at Someone".into(),
            sport: "Cross Country".into(),
            date: "Oct 17".into(),
            time: "10:00 AM".into(),
            location: location.into(),
        }
    }

    #[test]
    fn split_venue_variants() {
        assert_eq!(split_venue("Provo, Utah"), ("Provo, Utah".into(), String::new()));
        assert_eq!(split_venue("  ExtraMile Arena "), ("ExtraMile Arena".into(), String::new()));
        assert_eq!(split_venue("Boston, Mass. / Conte Forum"), ("Boston, Mass.".into(), "Conte Forum".into()));
        assert_eq!(split_venue("Provo, Utah / South Field / Pitch 2"), ("Provo, Utah".into(), "South Field".into()));
    }

    #[test]
    fn parenthetical_before_slash_wins() {
        assert_eq!(
            split_venue("Hinkle Fieldhouse (Indianapolis, Ind.) / Track"),
            ("Indianapolis, Ind.".into(), "Hinkle Fieldhouse".into())
        );
        assert_eq!(split_venue("(Logan, Utah) / Maverik Stadium"), ("Logan, Utah".into(), "Maverik Stadium".into()));
    }

    #[test]
    fn read_events_parses_raw_and_enriched() {
        let raw: Vec<RawEvent> = read_events(r#"[{"title":"A","sport":"Golf","location":"Provo, Utah"}]"#.as_bytes()).unwrap();
        assert_eq!(raw[0].location, "Provo, Utah");

        let events: Vec<Event> = read_events(r#"[{"title":"B","latitude":null,"longitude":-1.0}]"#.as_bytes()).unwrap();
        assert!(events[0].coordinate().is_none());

        let err = read_events::<Event>("{not json".as_bytes()).unwrap_err();
        assert!(matches!(err, GeoError::Json(_)));
    }

    #[test]
    fn load_events_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(&path, r#"[{"title":"C","sport":"Soccer","location":"ExtraMile Arena"}]"#).unwrap();
        let raw: Vec<RawEvent> = load_events(&path).unwrap();
        let events = enrich(raw, &index());
        assert_eq!(events[0].latitude, Some(43.61));

        assert!(matches!(load_events::<Event>(dir.path().join("missing.json")), Err(GeoError::NotFound(_))));
    }

    #[test]
    fn slash_location_gets_coordinates_and_venue() {
        let e = enrich_one(raw("Lawrence, Kansas / Rim Rock Farm"), &index());
        assert_eq!(e.location, "Lawrence, Kansas");
        assert_eq!(e.venue, "Rim Rock Farm");
        assert_eq!(e.latitude, Some(38.97));
        assert_eq!(e.longitude, Some(-95.24));
        assert_eq!(e.sport, "Cross Country");
    }

    #[test]
    fn venue_override_resolves() {
        let e = enrich_one(raw("ExtraMile Arena"), &index());
        assert_eq!(e.latitude, Some(43.61));
    }

    #[test]
    fn unresolvable_locations_keep_null_coordinates() {
        let events = enrich(vec![raw("TBA"), raw("Lake Nona, Fla."), raw("Hinkle Fieldhouse (Indianapolis, Ind.)")], &index());
        assert_eq!(events.len(), 3);
        assert!(events[0].coordinate().is_none());
        assert!(events[1].coordinate().is_none());
        assert_eq!(events[2].latitude, Some(39.77));
        assert_eq!(events[2].venue, "Hinkle Fieldhouse");
    }
}
