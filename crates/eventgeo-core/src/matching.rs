// crates/eventgeo-core/src/matching.rs
use crate::distance::distance_miles;
use crate::model::{Coordinate, Event, MatchResult};
use crate::search::SportFilter;

/// Ranks `events` around `origin`.
///
/// Keeps events within `max_distance_miles` (inclusive) whose sport passes
/// `filter`, annotated with their distance and sorted nearest first. The
/// sort is stable, so equal distances keep input order. Events without
/// usable coordinates are dropped.
///
/// ```rust
/// use eventgeo_core::matching::match_events;
/// use eventgeo_core::{Coordinate, Event, SportFilter};
///
/// let origin = Coordinate::new(40.25, -111.65);
/// let here = Event {
///     title: "Home game".into(),
///     sport: "Football".into(),
///     latitude: Some(40.25),
///     longitude: Some(-111.65),
///     ..Default::default()
/// };
/// let hits = match_events(origin, &[here], 0.0, &SportFilter::All);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].distance, 0.0);
/// ```
pub fn match_events(
    origin: Coordinate,
    events: &[Event],
    max_distance_miles: f64,
    filter: &SportFilter,
) -> Vec<MatchResult> {
    let mut out: Vec<MatchResult> = events
        .iter()
        .filter(|event| filter.accepts(&event.sport))
        .filter_map(|event| {
            let distance = distance_miles(origin, event.coordinate()?);
            (distance <= max_distance_miles).then(|| MatchResult {
                event: event.clone(),
                distance,
            })
        })
        .collect();

    out.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    out
}
