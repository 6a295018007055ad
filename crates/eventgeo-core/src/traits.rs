// crates/eventgeo-core/src/traits.rs
use crate::index::ReferenceIndex;
use crate::model::{Coordinate, PlaceRecord};

/// Lookup operations over a reference table.
///
/// Both lookups are exact: city and state are trimmed and compared
/// case-insensitively, ZIPs are compared as-is. A miss is an expected
/// outcome and is reported as `None`.
///
/// # Example
///
/// ```rust
/// use eventgeo_core::{PlaceLookup, ReferenceIndex};
///
/// let csv = "city,state_id,state_name,lat,lng,zip\n\
///            Los Angeles,CA,California,34.0522,-118.2437,90012\n";
/// let index = ReferenceIndex::from_csv(csv);
///
/// let by_code = index.resolve_city_state("LOS ANGELES", "ca");
/// let by_name = index.resolve_city_state("Los Angeles", "California");
/// assert!(by_code.is_some());
/// assert_eq!(by_code, by_name);
/// assert!(index.resolve_zip("00000").is_none());
/// ```
pub trait PlaceLookup {
    /// Record for a city and a state given as two-letter code or full name.
    fn find_city_state(&self, city: &str, state: &str) -> Option<&PlaceRecord>;

    /// Record for an exact postal code. No prefix or nearest-code fallback.
    fn find_zip(&self, zip: &str) -> Option<&PlaceRecord>;

    fn resolve_city_state(&self, city: &str, state: &str) -> Option<Coordinate> {
        self.find_city_state(city, state).map(PlaceRecord::coordinate)
    }

    /// Format validation (five digits) belongs to the caller.
    fn resolve_zip(&self, zip: &str) -> Option<Coordinate> {
        self.find_zip(zip).map(PlaceRecord::coordinate)
    }
}

impl PlaceLookup for ReferenceIndex {
    fn find_city_state(&self, city: &str, state: &str) -> Option<&PlaceRecord> {
        self.place_id(city, state).and_then(|id| self.records().get(id))
    }

    fn find_zip(&self, zip: &str) -> Option<&PlaceRecord> {
        self.zip_id(zip).and_then(|id| self.records().get(id))
    }
}
