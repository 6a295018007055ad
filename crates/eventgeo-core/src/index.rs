// crates/eventgeo-core/src/index.rs
use crate::model::PlaceRecord;
use crate::text::fold_key;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Immutable in-memory view of the reference table.
///
/// Owns every [`PlaceRecord`] in load order plus two derived views:
///
/// - `(city, state)` → record, where `state` is registered under both the
///   two-letter code and the full state name (all keys folded with
///   [`fold_key`]);
/// - `zip` → record.
///
/// When the same key shows up twice during load, the later row wins. This
/// mirrors plain map insertion and is kept as the documented policy.
///
/// Built once and shared by reference; nothing is mutated after
/// construction, so a `&ReferenceIndex` can be used from many threads.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ReferenceIndex {
    records: Vec<PlaceRecord>,
    by_place: HashMap<(String, String), usize>,
    by_zip: HashMap<String, usize>,
}

/// Aggregate counts for the loaded table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Rows accepted by the loader.
    pub records: usize,
    /// Distinct `(city, state token)` keys (codes and names both counted).
    pub places: usize,
    /// Distinct postal codes.
    pub zips: usize,
}

impl ReferenceIndex {
    /// Builds an index from already-parsed records, in order.
    pub fn from_records(records: impl IntoIterator<Item = PlaceRecord>) -> Self {
        let mut index = Self::default();
        for record in records {
            index.push(record);
        }
        index
    }

    pub(crate) fn push(&mut self, record: PlaceRecord) {
        let id = self.records.len();
        let city = fold_key(&record.city);

        if !city.is_empty() {
            for state in [&record.state_code, &record.state_name] {
                let state = fold_key(state);
                if !state.is_empty() {
                    self.by_place.insert((city.clone(), state), id);
                }
            }
        }

        let zip = record.zip.trim();
        if !zip.is_empty() {
            self.by_zip.insert(zip.to_owned(), id);
        }

        self.records.push(record);
    }

    /// All records in load order.
    pub fn records(&self) -> &[PlaceRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            records: self.records.len(),
            places: self.by_place.len(),
            zips: self.by_zip.len(),
        }
    }

    pub(crate) fn place_id(&self, city: &str, state: &str) -> Option<usize> {
        self.by_place.get(&(fold_key(city), fold_key(state))).copied()
    }

    pub(crate) fn zip_id(&self, zip: &str) -> Option<usize> {
        self.by_zip.get(zip).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Coordinate;
    use crate::traits::PlaceLookup;

    fn rec(city: &str, code: &str, name: &str, lat: f64, lon: f64, zip: &str) -> PlaceRecord {
        PlaceRecord {
            city: city.into(),
            state_code: code.into(),
            state_name: name.into(),
            lat,
            lon,
            zip: zip.into(),
        }
    }

    #[test]
    fn same_city_in_two_states_stays_distinct() {
        let index = ReferenceIndex::from_records([
            rec("Springfield", "IL", "Illinois", 39.8, -89.6, "62701"),
            rec("Springfield", "MA", "Massachusetts", 42.1, -72.5, "01103"),
        ]);
        assert_eq!(index.resolve_city_state("springfield", "il").unwrap().lat, 39.8);
        assert_eq!(index.resolve_city_state("Springfield", "Massachusetts").unwrap().lat, 42.1);
        assert!(index.resolve_city_state("Springfield", "MO").is_none());
    }

    #[test]
    fn later_duplicate_overrides_earlier() {
        let index = ReferenceIndex::from_records([
            rec("Provo", "UT", "Utah", 40.0, -111.0, "84601"),
            rec("Provo", "UT", "Utah", 40.2, -111.6, "84604"),
        ]);
        assert_eq!(index.resolve_city_state("Provo", "UT"), Some(Coordinate::new(40.2, -111.6)));
        assert_eq!(index.len(), 2);
        // both ZIPs remain addressable
        assert_eq!(index.resolve_zip("84601"), Some(Coordinate::new(40.0, -111.0)));
    }

    #[test]
    fn stats_count_both_state_forms() {
        let index = ReferenceIndex::from_records([
            rec("Boise", "ID", "Idaho", 43.6, -116.2, "83702"),
            rec("Meridian", "ID", "Idaho", 43.6, -116.4, ""),
        ]);
        assert_eq!(
            index.stats(),
            IndexStats {
                records: 2,
                places: 4,
                zips: 1
            }
        );
    }

    #[test]
    fn zip_lookup_is_exact() {
        let index = ReferenceIndex::from_records([rec("Beverly Hills", "CA", "California", 34.1, -118.4, "90210")]);
        assert!(index.resolve_zip("90210").is_some());
        assert!(index.resolve_zip("9021").is_none());
        assert!(index.resolve_zip("00000").is_none());
    }

    #[test]
    fn dangling_ids_miss_instead_of_panicking() {
        let index = ReferenceIndex {
            records: vec![rec("Boise", "ID", "Idaho", 43.6, -116.2, "83702")],
            by_place: HashMap::from([(("provo".to_string(), "ut".to_string()), 7)]),
            by_zip: HashMap::from([("90210".to_string(), 3)]),
        };
        assert!(index.find_city_state("Provo", "UT").is_none());
        assert!(index.resolve_zip("90210").is_none());
    }
}
