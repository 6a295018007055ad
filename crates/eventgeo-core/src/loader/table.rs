// crates/eventgeo-core/src/loader/table.rs

//! Header-driven parser for the `uszips.csv` reference table.
//!
//! Column positions are looked up by (case-insensitive) header name since
//! the upstream schema reorders columns between releases.

use crate::error::{GeoError, Result};
use crate::index::ReferenceIndex;
use crate::model::PlaceRecord;
use crate::text::parse_coord;
use csv::{ReaderBuilder, StringRecord, Trim};

const CITY: &[&str] = &["city"];
const STATE_ID: &[&str] = &["state_id"];
const STATE_NAME: &[&str] = &["state_name"];
const LAT: &[&str] = &["lat"];
const LON: &[&str] = &["lng", "lon", "long"];
const ZIP: &[&str] = &["zip"];

/// Resolved column positions for one dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Columns {
    city: usize,
    state_id: usize,
    state_name: usize,
    lat: usize,
    lon: usize,
    zip: Option<usize>,
}

impl Columns {
    pub(crate) fn from_header(header: &StringRecord) -> Result<Self> {
        let find = |names: &[&str]| {
            header
                .iter()
                .position(|h| names.iter().any(|n| h.eq_ignore_ascii_case(n)))
        };
        let require = |names: &[&str]| {
            find(names).ok_or_else(|| GeoError::MissingColumn(names.join("/")))
        };

        Ok(Self {
            city: require(CITY)?,
            state_id: require(STATE_ID)?,
            state_name: require(STATE_NAME)?,
            lat: require(LAT)?,
            lon: require(LON)?,
            zip: find(ZIP),
        })
    }

    fn max_required(&self) -> usize {
        self.city
            .max(self.state_id)
            .max(self.state_name)
            .max(self.lat)
            .max(self.lon)
    }

    /// Builds a record from one row, or `None` for a malformed row.
    fn record(&self, row: &StringRecord) -> Option<PlaceRecord> {
        if row.len() <= self.max_required() {
            return None;
        }
        let lat = parse_coord(&row[self.lat])?;
        let lon = parse_coord(&row[self.lon])?;

        Some(PlaceRecord {
            city: row[self.city].to_owned(),
            state_code: row[self.state_id].to_owned(),
            state_name: row[self.state_name].to_owned(),
            lat,
            lon,
            zip: self
                .zip
                .and_then(|i| row.get(i))
                .map(str::to_owned)
                .unwrap_or_default(),
        })
    }
}

/// Parses the full dataset text. Malformed rows are skipped silently.
pub(crate) fn parse(text: &str) -> Result<ReferenceIndex> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    if text.trim().is_empty() {
        return Err(GeoError::InvalidData("reference table is empty".into()));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let columns = Columns::from_header(reader.headers()?)?;

    let mut index = ReferenceIndex::default();
    let mut skipped = 0usize;
    for result in reader.records() {
        match result.ok().and_then(|row| columns.record(&row)) {
            Some(record) => index.push(record),
            None => skipped += 1,
        }
    }

    tracing::debug!(records = index.len(), skipped, "parsed reference table");
    Ok(index)
}

impl ReferenceIndex {
    /// Strict parse of the reference table text.
    ///
    /// Fails with [`GeoError::MissingColumn`] when the header lacks one of
    /// `city`, `state_id`, `state_name`, `lat`, `lng`/`lon`/`long`.
    /// A `zip` column is optional.
    pub fn try_from_csv(text: &str) -> Result<Self> {
        parse(text)
    }

    /// Lenient parse: a dataset that cannot be indexed yields an empty
    /// index (logged at `warn`), never an error.
    ///
    /// ```rust
    /// use eventgeo_core::ReferenceIndex;
    ///
    /// let index = ReferenceIndex::from_csv("city,state_id\nBoise,ID\n");
    /// assert!(index.is_empty());
    /// ```
    pub fn from_csv(text: &str) -> Self {
        parse(text).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "reference table unusable, using empty index");
            Self::default()
        })
    }
}
