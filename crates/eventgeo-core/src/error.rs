// crates/eventgeo-core/src/error.rs
use thiserror::Error;

/// Errors surfaced by the loader and the search entry point.
///
/// Lookups that simply miss (unknown ZIP, unparseable location text) are
/// not errors and come back as `None` instead.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "cache")]
    #[error("Binary cache error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Reference table header is missing required column '{0}'")]
    MissingColumn(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Invalid search query: {0}")]
    InvalidQuery(String),
}

pub type Result<T> = std::result::Result<T, GeoError>;
