// crates/eventgeo-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (file access, optional gzip, binary cache)
//! and delegates the text format to [`table`].

use crate::error::{GeoError, Result};
use crate::index::ReferenceIndex;
use once_cell::sync::OnceCell;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "cache")]
mod cache;
pub mod table;

static REFERENCE_CACHE: OnceCell<ReferenceIndex> = OnceCell::new();

impl ReferenceIndex {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "uszips.csv"
    }

    /// Process-wide index built from the default dataset.
    ///
    /// See [`ReferenceIndex::load_from_path_cached`].
    pub fn load() -> Result<&'static Self> {
        Self::load_from_path_cached(Self::default_data_dir().join(Self::default_dataset_filename()))
    }

    /// Loads the table at most once per process and hands out a shared
    /// reference to it.
    ///
    /// Concurrent first callers block on the same initialization; only one
    /// parse happens. Once a table is cached, later calls return it no
    /// matter which path they pass. Use [`ReferenceIndex::load_from_path`]
    /// for an independently owned index.
    pub fn load_from_path_cached(path: impl AsRef<Path>) -> Result<&'static Self> {
        REFERENCE_CACHE.get_or_try_init(|| Self::load_from_path(path))
    }

    /// Reads and indexes a reference table from disk.
    ///
    /// `*.gz` files are decompressed on the fly (feature `compact`). With
    /// the `cache` feature a parsed copy is kept in `<file>.idx.bin` and
    /// reused while it is newer than the source.
    ///
    /// A missing required column is a hard error here: this is the
    /// initialization path and an unusable dataset should halt it.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        #[cfg(feature = "cache")]
        if let Some(index) = cache::read_if_fresh(path) {
            tracing::info!(path = %path.display(), records = index.len(), "reference table loaded from cache");
            return Ok(index);
        }

        let mut text = String::new();
        open_stream(path)?.read_to_string(&mut text)?;
        let index = Self::try_from_csv(&text)?;
        tracing::info!(path = %path.display(), records = index.len(), "reference table parsed");

        #[cfg(feature = "cache")]
        cache::write(path, &index);

        Ok(index)
    }
}

/// Opens a file, buffers it, and wraps `.gz` files in a gzip decoder.
pub(crate) fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        GeoError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);

    let gzipped = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));
    if !gzipped {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(GeoError::InvalidData(format!(
            "{} is gzip-compressed but the 'compact' feature is disabled",
            path.display()
        )))
    }
}
