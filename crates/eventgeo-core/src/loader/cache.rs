// crates/eventgeo-core/src/loader/cache.rs

//! Bincode snapshot of a parsed [`ReferenceIndex`] stored next to its source.

use crate::error::Result;
use crate::index::ReferenceIndex;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

pub(crate) const CACHE_SUFFIX: &str = "idx.bin";

pub(crate) fn cache_path(source: &Path) -> PathBuf {
    let filename = source
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(format!("{filename}.{CACHE_SUFFIX}"))
}

/// True when the cache exists and is not older than the source.
fn is_fresh(source: &Path, cache: &Path) -> bool {
    let cache_time = match fs::metadata(cache).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    match fs::metadata(source).and_then(|m| m.modified()) {
        Ok(source_time) => source_time <= cache_time,
        Err(_) => false,
    }
}

pub(crate) fn read_if_fresh(source: &Path) -> Option<ReferenceIndex> {
    let cache = cache_path(source);
    if !is_fresh(source, &cache) {
        return None;
    }
    match read(&cache) {
        Ok(index) => Some(index),
        Err(e) => {
            tracing::debug!(path = %cache.display(), error = %e, "ignoring unreadable cache");
            None
        }
    }
}

fn read(path: &Path) -> Result<ReferenceIndex> {
    let reader = BufReader::new(File::open(path)?);
    Ok(bincode::deserialize_from(reader)?)
}

/// Best effort: a read-only data directory just means no cache.
pub(crate) fn write(source: &Path, index: &ReferenceIndex) {
    let cache = cache_path(source);
    if let Err(e) = try_write(&cache, index) {
        tracing::debug!(path = %cache.display(), error = %e, "could not write cache");
    }
}

fn try_write(path: &Path, index: &ReferenceIndex) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    bincode::serialize_into(&mut writer, index)?;
    writer.flush()?;
    Ok(())
}
