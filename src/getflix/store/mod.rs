//! # Storage Layer
//!
//! The catalog is persisted as one flat file. [`MovieStorage`] is the interface the
//! rest of the application talks to; it never sees which file format is underneath.
//!
//! ## Two Layers
//!
//! - [`backend::CatalogBackend`]: raw I/O. Reads the whole file into a [`Catalog`]
//!   and writes a whole [`Catalog`] back. Knows the format, nothing else.
//! - [`movie_store::MovieStore`]: the business rules. Owns the in-memory catalog,
//!   applies the duplicate / missing-title policy, and flushes after every
//!   successful mutation.
//!
//! ## Implementations
//!
//! - [`json_backend::JsonBackend`]: pretty-printed JSON object keyed by title.
//!   Persists every field, notes included.
//! - [`csv_backend::CsvBackend`]: header row plus one row per movie. Notes are
//!   **not** part of the CSV schema and are dropped on flush.
//! - [`mem_backend::MemBackend`]: in-memory, for tests.
//!
//! ## Consistency
//!
//! The store caches the catalog and flushes on mutation. Edits made to the file by
//! another process while a session is open are overwritten by the next flush;
//! [`MovieStorage::read_storage`] reloads explicitly.
//!
//! Flushes go through a temporary file in the same directory followed by a rename,
//! so a crash mid-write leaves the previous snapshot in place.
//!
//! ```text
//! ~/.local/share/getflix/
//! ├── movies.json     # or movies.csv
//! └── config.json
//! ```

use crate::error::{GetflixError, Result};
use crate::model::{Catalog, Movie};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub mod backend;
pub mod csv_backend;
pub mod json_backend;
pub mod mem_backend;
pub mod movie_store;

use csv_backend::CsvBackend;
use json_backend::JsonBackend;
use movie_store::MovieStore;

/// Result of a catalog mutation that did not fail on I/O.
///
/// Duplicates and missing titles are ordinary outcomes, not errors: nothing is
/// changed and nothing is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Duplicate,
    NotFound,
}

/// The catalog interface every storage variant provides.
pub trait MovieStorage {
    /// Snapshot of the whole catalog.
    fn list_movies(&self) -> Catalog;

    fn contains(&self, title: &str) -> bool;

    /// Insert a new record. The rating is normalized to one decimal place and the
    /// catalog is flushed before returning. An existing title yields
    /// [`Outcome::Duplicate`] and no write. A blank or padded title, or a rating
    /// that is not a finite number in 0..=10, is rejected with
    /// `GetflixError::InvalidMovie` before anything changes.
    fn add_movie(&mut self, title: &str, movie: Movie) -> Result<Outcome>;

    fn delete_movie(&mut self, title: &str) -> Result<Outcome>;

    /// Append a note to the record's notes.
    fn update_movie(&mut self, title: &str, note: &str) -> Result<Outcome>;

    /// Reload from the backing file. A missing or unreadable file yields an
    /// empty catalog.
    fn read_storage(&mut self);

    /// Flush the whole catalog to the backing file.
    fn write_storage(&self) -> Result<()>;

    /// Human-readable location of the backing store.
    fn location(&self) -> PathBuf;
}

impl<S: MovieStorage + ?Sized> MovieStorage for Box<S> {
    fn list_movies(&self) -> Catalog {
        (**self).list_movies()
    }

    fn contains(&self, title: &str) -> bool {
        (**self).contains(title)
    }

    fn add_movie(&mut self, title: &str, movie: Movie) -> Result<Outcome> {
        (**self).add_movie(title, movie)
    }

    fn delete_movie(&mut self, title: &str) -> Result<Outcome> {
        (**self).delete_movie(title)
    }

    fn update_movie(&mut self, title: &str, note: &str) -> Result<Outcome> {
        (**self).update_movie(title, note)
    }

    fn read_storage(&mut self) {
        (**self).read_storage()
    }

    fn write_storage(&self) -> Result<()> {
        (**self).write_storage()
    }

    fn location(&self) -> PathBuf {
        (**self).location()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageFormat {
    #[default]
    Json,
    Csv,
}

impl StorageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            StorageFormat::Json => "json",
            StorageFormat::Csv => "csv",
        }
    }

    /// `.csv` files are CSV, everything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => StorageFormat::Csv,
            _ => StorageFormat::Json,
        }
    }
}

impl fmt::Display for StorageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for StorageFormat {
    type Err = GetflixError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(StorageFormat::Json),
            "csv" => Ok(StorageFormat::Csv),
            other => Err(GetflixError::Config(format!(
                "Unknown storage format: {} (expected json or csv)",
                other
            ))),
        }
    }
}

/// Open the catalog at `path` with the given format, loading it immediately.
pub fn open_store(format: StorageFormat, path: PathBuf) -> Box<dyn MovieStorage> {
    match format {
        StorageFormat::Json => Box::new(MovieStore::open(JsonBackend::new(path))),
        StorageFormat::Csv => Box::new(MovieStore::open(CsvBackend::new(path))),
    }
}
