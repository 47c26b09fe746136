use super::backend::{read_if_exists, write_atomic, CatalogBackend};
use crate::error::{GetflixError, Result};
use crate::model::Catalog;
use std::path::PathBuf;
use tracing::debug;

/// Catalog stored as a single JSON object mapping title to record.
///
/// ```json
/// {
///   "Inception": {
///     "year": 2010,
///     "rating": 8.8,
///     "poster": "https://…",
///     "imdb_id": "tt1375666",
///     "notes": ["great visuals"]
///   }
/// }
/// ```
pub struct JsonBackend {
    path: PathBuf,
}

impl JsonBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogBackend for JsonBackend {
    fn load(&self) -> Result<Catalog> {
        let Some(content) = read_if_exists(&self.path)? else {
            return Ok(Catalog::new());
        };
        if content.trim().is_empty() {
            return Ok(Catalog::new());
        }
        let catalog: Catalog =
            serde_json::from_str(&content).map_err(GetflixError::Serialization)?;
        Ok(catalog)
    }

    fn save(&self, catalog: &Catalog) -> Result<()> {
        let content = serde_json::to_string_pretty(catalog).map_err(GetflixError::Serialization)?;
        write_atomic(&self.path, content.as_bytes())?;
        debug!(path = %self.path.display(), movies = catalog.len(), "flushed json catalog");
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}
