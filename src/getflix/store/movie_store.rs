use super::backend::CatalogBackend;
use super::{MovieStorage, Outcome};
use crate::error::{GetflixError, Result};
use crate::model::{is_valid_rating, is_valid_title, normalize_rating, Catalog, Movie};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Catalog cached in memory over a [`CatalogBackend`].
///
/// Loaded once when opened, flushed in full after every successful mutation.
/// If a flush fails the in-memory change is kept and the error returned, so
/// memory and disk diverge until the next successful flush.
pub struct MovieStore<B: CatalogBackend> {
    backend: B,
    movies: Catalog,
}

impl<B: CatalogBackend> MovieStore<B> {
    /// Open the store, loading whatever the backend currently holds.
    pub fn open(backend: B) -> Self {
        let mut store = Self {
            backend,
            movies: Catalog::new(),
        };
        store.read_storage();
        store
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn flush(&self) -> Result<()> {
        self.backend.save(&self.movies)
    }
}

impl<B: CatalogBackend> MovieStorage for MovieStore<B> {
    fn list_movies(&self) -> Catalog {
        self.movies.clone()
    }

    fn contains(&self, title: &str) -> bool {
        self.movies.contains_key(title)
    }

    fn add_movie(&mut self, title: &str, mut movie: Movie) -> Result<Outcome> {
        if !is_valid_title(title) {
            return Err(GetflixError::InvalidMovie {
                field: "title",
                value: title.to_string(),
            });
        }
        if !is_valid_rating(movie.rating) {
            return Err(GetflixError::InvalidMovie {
                field: "rating",
                value: movie.rating.to_string(),
            });
        }
        if self.movies.contains_key(title) {
            return Ok(Outcome::Duplicate);
        }
        movie.rating = normalize_rating(movie.rating);
        self.movies.insert(title.to_string(), movie);
        self.flush()?;
        Ok(Outcome::Applied)
    }

    fn delete_movie(&mut self, title: &str) -> Result<Outcome> {
        if self.movies.remove(title).is_none() {
            return Ok(Outcome::NotFound);
        }
        self.flush()?;
        Ok(Outcome::Applied)
    }

    fn update_movie(&mut self, title: &str, note: &str) -> Result<Outcome> {
        let Some(movie) = self.movies.get_mut(title) else {
            return Ok(Outcome::NotFound);
        };
        movie.notes.push(note.to_string());
        self.flush()?;
        Ok(Outcome::Applied)
    }

    fn read_storage(&mut self) {
        self.movies = match self.backend.load() {
            Ok(movies) => {
                debug!(location = %self.backend.location().display(), movies = movies.len(), "loaded catalog");
                movies
            }
            Err(e) => {
                warn!(
                    location = %self.backend.location().display(),
                    error = %e,
                    "could not read catalog, starting empty"
                );
                Catalog::new()
            }
        };
    }

    fn write_storage(&self) -> Result<()> {
        self.flush()
    }

    fn location(&self) -> PathBuf {
        self.backend.location()
    }
}
