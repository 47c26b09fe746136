use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placeholder stored when an optional field has no value.
pub const NOT_AVAILABLE: &str = "N/A";

/// The full catalog: title → record. Titles are case-sensitive keys.
pub type Catalog = BTreeMap<String, Movie>;

fn not_available() -> String {
    NOT_AVAILABLE.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub year: i32,
    pub rating: f64,
    #[serde(default = "not_available")]
    pub poster: String,
    #[serde(default = "not_available")]
    pub imdb_id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl Movie {
    pub fn new(year: i32, rating: f64) -> Self {
        Self {
            year,
            rating,
            poster: not_available(),
            imdb_id: not_available(),
            notes: Vec::new(),
        }
    }

    pub fn with_poster(mut self, poster: impl Into<String>) -> Self {
        self.poster = or_sentinel(poster.into());
        self
    }

    pub fn with_imdb_id(mut self, imdb_id: impl Into<String>) -> Self {
        self.imdb_id = or_sentinel(imdb_id.into());
        self
    }

    /// Poster URL, or `None` when the sentinel is stored.
    pub fn poster_url(&self) -> Option<&str> {
        present(&self.poster)
    }

    pub fn imdb_url(&self) -> Option<String> {
        present(&self.imdb_id).map(|id| format!("https://www.imdb.com/title/{}/", id))
    }
}

/// A catalog row with its key attached, used wherever movies are listed.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieEntry {
    pub title: String,
    pub movie: Movie,
}

impl MovieEntry {
    pub fn new(title: impl Into<String>, movie: Movie) -> Self {
        Self {
            title: title.into(),
            movie,
        }
    }
}

/// Entries in catalog iteration order.
pub fn entries(catalog: &Catalog) -> Vec<MovieEntry> {
    catalog
        .iter()
        .map(|(title, movie)| MovieEntry::new(title.clone(), movie.clone()))
        .collect()
}

/// Highest rating a movie can be added with.
pub const MAX_RATING: f64 = 10.0;

/// A finite rating between 0 and [`MAX_RATING`].
pub fn is_valid_rating(rating: f64) -> bool {
    rating.is_finite() && (0.0..=MAX_RATING).contains(&rating)
}

/// A title both file formats store unchanged: not blank, no surrounding
/// whitespace.
pub fn is_valid_title(title: &str) -> bool {
    !title.is_empty() && title.trim() == title
}

/// Rounds a rating to one decimal place.
pub fn normalize_rating(rating: f64) -> f64 {
    (rating * 10.0).round() / 10.0
}

fn or_sentinel(value: String) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        not_available()
    } else {
        trimmed.to_string()
    }
}

fn present(value: &str) -> Option<&str> {
    if value.is_empty() || value == NOT_AVAILABLE {
        None
    } else {
        Some(value)
    }
}
