//! # Movie Lookup
//!
//! Fetches year, rating, poster and IMDb id for a title from the OMDb API.
//!
//! Lookups never fail loudly: a network error, a timeout, an error status, an
//! unknown title or a response without a usable rating all come back as `None`,
//! which the UI reports as "not found".
//!
//! The client is built from an explicit [`LookupConfig`]; nothing is read from
//! the environment here.

use crate::error::{GetflixError, Result};
use crate::model::{is_valid_rating, Movie};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

pub const OMDB_API_BASE: &str = "https://www.omdbapi.com/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// What a lookup returns for a known title.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetails {
    pub title: String,
    pub year: i32,
    pub rating: f64,
    pub poster: Option<String>,
    pub imdb_id: Option<String>,
}

impl MovieDetails {
    pub fn into_movie(self) -> (String, Movie) {
        let mut movie = Movie::new(self.year, self.rating);
        if let Some(poster) = self.poster {
            movie = movie.with_poster(poster);
        }
        if let Some(imdb_id) = self.imdb_id {
            movie = movie.with_imdb_id(imdb_id);
        }
        (self.title, movie)
    }
}

pub trait MovieLookup {
    /// Details for `title`, or `None` if the service does not know it or
    /// cannot be reached.
    fn find(&self, title: &str) -> Option<MovieDetails>;

    /// Whether lookups can return anything at all.
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Lookup used when no API key is configured.
pub struct NoLookup;

impl MovieLookup for NoLookup {
    fn find(&self, _title: &str) -> Option<MovieDetails> {
        None
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl LookupConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: OMDB_API_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct OmdbResponse {
    response: String,
    title: Option<String>,
    year: Option<String>,
    poster: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(rename = "imdbID")]
    imdb_id: Option<String>,
    error: Option<String>,
}

fn usable(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && v != "N/A")
}

/// Leading digits of OMDb's year, which may be a range such as "2008–2013".
fn parse_year(year: &str) -> Option<i32> {
    let digits: String = year.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

impl OmdbResponse {
    fn into_details(self, requested: &str) -> Option<MovieDetails> {
        if !self.response.eq_ignore_ascii_case("true") {
            debug!(
                title = requested,
                error = self.error.as_deref().unwrap_or("unknown"),
                "omdb has no match"
            );
            return None;
        }
        let year = usable(self.year).as_deref().and_then(parse_year)?;
        let rating = usable(self.imdb_rating)?
            .parse::<f64>()
            .ok()
            .filter(|r| is_valid_rating(*r))?;
        Some(MovieDetails {
            title: usable(self.title).unwrap_or_else(|| requested.to_string()),
            year,
            rating,
            poster: usable(self.poster),
            imdb_id: usable(self.imdb_id),
        })
    }
}

pub struct OmdbClient {
    client: Client,
    config: LookupConfig,
}

impl OmdbClient {
    pub fn new(config: LookupConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GetflixError::Lookup(e.to_string()))?;
        Ok(Self { client, config })
    }

    fn fetch(&self, title: &str) -> Result<OmdbResponse> {
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[("apikey", self.config.api_key.as_str()), ("t", title)])
            .send()
            .map_err(|e| GetflixError::Lookup(e.to_string()))?
            .error_for_status()
            .map_err(|e| GetflixError::Lookup(e.to_string()))?;

        response
            .json::<OmdbResponse>()
            .map_err(|e| GetflixError::Lookup(e.to_string()))
    }
}

impl MovieLookup for OmdbClient {
    fn find(&self, title: &str) -> Option<MovieDetails> {
        match self.fetch(title) {
            Ok(response) => response.into_details(title),
            Err(e) => {
                warn!(title, error = %e, "movie lookup failed");
                None
            }
        }
    }
}
