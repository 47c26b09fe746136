//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for catalog operations, whatever UI drives them.
//!
//! It dispatches to `commands/*.rs` and returns `Result<CmdResult>`. It holds no
//! business logic and performs no terminal I/O.
//!
//! `GetflixApi<S: MovieStorage>` is generic over the catalog interface:
//! - Production: `GetflixApi<Box<dyn MovieStorage>>`, backend picked at startup
//! - Testing: `GetflixApi<MovieStore<MemBackend>>`

use crate::commands;
use crate::commands::site::SiteOptions;
use crate::error::Result;
use crate::model::Movie;
use crate::store::MovieStorage;
use std::path::PathBuf;

pub struct GetflixApi<S: MovieStorage> {
    store: S,
}

impl<S: MovieStorage> GetflixApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list_movies(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn add_movie(&mut self, title: &str, movie: Movie) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, title, movie)
    }

    pub fn delete_movie(&mut self, title: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, title)
    }

    pub fn add_note(&mut self, title: &str, note: &str) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, title, note)
    }

    pub fn stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store)
    }

    pub fn random_movie(&self) -> Result<commands::CmdResult> {
        commands::random::run(&self.store)
    }

    pub fn search_movies(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, term)
    }

    pub fn movies_by_rating(&self) -> Result<commands::CmdResult> {
        commands::sort::run(&self.store)
    }

    pub fn generate_site(&self, options: &SiteOptions) -> Result<commands::CmdResult> {
        commands::site::run(&self.store, options)
    }

    pub fn has_movie(&self, title: &str) -> bool {
        self.store.contains(title)
    }

    pub fn location(&self) -> PathBuf {
        self.store.location()
    }
}

pub use crate::commands::stats::CatalogStats;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
