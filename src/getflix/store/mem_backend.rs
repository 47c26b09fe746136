use super::backend::CatalogBackend;
use crate::error::{GetflixError, Result};
use crate::model::Catalog;
use std::cell::{Cell, RefCell};
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since getflix is single-threaded,
/// which lets `CatalogBackend::save` keep taking `&self`.
#[derive(Default)]
pub struct MemBackend {
    catalog: RefCell<Option<Catalog>>,
    saves: Cell<usize>,
    simulate_write_error: Cell<bool>,
    simulate_corrupt: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that starts out holding `catalog`, as if it had been saved before.
    pub fn with_catalog(catalog: Catalog) -> Self {
        let backend = Self::default();
        *backend.catalog.borrow_mut() = Some(catalog);
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Make `load` fail as if the stored document were unreadable.
    pub fn set_simulate_corrupt(&self, simulate: bool) {
        self.simulate_corrupt.set(simulate);
    }

    /// What a fresh load would see, or `None` if nothing was ever saved.
    pub fn stored(&self) -> Option<Catalog> {
        self.catalog.borrow().clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl CatalogBackend for MemBackend {
    fn load(&self) -> Result<Catalog> {
        if self.simulate_corrupt.get() {
            return Err(GetflixError::Config("Simulated corrupt catalog".to_string()));
        }
        Ok(self.catalog.borrow().clone().unwrap_or_default())
    }

    fn save(&self, catalog: &Catalog) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(GetflixError::Io(std::io::Error::other(
                "Simulated write error",
            )));
        }
        *self.catalog.borrow_mut() = Some(catalog.clone());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://movies")
    }
}
