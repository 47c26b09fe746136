use crate::api::GetflixApi;
use crate::commands::site::SiteOptions;
use crate::config::GetflixConfig;
use crate::error::{GetflixError, Result};
use crate::lookup::{LookupConfig, MovieLookup, NoLookup, OmdbClient};
use crate::store::{open_store, MovieStorage, StorageFormat};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub struct GetflixContext {
    pub api: GetflixApi<Box<dyn MovieStorage>>,
    pub lookup: Box<dyn MovieLookup>,
    pub site: SiteOptions,
}

/// Values given on the command line, overriding `config.json`.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub data_dir: Option<PathBuf>,
    pub file: Option<PathBuf>,
    pub format: Option<StorageFormat>,
    pub api_key: Option<String>,
}

/// The per-user data directory, e.g. `~/.local/share/getflix` on Linux.
pub fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "getflix", "getflix")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| GetflixError::Config("Could not determine data dir".to_string()))
}

/// Fold command-line overrides into the loaded config.
///
/// An explicit file without an explicit format takes its format from the
/// file extension.
pub fn apply_overrides(mut config: GetflixConfig, overrides: &Overrides) -> GetflixConfig {
    if let Some(file) = &overrides.file {
        config.catalog_file = Some(file.clone());
        config.storage_format = StorageFormat::from_path(file);
    }
    if let Some(format) = overrides.format {
        config.storage_format = format;
    }
    if let Some(key) = &overrides.api_key {
        config.omdb_api_key = Some(key.clone());
    }
    config
}

fn build_lookup(config: &GetflixConfig) -> Box<dyn MovieLookup> {
    let Some(key) = config.api_key() else {
        debug!("no omdb api key configured, lookups disabled");
        return Box::new(NoLookup);
    };
    let lookup_config = LookupConfig::new(key).with_timeout(config.lookup_timeout());
    match OmdbClient::new(lookup_config) {
        Ok(client) => Box::new(client),
        Err(e) => {
            warn!(error = %e, "could not build lookup client, lookups disabled");
            Box::new(NoLookup)
        }
    }
}

pub fn initialize_in(data_dir: &Path, overrides: &Overrides) -> Result<GetflixContext> {
    let config = GetflixConfig::load(data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "could not read config, using defaults");
        GetflixConfig::default()
    });
    let config = apply_overrides(config, overrides);

    let catalog_path = config.catalog_path(data_dir);
    debug!(path = %catalog_path.display(), format = %config.storage_format, "opening catalog");
    let store = open_store(config.storage_format, catalog_path);

    let site = SiteOptions {
        title: config.site_title.clone(),
        template: config.site_template.clone(),
        output: config.site_output.clone(),
    };

    Ok(GetflixContext {
        api: GetflixApi::new(store),
        lookup: build_lookup(&config),
        site,
    })
}

pub fn initialize(overrides: &Overrides) -> Result<GetflixContext> {
    let data_dir = match &overrides.data_dir {
        Some(dir) => dir.clone(),
        None => default_data_dir()?,
    };
    initialize_in(&data_dir, overrides)
}
