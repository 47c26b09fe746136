use crate::error::{GetflixError, Result};
use crate::store::StorageFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SITE_TITLE: &str = "Welcome to Getflix";
const DEFAULT_SITE_OUTPUT: &str = "index.html";
const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 10;

/// Configuration for getflix, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GetflixConfig {
    /// Format of the catalog file ("json" or "csv")
    #[serde(default)]
    pub storage_format: StorageFormat,

    /// Catalog file. Relative paths are resolved against the data dir.
    /// Defaults to `movies.json` / `movies.csv`.
    #[serde(default)]
    pub catalog_file: Option<PathBuf>,

    /// OMDb API key. Without one, movies are added by typing year and rating.
    #[serde(default)]
    pub omdb_api_key: Option<String>,

    #[serde(default = "default_lookup_timeout_secs")]
    pub lookup_timeout_secs: u64,

    #[serde(default = "default_site_title")]
    pub site_title: String,

    /// HTML template for the generated site; built-in when absent
    #[serde(default)]
    pub site_template: Option<PathBuf>,

    #[serde(default = "default_site_output")]
    pub site_output: PathBuf,
}

fn default_lookup_timeout_secs() -> u64 {
    DEFAULT_LOOKUP_TIMEOUT_SECS
}

fn default_site_title() -> String {
    DEFAULT_SITE_TITLE.to_string()
}

fn default_site_output() -> PathBuf {
    PathBuf::from(DEFAULT_SITE_OUTPUT)
}

impl Default for GetflixConfig {
    fn default() -> Self {
        Self {
            storage_format: StorageFormat::default(),
            catalog_file: None,
            omdb_api_key: None,
            lookup_timeout_secs: DEFAULT_LOOKUP_TIMEOUT_SECS,
            site_title: default_site_title(),
            site_template: None,
            site_output: default_site_output(),
        }
    }
}

impl GetflixConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(GetflixError::Io)?;
        let config: GetflixConfig =
            serde_json::from_str(&content).map_err(GetflixError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(GetflixError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(GetflixError::Serialization)?;
        fs::write(config_path, content).map_err(GetflixError::Io)?;
        Ok(())
    }

    /// Absolute catalog path inside `data_dir`.
    pub fn catalog_path(&self, data_dir: &Path) -> PathBuf {
        match &self.catalog_file {
            Some(file) => data_dir.join(file),
            None => data_dir.join(format!("movies.{}", self.storage_format.extension())),
        }
    }

    /// The API key, if one is set and not blank.
    pub fn api_key(&self) -> Option<&str> {
        self.omdb_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = GetflixConfig::default();
        assert_eq!(config.storage_format, StorageFormat::Json);
        assert_eq!(config.site_title, "Welcome to Getflix");
        assert_eq!(config.lookup_timeout(), Duration::from_secs(10));
        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = GetflixConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, GetflixConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("nested");

        let config = GetflixConfig {
            storage_format: StorageFormat::Csv,
            omdb_api_key: Some("abc123".to_string()),
            ..GetflixConfig::default()
        };
        config.save(&dir).unwrap();

        let loaded = GetflixConfig::load(&dir).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"storage_format": "csv"}"#,
        )
        .unwrap();

        let config = GetflixConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.storage_format, StorageFormat::Csv);
        assert_eq!(config.site_output, PathBuf::from("index.html"));
    }

    #[test]
    fn test_catalog_path_follows_format() {
        let dir = Path::new("/data");
        let mut config = GetflixConfig::default();
        assert_eq!(config.catalog_path(dir), PathBuf::from("/data/movies.json"));

        config.storage_format = StorageFormat::Csv;
        assert_eq!(config.catalog_path(dir), PathBuf::from("/data/movies.csv"));

        config.catalog_file = Some(PathBuf::from("/elsewhere/films.csv"));
        assert_eq!(
            config.catalog_path(dir),
            PathBuf::from("/elsewhere/films.csv")
        );
    }

    #[test]
    fn test_blank_api_key_is_ignored() {
        let config = GetflixConfig {
            omdb_api_key: Some("  ".to_string()),
            ..GetflixConfig::default()
        };
        assert_eq!(config.api_key(), None);
    }
}
