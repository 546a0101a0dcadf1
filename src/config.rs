use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::render::VarsLayout;

// =============================================================================
// Defaults
// =============================================================================

/// Download index listing Go release tarballs
pub const DEFAULT_INDEX_URL: &str = "https://golang.google.cn/dl/";

/// Ansible role defaults file, relative to the working directory
pub const DEFAULT_OUTPUT_PATH: &str = "../defaults/main.yml";

/// Maximum number of versions written to the variables file
pub const DEFAULT_MAX_VERSIONS: usize = 20;

/// Tarball platform suffix matched on the index page
pub const DEFAULT_PLATFORM: &str = "linux-amd64";

/// Base URL the rendered `go_download_location` points at
pub const DEFAULT_DOWNLOAD_BASE_URL: &str = "https://golang.google.cn/dl/";

/// Timeout for the index fetch in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("maxVersions must be at least 1")]
    InvalidMaxVersions,
}

/// Run configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Index page to scrape
    pub index_url: String,
    /// Where the variables file is written
    pub output_path: PathBuf,
    pub max_versions: usize,
    pub platform: String,
    pub download_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            index_url: DEFAULT_INDEX_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            max_versions: DEFAULT_MAX_VERSIONS,
            platform: DEFAULT_PLATFORM.to_string(),
            download_base_url: DEFAULT_DOWNLOAD_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Load a JSON config file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_versions == 0 {
            return Err(ConfigError::InvalidMaxVersions);
        }
        Ok(())
    }

    pub fn layout(&self) -> VarsLayout {
        VarsLayout {
            platform: self.platform.clone(),
            download_base_url: self.download_base_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<Config>(json!({
            "maxVersions": 5
        }))
        .unwrap();

        assert_eq!(
            result,
            Config {
                max_versions: 5,
                ..Config::default()
            }
        );
    }

    #[test]
    fn config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<Config>(json!({
            "indexUrl": "https://go.dev/dl/",
            "outputPath": "defaults/main.yml",
            "maxVersions": 10,
            "platform": "linux-arm64",
            "downloadBaseUrl": "https://dl.google.com/go/"
        }))
        .unwrap();

        assert_eq!(
            result,
            Config {
                index_url: "https://go.dev/dl/".to_string(),
                output_path: PathBuf::from("defaults/main.yml"),
                max_versions: 10,
                platform: "linux-arm64".to_string(),
                download_base_url: "https://dl.google.com/go/".to_string(),
            }
        );
    }

    #[test]
    fn default_config_matches_constants() {
        let config = Config::default();

        assert_eq!(config.index_url, "https://golang.google.cn/dl/");
        assert_eq!(config.output_path, PathBuf::from("../defaults/main.yml"));
        assert_eq!(config.max_versions, 20);
        assert_eq!(config.layout(), VarsLayout::default());
    }

    #[test]
    fn from_file_reads_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "platform": "darwin-arm64" }"#).unwrap();

        let config = Config::from_file(&path).unwrap();

        assert_eq!(config.platform, "darwin-arm64");
        assert_eq!(config.max_versions, DEFAULT_MAX_VERSIONS);
    }

    #[test]
    fn from_file_fails_for_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = Config::from_file(&temp_dir.path().join("nope.json"));

        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn from_file_fails_for_malformed_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = Config::from_file(&path);

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn from_file_rejects_zero_max_versions() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "maxVersions": 0 }"#).unwrap();

        let result = Config::from_file(&path);

        assert!(matches!(result, Err(ConfigError::InvalidMaxVersions)));
    }
}
