use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for segue.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (SEGUE_* prefix)
/// 3. Config file (~/.config/segue/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the song catalog CSV.
    ///
    /// Can be set via:
    /// - CLI: --catalog /path/to/catalog.csv
    /// - ENV: SEGUE_CATALOG_PATH
    /// - Config: catalog_path = "/path/to/catalog.csv"
    pub catalog_path: Option<PathBuf>,

    /// Default blend weight between audio and genre/tag similarity
    /// (0.0 = text only, 1.0 = audio only).
    #[serde(default = "default_weight")]
    pub default_weight: f64,

    /// Default number of recommendations to return.
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            default_weight: default_weight(),
            result_limit: default_result_limit(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/segue/config.toml
    /// Reads environment variables with SEGUE_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("segue");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Load configuration with the catalog path overridden.
    ///
    /// This is used when the --catalog CLI flag is provided.
    pub fn load_with_catalog_path(catalog_path: PathBuf) -> Result<Self> {
        let mut config = Self::load()?;
        config.catalog_path = Some(catalog_path);
        Ok(config)
    }
}

fn default_weight() -> f64 {
    0.5
}

fn default_result_limit() -> usize {
    5
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/segue/config.toml
/// - macOS: ~/Library/Application Support/segue/config.toml
/// - Windows: %APPDATA%\segue\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("segue")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Segue Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (SEGUE_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Path to the song catalog CSV
#
# Required columns: name, artist, genre, tags, danceability, energy,
# acousticness, instrumentalness, valence, tempo. Optional column:
# preview_url (spotify_preview_url is accepted as an alias).
#
# Can also be set via:
# - CLI: segue --catalog /path/to/catalog.csv recommend "Song Name"
# - Environment: SEGUE_CATALOG_PATH=/path/to/catalog.csv
#catalog_path = "/path/to/catalog.csv"

# Default blend weight between audio and genre/tag similarity.
# 0.0 = rank by genre/tag text only, 1.0 = rank by audio features only.
#default_weight = 0.5

# Default number of recommendations to return.
#result_limit = 5
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
