pub mod config;
pub mod recommend;
pub mod status;

pub use config::{init_config, show_config, show_example, show_path};
pub use recommend::run_recommend;
pub use status::show_status;

use anyhow::{Context, Result};
use std::path::PathBuf;

use segue_ingest::{config::config_file_path, Config};

/// Resolve the catalog path: CLI flag, then SEGUE_CATALOG_PATH / the
/// config file, then fail with guidance.
pub(crate) fn resolve_catalog(cli_path: Option<PathBuf>) -> Result<(PathBuf, Config)> {
    let config = match cli_path {
        Some(path) => Config::load_with_catalog_path(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let path = config.catalog_path.clone().with_context(|| {
        format!(
            "No catalog configured. Pass --catalog, set SEGUE_CATALOG_PATH, \
             or add catalog_path to {}",
            config_file_path().display()
        )
    })?;

    Ok((path, config))
}
