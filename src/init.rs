//! Writing a starter configuration file.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use cardwall_config::Config;
use cardwall_config::persistence::default_user_config_path;
use tracing::info;

/// Writes the default configuration (the sample board) to `path`, or to the
/// user config file when no path is given.
///
/// Returns the path written.
///
/// # Errors
///
/// Fails if the file already exists and `force` is not set, if the user
/// config directory cannot be determined, or if the file cannot be written.
pub fn init_config(path: Option<&Path>, force: bool) -> anyhow::Result<PathBuf> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => default_user_config_path().context("no location for the user config file")?,
    };

    if path.exists() && !force {
        bail!("{} already exists; pass --force to overwrite it", path.display());
    }

    Config::default()
        .save_to(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "wrote default config");
    Ok(path)
}
