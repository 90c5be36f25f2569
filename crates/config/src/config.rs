//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which holds the initial
//! board layout, the card id style and the log filter.

use std::path::Path;

use cardwall_protocol::sample::sample_columns;
use cardwall_protocol::{Board, BoardStore, Column, IdStyle};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::persistence::{
    find_config_file, read_config_file, read_config_file_async, write_config_file,
};

/// The main configuration struct for the cardwall application.
///
/// # Examples
///
/// ```
/// use cardwall_config::Config;
/// use cardwall_protocol::{Column, IdStyle};
///
/// // The default config starts from the sample board
/// let config = Config::default();
/// assert_eq!(config.columns.len(), 5);
///
/// // A custom board
/// let config = Config {
///     columns: vec![Column::new("todo", "Todo"), Column::new("done", "Done")],
///     id_style: IdStyle::Sequential,
///     log_filter: Some("cardwall=debug".to_string()),
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Columns of the initial board, in display order.
    #[serde(default = "sample_columns")]
    pub columns: Vec<Column>,

    /// How fresh card ids are generated.
    #[serde(default)]
    pub id_style: IdStyle,

    /// Log filter directives, used when `RUST_LOG` is not set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            columns: sample_columns(),
            id_style: IdStyle::default(),
            log_filter: None,
        }
    }
}

impl Config {
    /// Creates a new configuration with the sample board.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./cardwall.json5` or `./cardwall.json`
    /// 2. User: `<config dir>/cardwall/config.json5` or `config.json`
    ///
    /// If no configuration file is found, returns a default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use cardwall_config::Config;
    ///
    /// # async fn example() -> cardwall_config::Result<()> {
    /// let config = Config::load().await?;
    /// println!("Board has {} columns", config.columns.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => {
                info!(path = %path.display(), "loading config");
                let config: Config = read_config_file_async(&path).await?;
                config.validate()?;
                Ok(config)
            }
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates the configuration.
    ///
    /// The columns must form a valid board: non-empty column ids, and no id
    /// used twice across cards and columns.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBoard`](crate::ConfigError::InvalidBoard)
    /// if validation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use cardwall_config::Config;
    /// use cardwall_protocol::Column;
    ///
    /// let config = Config {
    ///     columns: vec![Column::new("todo", "Todo"), Column::new("todo", "Again")],
    ///     ..Default::default()
    /// };
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if let Err(err) = self.initial_board() {
            warn!(error = %err, "rejected configured board");
            return Err(err);
        }
        Ok(())
    }

    /// Builds the initial board from the configured columns.
    ///
    /// # Errors
    ///
    /// Returns an error if the columns do not form a valid board.
    pub fn initial_board(&self) -> Result<Board> {
        Ok(Board::try_from_columns(self.columns.iter().cloned())?)
    }

    /// Builds a store over the initial board with the configured id style.
    ///
    /// # Errors
    ///
    /// Returns an error if the columns do not form a valid board.
    pub fn store(&self) -> Result<BoardStore> {
        Ok(BoardStore::with_allocator(
            self.initial_board()?,
            self.id_style.allocator(),
        ))
    }
}
