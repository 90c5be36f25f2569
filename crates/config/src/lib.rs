//! Configuration management for the cardwall application.
//!
//! This crate handles loading, validating, and persisting configuration:
//! the columns of the initial board, the card id style and the log filter.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. An explicit path (`Config::load_from`)
//! 2. Local config (`./cardwall.json5` or `./cardwall.json`)
//! 3. User config (`<config dir>/cardwall/config.json5` or `config.json`)
//! 4. Built-in defaults (the sample board)
//!
//! # Board Format
//!
//! ```json5
//! {
//!   // Columns in display order; card lists may be omitted
//!   "columns": [
//!     { "id": "todo", "title": "Todo", "cards": [{ "id": "t-1", "title": "First" }] },
//!     { "id": "done", "title": "Done" },
//!   ],
//!   // "timestamp" (default), "sequential" or "uuid"
//!   "id_style": "sequential",
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use cardwall_config::Config;
//!
//! # async fn example() -> cardwall_config::Result<()> {
//! let config = Config::load().await?;
//! let store = config.store()?;
//! println!("{} cards on the board", store.board().total_cards());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
