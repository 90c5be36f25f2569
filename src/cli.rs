//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// cardwall - an in-memory card wall driven by drag and edit messages.
///
/// The initial board comes from `./cardwall.json5`, `./cardwall.json` or the
/// user config directory, falling back to a sample board. Set `RUST_LOG` to
/// see what each message did.
#[derive(Parser, Debug)]
#[command(name = "cardwall")]
#[command(version)]
#[command(about = "An in-memory card wall driven by drag and edit messages")]
pub struct Cli {
    /// Read configuration from this file instead of searching for one
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the default configuration to --config or the user config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the initial board as JSON
    Show,

    /// Apply newline-delimited JSON messages and print the final board
    Replay {
        /// Message script; reads stdin when omitted
        script: Option<PathBuf>,
    },
}
