//! cardwall - an in-memory card wall editor.
//!
//! This is the main binary: it loads the board configuration and either
//! prints the board or replays a message script against it. `init` writes a
//! starter configuration instead.

use anyhow::Context;
use cardwall::cli::{Cli, Commands};
use cardwall::{Snapshot, init_config, logging, replay};
use cardwall_config::Config;
use cardwall_session::AppState;
use clap::Parser;
use tokio::io::{AsyncBufRead, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Init { force } = cli.command {
        logging::init_tracing(None);
        let path = init_config(cli.config.as_deref(), force)?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().await.context("failed to load config")?,
    };
    logging::init_tracing(config.log_filter.as_deref());

    let mut state = AppState::new(config.store()?);

    if let Commands::Replay { script } = &cli.command {
        let reader: Box<dyn AsyncBufRead + Unpin> = match script {
            Some(path) => {
                let file = tokio::fs::File::open(path)
                    .await
                    .with_context(|| format!("failed to open {}", path.display()))?;
                Box::new(BufReader::new(file))
            }
            None => Box::new(BufReader::new(tokio::io::stdin())),
        };
        replay(&mut state, reader).await?;
    }

    let json = serde_json::to_string_pretty(&Snapshot::of(&state))?;
    println!("{json}");
    Ok(())
}
