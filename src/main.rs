use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use staffdesk::actions::Actions;
use staffdesk::config::{Config, LatencyConfig};
use staffdesk::console::{Console, Flow};
use staffdesk::logging::{init_tracing, LogTarget};
use staffdesk::storage::{FileStorage, LocalStorage, MemoryStorage};

/// Employee directory console.
#[derive(Debug, Parser)]
#[command(name = "staffdesk", version)]
struct Cli {
    /// Config file (default: the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Storage file for the session and theme
    #[arg(long)]
    storage: Option<PathBuf>,
    /// Keep the session and theme in memory only
    #[arg(long, conflicts_with = "storage")]
    ephemeral: bool,
    /// Answer service calls immediately
    #[arg(long)]
    no_latency: bool,
    /// Log to stderr instead of the STAFFDESK_LOG file
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(if cli.verbose {
        LogTarget::Stderr
    } else {
        LogTarget::FileFromEnv
    });

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load config")?;
    if cli.no_latency {
        config.latency = LatencyConfig::zero();
    }
    if let Some(path) = cli.storage {
        config.storage.path = Some(path);
    }

    let storage: Arc<dyn LocalStorage> = if cli.ephemeral {
        Arc::new(MemoryStorage::new())
    } else {
        let path = config.storage.resolved_path();
        tracing::info!(path = %path.display(), "Using storage file");
        Arc::new(FileStorage::new(path))
    };

    let actions = Actions::from_config(&config, storage);
    let mut console = Console::new(actions, io::stdout());
    console.start().await?;
    run(&mut console).await
}

async fn run(console: &mut Console<io::Stdout>) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt()?;
        let line = tokio::select! {
            line = lines.next_line() => line.context("Failed to read input")?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(line) = line else {
            break;
        };
        if console.handle_line(&line).await? == Flow::Quit {
            break;
        }
    }
    tracing::info!("Console closed");
    Ok(())
}

fn prompt() -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()
}
