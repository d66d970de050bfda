use std::io;

use anyhow::Result;
use tempo_uci::UciEngine;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // stdout carries the protocol, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "tempo starting");
    let stdin = io::stdin();
    let stdout = io::stdout();
    UciEngine::new(stdin.lock(), stdout.lock()).run()?;
    Ok(())
}
