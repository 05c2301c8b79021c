// backend/tellme-cli/src/main.rs

mod cli;
mod commands;

use std::sync::Arc;
use clap::Parser;
use shared_kernel::infrastructure::rest::{MemorySessionStore, RestContext};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // --- 1. CONFIGURATION (TELLME_API_URL / TELLME_API_KEY / TELLME_API_TIMEOUT_SECS) ---
    let mut builder = RestContext::builder()?;
    if let Some(token) = cli.access_token {
        builder = builder.with_session(Arc::new(MemorySessionStore::with_token(token)));
    }
    let ctx = builder.build()?;
    let config = ctx.config();
    tracing::debug!(url = %config.url, timeout = ?config.timeout, "Backend configured");

    // --- 2. DISPATCH ---
    match cli.command {
        Command::Profile(cmd) => commands::profile::run(ctx, cmd).await,
        Command::Problems(cmd) => commands::problem::run(ctx, cmd).await,
        Command::Comments(cmd) => commands::comment::run(ctx, cmd).await,
        Command::Bookmarks(cmd) => commands::bookmark::run(ctx, cmd).await,
        Command::Taxonomy(cmd) => commands::taxonomy::run(ctx, cmd).await,
        Command::Suggestions(cmd) => commands::suggestion::run(ctx, cmd).await,
        Command::Reports(cmd) => commands::report::run(ctx, cmd).await,
        Command::Notifications(cmd) => commands::notification::run(ctx, cmd).await,
    }
}
