//! Shelfview - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Shelfview - browse the Open Library catalog in an infinitely scrolling card grid
#[derive(Parser, Debug)]
#[command(name = "shelfview")]
#[command(version)]
#[command(about = "Infinite-scroll book catalog for the terminal, backed by Open Library search")]
pub struct Args {
    /// Initial search query (defaults to the configured initial query)
    pub query: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Books requested per page (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Quiet period in milliseconds before a typed query is searched
    #[arg(long)]
    pub debounce_ms: Option<u64>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = shelfview::config::load_config_with_precedence(args.config.clone())?;
        let merged = shelfview::config::merge_config(config_file);
        let with_env = shelfview::config::apply_env_overrides(merged);
        shelfview::config::apply_cli_overrides(
            with_env,
            args.query.clone(),
            args.page_size,
            args.debounce_ms,
        )
    };

    shelfview::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    shelfview::view::run(&config, args.no_color)?;

    Ok(())
}
