use clap::Parser;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::path::PathBuf;
use std::time::Duration;

use chainrpc::config::{SyncConfig, DEFAULT_OUTPUT};
use chainrpc::fetcher::SOURCE_URL;
use chainrpc::orchestrator;

/// Regenerate the public chain RPC constants from ethereum-lists/chains
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL holding the eip155-<chain id>.json files
    #[arg(long, default_value = SOURCE_URL)]
    source_url: String,

    /// Path of the generated constants file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// YAML registry replacing the built-in ecosystem/network table
    #[arg(short, long)]
    registry: Option<PathBuf>,

    /// Per-request timeout in seconds (no timeout by default)
    #[arg(long)]
    timeout: Option<u64>,
}

impl Args {
    fn into_config(self) -> Result<SyncConfig> {
        let mut config = SyncConfig::default()
            .with_source_url(self.source_url)
            .with_output(self.output)
            .with_timeout(self.timeout.map(Duration::from_secs));

        if let Some(path) = &self.registry {
            config = config.with_registry_file(path)?;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments
    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Starting chainrpc v{}", env!("CARGO_PKG_VERSION"));

    // Resolve defaults and the optional registry file
    let config = args.into_config()?;

    // Fetch every chain, then regenerate the constants file
    orchestrator::run(&config)?;

    info!("Chain RPC generation completed successfully");
    Ok(())
}
