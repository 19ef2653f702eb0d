//! Generation orchestrator.
//!
//! Runs the fetch step for every registry entry and only then writes the
//! constants file, so a failed fetch never touches the destination.

use crate::aggregator::{fetch_all, AggregatedChains};
use crate::config::SyncConfig;
use crate::fetcher::{ChainSource, HttpChainSource};
use crate::writer::write_chain_const;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;

/// Fetch all configured chains over HTTP and write the constants file
pub fn run(config: &SyncConfig) -> Result<AggregatedChains> {
    let source = HttpChainSource::new(config.source_url.clone(), config.timeout)?;
    run_with_source(config, &source)
}

/// Same as [`run`], with the chain metadata coming from `source`
pub fn run_with_source<S>(config: &SyncConfig, source: &S) -> Result<AggregatedChains>
where
    S: ChainSource + ?Sized,
{
    info!("Fetching chain data...");
    info!("    Source: {}", config.source_url);
    info!("    Dest: {:?}", config.output);

    // Every fetch must succeed before the destination is opened
    let chains = fetch_all(&config.registry, source).wrap_err("Failed to fetch chain data")?;

    // Overwrite the generated file in place
    write_chain_const(&chains, &config.output)
        .wrap_err_with(|| format!("Failed to write '{}'", config.output.display()))?;

    info!("Generated {} networks across {} ecosystems", chains.len(), chains.ecosystems.len());
    Ok(chains)
}
