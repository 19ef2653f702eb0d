//! Drives a [`ChainSource`] over every registry entry.

use crate::chain::ChainRecord;
use crate::fetcher::{ChainSource, FetchError};
use crate::registry::Registry;
use log::info;

/// Records fetched for one ecosystem, in registry order
#[derive(Debug, Clone, PartialEq)]
pub struct EcosystemChains {
    pub name: String,
    pub networks: Vec<(String, ChainRecord)>,
}

/// Ordered ecosystem -> network -> record mapping produced by [`fetch_all`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregatedChains {
    pub ecosystems: Vec<EcosystemChains>,
}

impl AggregatedChains {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record, creating the ecosystem entry on first use
    pub fn insert(&mut self, ecosystem: &str, network: &str, record: ChainRecord) {
        let entry = (network.to_string(), record);
        match self.ecosystems.iter_mut().find(|e| e.name == ecosystem) {
            Some(existing) => existing.networks.push(entry),
            None => self.ecosystems.push(EcosystemChains {
                name: ecosystem.to_string(),
                networks: vec![entry],
            }),
        }
    }

    /// Total number of records
    pub fn len(&self) -> usize {
        self.ecosystems.iter().map(|e| e.networks.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Fetch every network in `registry`, stopping at the first failure
pub fn fetch_all<S>(registry: &Registry, source: &S) -> Result<AggregatedChains, FetchError>
where
    S: ChainSource + ?Sized,
{
    let mut chains = AggregatedChains::new();
    for (ecosystem, network, chain_id) in registry.iter() {
        info!("Fetching chain {}:{} ({})", ecosystem, network, chain_id);
        let record = source.fetch(chain_id)?;
        chains.insert(ecosystem, network, record);
    }
    Ok(chains)
}
