//! # Chain Registry Module
//!
//! The registry is the hand-maintained table of networks whose public RPC
//! endpoints get generated. It maps an ecosystem name (a chain family such as
//! `ethereum` or `polygon`) to its networks, and each network to the numeric
//! EIP-155 chain id used to look it up in `ethereum-lists/chains`.
//!
//! Iteration order is insertion order, never sorted. The generated constants
//! file follows the same order, so reordering this table reorders the output.
//!
//! ## Registry File Format
//!
//! The built-in table can be replaced by a YAML file:
//!
//! ```yaml
//! ecosystems:
//!   - name: ethereum
//!     networks:
//!       - name: mainnet
//!         chain_id: 1
//!       - name: sepolia
//!         chain_id: 11155111
//! ```

use log::info;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

/// Numeric EIP-155 chain identifier
pub type ChainId = u64;

/// Built-in ecosystem -> network -> chain id table
pub const CHAIN_IDS: &[(&str, &[(&str, ChainId)])] = &[
    ("base", &[("mainnet", 8453), ("sepolia", 84532)]),
    ("ethereum", &[("mainnet", 1), ("goerli", 5), ("sepolia", 11155111)]),
    ("gnosis", &[("mainnet", 100)]),
    ("polygon", &[("mainnet", 137), ("mumbai", 80001)]),
    ("polygon-zkevm", &[("mainnet", 1101), ("testnet", 1442)]),
];

/// Errors raised while loading or checking a registry
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Failed to open registry file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse registry file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Duplicate ecosystem '{0}' in registry")]
    DuplicateEcosystem(String),

    #[error("Duplicate network '{network}' in ecosystem '{ecosystem}'")]
    DuplicateNetwork { ecosystem: String, network: String },

    #[error("Ecosystem '{0}' has no networks")]
    EmptyEcosystem(String),

    #[error("Registry contains empty name in ecosystem '{0}'")]
    EmptyName(String),
}

/// A single network within an ecosystem
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NetworkEntry {
    pub name: String,
    pub chain_id: ChainId,
}

/// An ecosystem and its networks, in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EcosystemEntry {
    pub name: String,
    pub networks: Vec<NetworkEntry>,
}

/// Ordered ecosystem -> network -> chain id mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Registry {
    pub ecosystems: Vec<EcosystemEntry>,
}

impl Registry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in registry from [`CHAIN_IDS`]
    pub fn builtin() -> Self {
        CHAIN_IDS
            .iter()
            .flat_map(|(ecosystem, networks)| {
                networks
                    .iter()
                    .map(move |(network, chain_id)| (*ecosystem, *network, *chain_id))
            })
            .fold(Self::new(), |registry, (ecosystem, network, chain_id)| {
                registry.with_network(ecosystem, network, chain_id)
            })
    }

    /// Append a network, creating its ecosystem on first use
    pub fn with_network(mut self, ecosystem: &str, network: &str, chain_id: ChainId) -> Self {
        self.insert(ecosystem, network, chain_id);
        self
    }

    /// Append a network, creating its ecosystem on first use
    pub fn insert(&mut self, ecosystem: &str, network: &str, chain_id: ChainId) {
        let entry = NetworkEntry {
            name: network.to_string(),
            chain_id,
        };
        match self.ecosystems.iter_mut().find(|e| e.name == ecosystem) {
            Some(existing) => existing.networks.push(entry),
            None => self.ecosystems.push(EcosystemEntry {
                name: ecosystem.to_string(),
                networks: vec![entry],
            }),
        }
    }

    /// Iterate `(ecosystem, network, chain_id)` in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, ChainId)> + '_ {
        self.ecosystems.iter().flat_map(|ecosystem| {
            ecosystem
                .networks
                .iter()
                .map(move |network| (ecosystem.name.as_str(), network.name.as_str(), network.chain_id))
        })
    }

    /// Total number of networks
    pub fn len(&self) -> usize {
        self.ecosystems.iter().map(|e| e.networks.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check names are non-empty and unique, and that no ecosystem is empty
    pub fn validate(&self) -> Result<(), RegistryError> {
        let mut ecosystems = HashSet::new();
        for ecosystem in &self.ecosystems {
            if ecosystem.name.is_empty() {
                return Err(RegistryError::EmptyName(ecosystem.name.clone()));
            }
            if !ecosystems.insert(ecosystem.name.as_str()) {
                return Err(RegistryError::DuplicateEcosystem(ecosystem.name.clone()));
            }
            if ecosystem.networks.is_empty() {
                return Err(RegistryError::EmptyEcosystem(ecosystem.name.clone()));
            }

            let mut networks = HashSet::new();
            for network in &ecosystem.networks {
                if network.name.is_empty() {
                    return Err(RegistryError::EmptyName(ecosystem.name.clone()));
                }
                if !networks.insert(network.name.as_str()) {
                    return Err(RegistryError::DuplicateNetwork {
                        ecosystem: ecosystem.name.clone(),
                        network: network.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Load and validate a registry from a YAML file
pub fn load_registry(path: &Path) -> Result<Registry, RegistryError> {
    info!("Loading registry from: {:?}", path);

    // Open the registry file
    let file = File::open(path).map_err(|source| RegistryError::Io {
        path: path.display().to_string(),
        source,
    })?;

    // Parse the YAML content
    let registry: Registry = serde_yaml::from_reader(file).map_err(|source| RegistryError::Parse {
        path: path.display().to_string(),
        source,
    })?;

    // Validate the registry
    registry.validate()?;

    info!(
        "Loaded {} networks across {} ecosystems",
        registry.len(),
        registry.ecosystems.len()
    );
    Ok(registry)
}
