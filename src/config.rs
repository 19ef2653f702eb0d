//! Run configuration.
//!
//! Every field has a built-in default, so a run with no CLI flags fetches the
//! built-in registry from `ethereum-lists/chains` and writes
//! [`DEFAULT_OUTPUT`].

use crate::fetcher::SOURCE_URL;
use crate::registry::{self, Registry};
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default location of the generated constants file
pub const DEFAULT_OUTPUT: &str = "generated/public_chain_rpcs.rs";

/// Settings for a single generation run
#[derive(Debug, Clone, PartialEq)]
pub struct SyncConfig {
    /// Base URL holding the `eip155-<id>.json` files
    pub source_url: String,
    /// Path of the generated constants file
    pub output: PathBuf,
    /// Networks to fetch
    pub registry: Registry,
    /// Per-request timeout. `None` leaves the HTTP client default in place.
    pub timeout: Option<Duration>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            source_url: SOURCE_URL.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            registry: Registry::builtin(),
            timeout: None,
        }
    }
}

impl SyncConfig {
    pub fn with_source_url(mut self, source_url: impl Into<String>) -> Self {
        self.source_url = source_url.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    /// Replace the registry with one loaded from a YAML file
    pub fn with_registry_file(self, path: &Path) -> Result<Self> {
        let registry = registry::load_registry(path)
            .wrap_err_with(|| format!("Failed to load registry '{}'", path.display()))?;
        Ok(self.with_registry(registry))
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}
