//! Chain metadata fetching.
//!
//! A [`ChainSource`] turns a chain id into a validated [`ChainRecord`]. The
//! production source is [`HttpChainSource`], which issues one blocking GET per
//! chain against the `ethereum-lists/chains` raw data directory. There is no
//! retry: the first failure is returned to the caller.

use crate::chain::ChainRecord;
use crate::registry::ChainId;
use log::{debug, info};
use reqwest::blocking::Client;
use std::time::Duration;

/// Raw `_data/chains/` directory of the `ethereum-lists/chains` repository
pub const SOURCE_URL: &str = "https://raw.githubusercontent.com/ethereum-lists/chains/master/_data/chains/";

/// Errors that can occur while fetching a chain record
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to fetch {url}: status {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to fetch {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid chain data from {url}: {source}")]
    Validation {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Anything that can resolve a chain id to its metadata
pub trait ChainSource {
    fn fetch(&self, chain_id: ChainId) -> Result<ChainRecord, FetchError>;
}

impl<F> ChainSource for F
where
    F: Fn(ChainId) -> Result<ChainRecord, FetchError>,
{
    fn fetch(&self, chain_id: ChainId) -> Result<ChainRecord, FetchError> {
        self(chain_id)
    }
}

/// Build the lookup URL for a chain id under `base_url`
pub fn chain_url(base_url: &str, chain_id: ChainId) -> String {
    if base_url.ends_with('/') {
        format!("{}eip155-{}.json", base_url, chain_id)
    } else {
        format!("{}/eip155-{}.json", base_url, chain_id)
    }
}

/// Fetches chain records over HTTP
#[derive(Debug, Clone)]
pub struct HttpChainSource {
    base_url: String,
    client: Client,
}

impl HttpChainSource {
    /// Create a source for `base_url`. `timeout` of `None` keeps the client default.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(FetchError::Client)?;
        Ok(Self::with_client(base_url, client))
    }

    /// Create a source that uses an already configured client
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }
}

impl ChainSource for HttpChainSource {
    fn fetch(&self, chain_id: ChainId) -> Result<ChainRecord, FetchError> {
        let url = chain_url(&self.base_url, chain_id);

        info!("GET {}", url);
        // Single attempt, no retry
        let response = self.client.get(&url).send().map_err(|source| FetchError::Transport {
            url: url.clone(),
            source,
        })?;

        // Any 2xx counts as found, not only 200
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|source| FetchError::Transport {
            url: url.clone(),
            source,
        })?;
        debug!("Received {} bytes from {}", body.len(), url);

        ChainRecord::from_json(&body).map_err(|source| FetchError::Validation { url, source })
    }
}
