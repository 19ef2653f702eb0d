//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;

use chainrpc::chain::ChainRecord;
use chainrpc::fetcher::{ChainSource, FetchError};
use chainrpc::registry::ChainId;

/// A schema-conforming chain body with the given endpoints
pub fn chain_json(chain_id: ChainId, rpc: &[&str]) -> String {
    serde_json::json!({
        "name": format!("Test Chain {}", chain_id),
        "chain": "TEST",
        "icon": "test",
        "rpc": rpc,
        "features": [{ "name": "EIP155" }],
        "faucets": [],
        "nativeCurrency": { "name": "Test Ether", "symbol": "TETH", "decimals": 18 },
        "infoURL": "https://example.org",
        "shortName": format!("test{}", chain_id),
        "chainId": chain_id,
        "networkId": chain_id,
        "explorers": [{ "name": "explorer", "url": "https://explorer.example.org", "standard": "EIP3091" }]
    })
    .to_string()
}

/// In-memory source answering from canned `(status, body)` pairs
#[derive(Debug, Default)]
pub struct MockSource {
    responses: HashMap<ChainId, (u16, String)>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rpcs(mut self, chain_id: ChainId, rpc: &[&str]) -> Self {
        self.responses.insert(chain_id, (200, chain_json(chain_id, rpc)));
        self
    }

    pub fn with_response(mut self, chain_id: ChainId, status: u16, body: impl Into<String>) -> Self {
        self.responses.insert(chain_id, (status, body.into()));
        self
    }
}

impl ChainSource for MockSource {
    fn fetch(&self, chain_id: ChainId) -> Result<ChainRecord, FetchError> {
        let url = format!("mock://eip155-{}.json", chain_id);
        let (status, body) = self
            .responses
            .get(&chain_id)
            .cloned()
            .unwrap_or((404, String::from("404: Not Found")));
        if !(200..300).contains(&status) {
            return Err(FetchError::Status { url, status });
        }
        ChainRecord::from_json(&body).map_err(|source| FetchError::Validation { url, source })
    }
}

/// HTTP client that ignores proxy settings from the environment
pub fn local_client() -> reqwest::blocking::Client {
    reqwest::blocking::Client::builder().no_proxy().build().unwrap()
}
