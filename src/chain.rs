//! Chain metadata records as published by `ethereum-lists/chains`.

use crate::registry::ChainId;
use serde::Deserialize;
use std::collections::HashMap;

/// URI schemes kept in a record's endpoint list
pub const INCLUDE_PROTOCOLS: &[&str] = &["http", "https"];

/// Metadata for one network, validated against the `eip155-<id>.json` schema
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainRecord {
    pub name: String,
    pub chain: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub rpc: Vec<String>,
    #[serde(default)]
    pub features: Option<Vec<HashMap<String, String>>>,
    pub faucets: Vec<String>,
    pub native_currency: HashMap<String, serde_json::Value>,
    #[serde(rename = "infoURL")]
    pub info_url: String,
    pub short_name: String,
    pub chain_id: ChainId,
    pub network_id: u64,
    #[serde(default)]
    pub slip44: Option<u64>,
    #[serde(default)]
    pub ens: Option<HashMap<String, String>>,
    pub explorers: Vec<HashMap<String, String>>,
}

impl ChainRecord {
    /// Parse a JSON body and drop endpoints with unsupported schemes
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let record: ChainRecord = serde_json::from_str(body)?;
        Ok(record.with_supported_endpoints())
    }

    /// Keep only endpoints whose scheme is in [`INCLUDE_PROTOCOLS`]
    pub fn with_supported_endpoints(mut self) -> Self {
        self.rpc.retain(|rpc| is_supported_endpoint(rpc));
        self
    }
}

/// Whether the text before the first `:` is an allowed scheme
pub fn is_supported_endpoint(rpc: &str) -> bool {
    let scheme = rpc.split(':').next().unwrap_or_default();
    INCLUDE_PROTOCOLS.contains(&scheme)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GNOSIS_JSON: &str = r#"{
  "name": "Gnosis",
  "chain": "GNO",
  "icon": "gnosis",
  "rpc": [
    "https://rpc.gnosischain.com",
    "wss://rpc.gnosischain.com/wss",
    "https://gnosis-mainnet.public.blastapi.io",
    "http://localhost:8545",
    "ws://localhost:8546"
  ],
  "features": [{ "name": "EIP1559" }],
  "faucets": ["https://gnosisfaucet.com"],
  "nativeCurrency": { "name": "xDAI", "symbol": "XDAI", "decimals": 18 },
  "infoURL": "https://docs.gnosischain.com",
  "shortName": "gno",
  "chainId": 100,
  "networkId": 100,
  "slip44": 700,
  "explorers": [
    { "name": "gnosisscan", "url": "https://gnosisscan.io", "standard": "EIP3091" }
  ]
}"#;

    #[test]
    fn test_parse_and_filter() {
        let record = ChainRecord::from_json(GNOSIS_JSON).unwrap();
        assert_eq!(record.name, "Gnosis");
        assert_eq!(record.chain_id, 100);
        assert_eq!(record.slip44, Some(700));
        assert_eq!(record.ens, None);
        assert_eq!(record.info_url, "https://docs.gnosischain.com");
        assert_eq!(record.native_currency["decimals"], serde_json::json!(18));
        assert_eq!(
            record.rpc,
            vec![
                "https://rpc.gnosischain.com",
                "https://gnosis-mainnet.public.blastapi.io",
                "http://localhost:8545",
            ]
        );
    }

    #[test]
    fn test_missing_rpc_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(GNOSIS_JSON).unwrap();
        value.as_object_mut().unwrap().remove("rpc");

        let err = ChainRecord::from_json(&value.to_string()).unwrap_err();
        assert!(err.to_string().contains("rpc"), "unexpected error: {}", err);
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let body = GNOSIS_JSON.replace("\"chainId\": 100", "\"chainId\": \"one hundred\"");
        assert!(ChainRecord::from_json(&body).is_err());
    }

    #[test]
    fn test_supported_endpoint_schemes() {
        assert!(is_supported_endpoint("https://a"));
        assert!(is_supported_endpoint("http://c"));
        assert!(!is_supported_endpoint("wss://b"));
        assert!(!is_supported_endpoint("ws://b"));
        assert!(!is_supported_endpoint("HTTPS://upper"));
        assert!(!is_supported_endpoint(""));
        assert!(!is_supported_endpoint("no-scheme"));
    }

    #[test]
    fn test_filter_keeps_order_and_duplicates() {
        let record = ChainRecord::from_json(GNOSIS_JSON).unwrap();
        let record = ChainRecord {
            rpc: vec![
                "https://a".to_string(),
                "wss://b".to_string(),
                "http://c".to_string(),
                "https://a".to_string(),
            ],
            ..record
        }
        .with_supported_endpoints();
        assert_eq!(record.rpc, vec!["https://a", "http://c", "https://a"]);
    }
}
