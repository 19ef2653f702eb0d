//! # chainrpc - public chain RPC endpoint generator
//!
//! This library regenerates a Rust constants file listing the public RPC
//! endpoints of a fixed set of EVM networks, using the chain metadata
//! published in the `ethereum-lists/chains` repository.
//!
//! ## Overview
//!
//! A run is a single linear pipeline:
//!
//! 1. **Registry**: the ecosystem -> network -> chain id table to fetch
//! 2. **Fetcher**: one blocking GET of `eip155-<chain id>.json` per network,
//!    validated into a [`chain::ChainRecord`], keeping only `http`/`https`
//!    endpoints
//! 3. **Aggregator**: collects the records in registry order
//! 4. **Writer**: renders the endpoint lists as a nested literal constant,
//!    omitting `${...}` template endpoints
//!
//! The first failure aborts the run. Nothing is written unless every fetch
//! succeeded, and each successful run fully overwrites the previous output.
//!
//! ## Architecture
//!
//! - `registry`: chain id table and YAML registry loading
//! - `chain`: chain metadata schema and endpoint filtering
//! - `fetcher`: `ChainSource` trait and the HTTP implementation
//! - `aggregator`: fetching every registry entry
//! - `writer`: constants file rendering
//! - `config`: run settings
//! - `orchestrator`: end-to-end run
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chainrpc::{config::SyncConfig, orchestrator};
//!
//! let config = SyncConfig::default().with_output("src/public_chain_rpcs.rs");
//! let chains = orchestrator::run(&config)?;
//! println!("generated {} networks", chains.len());
//! # Ok::<(), color_eyre::eyre::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Each stage has its own `thiserror` error type (`FetchError`,
//! `WriteError`, `RegistryError`). The orchestrator wraps them into
//! `color_eyre` reports with context.

pub mod aggregator;
pub mod chain;
pub mod config;
pub mod fetcher;
pub mod orchestrator;
pub mod registry;
pub mod writer;
