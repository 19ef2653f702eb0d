//! # Constants File Writer
//!
//! Serializes fetched chains into a Rust source file holding a single nested
//! literal:
//!
//! ```text
//! // This file is auto-generated by chainrpc
//! // 2026-01-01 00:00:00.000000 UTC
//! // Do not edit this file directly.
//! pub static PUBLIC_CHAIN_RPCS: &[(&str, &[(&str, &[&str])])] = &[
//!     (
//!         "ethereum",
//!         &[
//!             (
//!                 "mainnet",
//!                 &[
//!                     "https://eth.example.org",
//!                 ],
//!             ),
//!         ],
//!     ),
//! ];
//! ```
//!
//! Only each record's endpoint list is written. Endpoints containing a `${`
//! placeholder (e.g. `https://mainnet.infura.io/v3/${INFURA_API_KEY}`) are
//! skipped. The destination is truncated and rewritten in place.

use crate::aggregator::AggregatedChains;
use chrono::{DateTime, Utc};
use log::info;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Name of the generated constant
pub const CONST_NAME: &str = "PUBLIC_CHAIN_RPCS";

/// Marker for templated endpoints that need substitution before use
const PLACEHOLDER_MARKER: &str = "${";

/// Errors that can occur while writing the constants file
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Whether an endpoint is usable as a literal (no `${...}` template)
pub fn is_literal_endpoint(rpc: &str) -> bool {
    !rpc.contains(PLACEHOLDER_MARKER)
}

/// Header timestamp, e.g. `2026-10-17 09:30:12.123456 UTC`
pub fn stamp(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d %H:%M:%S%.6f UTC").to_string()
}

/// Render the constants file into `out`
pub fn render_chain_const<W: Write>(
    chains: &AggregatedChains,
    generated_at: DateTime<Utc>,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "// This file is auto-generated by {}", env!("CARGO_PKG_NAME"))?;
    writeln!(out, "// {}", stamp(generated_at))?;
    writeln!(out, "// Do not edit this file directly.")?;
    writeln!(out, "pub static {}: &[(&str, &[(&str, &[&str])])] = &[", CONST_NAME)?;
    for ecosystem in &chains.ecosystems {
        writeln!(out, "    (")?;
        writeln!(out, "        {:?},", ecosystem.name)?;
        writeln!(out, "        &[")?;
        for (network, record) in &ecosystem.networks {
            writeln!(out, "            (")?;
            writeln!(out, "                {:?},", network)?;
            writeln!(out, "                &[")?;
            for rpc in record.rpc.iter().filter(|rpc| is_literal_endpoint(rpc)) {
                writeln!(out, "                    {:?},", rpc)?;
            }
            writeln!(out, "                ],")?;
            writeln!(out, "            ),")?;
        }
        writeln!(out, "        ],")?;
        writeln!(out, "    ),")?;
    }
    writeln!(out, "];")?;
    Ok(())
}

/// Overwrite `path` with the rendered constants file, stamped with the current time
pub fn write_chain_const(chains: &AggregatedChains, path: &Path) -> Result<(), WriteError> {
    write_chain_const_at(chains, path, Utc::now())
}

/// Overwrite `path` with the rendered constants file
pub fn write_chain_const_at(
    chains: &AggregatedChains,
    path: &Path,
    generated_at: DateTime<Utc>,
) -> Result<(), WriteError> {
    let io_err = |source: io::Error| WriteError::Io {
        path: path.display().to_string(),
        source,
    };

    // Create missing parent directories
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    // Truncate and rewrite, no temp file
    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    render_chain_const(chains, generated_at, &mut out).map_err(io_err)?;
    out.flush().map_err(io_err)?;

    info!("Wrote {} networks to {:?}", chains.len(), path);
    Ok(())
}
