// ==============================================================================
// converter.rs - Beeline CSV to JSON Conversion
// ==============================================================================
// Description: Converts one Beeline edge-list CSV into a frontend JSON file
// Author: Matt Barham
// Created: 2026-08-12
// Modified: 2026-08-29
// Version: 1.0.0
// ==============================================================================

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::models::BeelineEdge;
use crate::parsers::BeelineParser;

/// Convert a Beeline CSV file to JSON suitable for the Explorer frontend
///
/// # Arguments
/// * `csv_path` - Path to the input edge-list CSV
/// * `json_path` - Where to write the JSON file (overwritten if present)
///
/// # Returns
/// * The parsed edges, in input order, for further use by the caller
///
/// The output is a pretty-printed (2-space indented) JSON array of
/// `{ source, target, type }` objects. Serialization is deterministic and
/// order-preserving, so re-serializing the parsed output reproduces the
/// file byte for byte.
pub fn convert_beeline_csv(
    csv_path: impl AsRef<Path>,
    json_path: impl AsRef<Path>,
) -> Result<Vec<BeelineEdge>> {
    let csv_path = csv_path.as_ref();
    let json_path = json_path.as_ref();

    let edges = BeelineParser::new()
        .parse(csv_path)
        .with_context(|| format!("Failed to parse Beeline CSV {:?}", csv_path))?;

    let json = serde_json::to_string_pretty(&edges)?;
    std::fs::write(json_path, json)
        .with_context(|| format!("Failed to write JSON output {:?}", json_path))?;

    info!(
        "Converted: {:?} -> {:?} ({} edges)",
        csv_path.file_name().unwrap_or_default(),
        json_path.file_name().unwrap_or_default(),
        edges.len()
    );

    Ok(edges)
}
