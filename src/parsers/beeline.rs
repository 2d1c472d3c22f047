// ==============================================================================
// beeline.rs - Beeline Edge-List Parser
// ==============================================================================
// Description: Parser for Beeline GRN edge-list CSV files
// Author: Matt Barham
// Created: 2026-08-12
// Modified: 2026-08-29
// Version: 1.0.0
// ==============================================================================
// Format: Comma-delimited text with a single header row
// Example:
//   Gene1,Gene2,Type
//   g1,g2,+
//   g2,g3,-
//   g3,g1,+
// ==============================================================================

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

use crate::models::{BeelineEdge, EdgeType};

/// Parser for Beeline edge-list CSV files
///
/// The format is naive comma-separated text: no quoting or escaping is
/// supported, so commas inside gene identifiers are not representable.
#[derive(Debug, Clone, Default)]
pub struct BeelineParser;

/// Errors that can occur during Beeline CSV parsing
#[derive(Error, Debug)]
pub enum BeelineParseError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Expected at least 3 comma-separated fields at line {line}, found {found}")]
    ShortLine { line: usize, found: usize },
}

impl BeelineParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a Beeline edge-list CSV file
    ///
    /// # Arguments
    /// * `path` - Path to the edge-list CSV file
    ///
    /// # Returns
    /// * `Ok(Vec<BeelineEdge>)` - Edges in input order
    /// * `Err(BeelineParseError)` - Parse error
    ///
    /// # Format
    /// The first non-blank line is a header and is discarded regardless of
    /// its content. Every following non-blank line is split on commas into
    /// source, target, and sign; fields beyond the third are ignored. The
    /// sign maps to activation only when it is exactly "+" after trimming;
    /// every other value maps to repression.
    ///
    /// Blank and whitespace-only lines are skipped without consuming the
    /// header. Both LF and CRLF line endings are accepted.
    pub fn parse(&self, path: impl AsRef<Path>) -> Result<Vec<BeelineEdge>, BeelineParseError> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);

        let mut edges = Vec::new();
        let mut line_number = 0;
        let mut header_seen = false;

        for line_result in reader.lines() {
            line_number += 1;
            let line = line_result?;
            // BufRead::lines strips LF but leaves a trailing CR on CRLF input
            let line = line.strip_suffix('\r').unwrap_or(&line);

            if line.trim().is_empty() {
                continue;
            }

            if !header_seen {
                header_seen = true;
                continue;
            }

            edges.push(self.parse_line(line, line_number)?);
        }

        Ok(edges)
    }

    /// Parse a single edge line
    fn parse_line(&self, line: &str, line_number: usize) -> Result<BeelineEdge, BeelineParseError> {
        let fields: Vec<&str> = line.split(',').collect();

        if fields.len() < 3 {
            return Err(BeelineParseError::ShortLine {
                line: line_number,
                found: fields.len(),
            });
        }

        Ok(BeelineEdge {
            source: fields[0].trim().to_string(),
            target: fields[1].trim().to_string(),
            edge_type: EdgeType::from_sign(fields[2]),
        })
    }
}
