// ==============================================================================
// parsers/mod.rs - File parser modules
// ==============================================================================
// Description: Parsers for GRN edge-list file formats
// Author: Matt Barham
// Created: 2026-08-12
// Modified: 2026-08-29
// Version: 1.0.0
// ==============================================================================

pub mod beeline;

pub use beeline::{BeelineParseError, BeelineParser};
