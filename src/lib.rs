// ==============================================================================
// lib.rs - Beeline Converter Library
// ==============================================================================
// Description: Library interface for Beeline GRN conversion modules
// Author: Matt Barham
// Created: 2026-08-12
// Modified: 2026-08-29
// Version: 1.0.0
// ==============================================================================

pub mod parsers;
pub mod models;
pub mod converter;
pub mod metadata;
pub mod codegen;
pub mod generator;
