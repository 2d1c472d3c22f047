// ==============================================================================
// models.rs - Beeline Data Models
// ==============================================================================
// Description: Data structures for Beeline edge lists and dataset registry entries
// Author: Matt Barham
// Created: 2026-08-12
// Modified: 2026-08-29
// Version: 1.0.0
// ==============================================================================

use serde::{Deserialize, Serialize};

/// Regulatory relationship between two genes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeType {
    /// Source gene activates the target gene ("+" sign in Beeline CSVs)
    Activation,
    /// Source gene represses the target gene (any other sign)
    Repression,
}

impl EdgeType {
    /// Map a Beeline sign token to an edge type
    ///
    /// The mapping is strictly binary: a trimmed `"+"` is activation and
    /// every other value (`"-"`, empty, garbage) is repression. There is
    /// no distinct "unknown" category.
    pub fn from_sign(sign: &str) -> Self {
        if sign.trim() == "+" {
            EdgeType::Activation
        } else {
            EdgeType::Repression
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeType::Activation => "activation",
            EdgeType::Repression => "repression",
        }
    }
}

/// Single directed edge in a gene regulatory network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeelineEdge {
    /// Regulator gene identifier
    pub source: String,

    /// Regulated gene identifier
    pub target: String,

    /// Regulatory relationship
    #[serde(rename = "type")]
    pub edge_type: EdgeType,
}

/// Display metadata for one known Beeline dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetMeta {
    /// Human-readable dataset name (e.g., "dyn-LI")
    pub name: String,

    /// Organism label (e.g., "Mouse", "Human", "Synthetic")
    pub organism: String,

    /// One-line dataset description
    pub description: String,
}

/// Registry entry for one converted dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetEntry {
    /// Import-safe identifier derived from the CSV filename
    /// (stem, hyphens removed, lowercased: "dyn-BFC.csv" -> "dynbfc")
    pub id: String,

    /// Human-readable dataset name
    pub name: String,

    /// Organism label
    pub organism: String,

    /// One-line dataset description
    pub description: String,

    /// Basename of the produced JSON file (e.g., "dyn-LI.json")
    #[serde(rename = "fileName")]
    pub file_name: String,
}

impl DatasetEntry {
    /// Derive the registry identifier from a CSV filename
    ///
    /// Strips the `.csv` extension, removes every hyphen, and lowercases
    /// the result. Two filenames that collide after this transform produce
    /// two entries with the same identifier; collisions are not detected.
    pub fn derive_id(file_name: &str) -> String {
        let stem = file_name.strip_suffix(".csv").unwrap_or(file_name);
        stem.replace('-', "").to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_type_from_sign() {
        assert_eq!(EdgeType::from_sign("+"), EdgeType::Activation);
        assert_eq!(EdgeType::from_sign(" + "), EdgeType::Activation);
        assert_eq!(EdgeType::from_sign("-"), EdgeType::Repression);
        assert_eq!(EdgeType::from_sign(""), EdgeType::Repression);
        assert_eq!(EdgeType::from_sign("++"), EdgeType::Repression);
        assert_eq!(EdgeType::from_sign("garbage"), EdgeType::Repression);
    }

    #[test]
    fn test_edge_type_str() {
        assert_eq!(EdgeType::Activation.as_str(), "activation");
        assert_eq!(EdgeType::Repression.as_str(), "repression");
    }

    #[test]
    fn test_edge_serializes_with_type_field() {
        let edge = BeelineEdge {
            source: "A".to_string(),
            target: "B".to_string(),
            edge_type: EdgeType::Activation,
        };
        let json = serde_json::to_string(&edge).unwrap();
        assert_eq!(
            json,
            r#"{"source":"A","target":"B","type":"activation"}"#
        );
    }

    #[test]
    fn test_derive_id() {
        assert_eq!(DatasetEntry::derive_id("dyn-BFC.csv"), "dynbfc");
        assert_eq!(DatasetEntry::derive_id("GSD.csv"), "gsd");
        assert_eq!(DatasetEntry::derive_id("dyn-LI.csv"), "dynli");
        // No extension still produces a usable id
        assert_eq!(DatasetEntry::derive_id("mCAD"), "mcad");
    }

    #[test]
    fn test_entry_serializes_file_name_camel_case() {
        let entry = DatasetEntry {
            id: "gsd".to_string(),
            name: "GSD".to_string(),
            organism: "Human".to_string(),
            description: "Gonadal sex determination gene regulatory network".to_string(),
            file_name: "GSD.json".to_string(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(r#""fileName":"GSD.json""#));
    }
}
