// ==============================================================================
// metadata.rs - Dataset Metadata Table
// ==============================================================================
// Description: Filename-keyed metadata for the known Beeline benchmark datasets
// Author: Matt Barham
// Created: 2026-08-12
// Modified: 2026-08-29
// Version: 1.0.0
// ==============================================================================

use std::collections::HashMap;

use crate::models::DatasetMeta;

/// Immutable filename -> metadata lookup table
///
/// Built once at startup and passed into the generator as configuration so
/// tests can substitute their own tables. Keys are exact, case-sensitive
/// CSV filenames (e.g., "dyn-BFC.csv").
#[derive(Debug, Clone, Default)]
pub struct MetadataTable {
    entries: HashMap<String, DatasetMeta>,
}

fn meta(name: &str, organism: &str, description: &str) -> DatasetMeta {
    DatasetMeta {
        name: name.to_string(),
        organism: organism.to_string(),
        description: description.to_string(),
    }
}

impl MetadataTable {
    /// Empty table; every lookup falls back to defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from explicit (filename, metadata) pairs
    pub fn from_entries(entries: impl IntoIterator<Item = (String, DatasetMeta)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Metadata for the ten Beeline benchmark networks shipped with the app
    pub fn builtin() -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            "dyn-BFC.csv".to_string(),
            meta("dyn-BFC", "Synthetic", "Bifurcating-Converging synthetic GRN"),
        );
        entries.insert(
            "dyn-BF.csv".to_string(),
            meta("dyn-BF", "Synthetic", "Bifurcating synthetic GRN"),
        );
        entries.insert(
            "dyn-CY.csv".to_string(),
            meta("dyn-CY", "Synthetic", "Cyclic synthetic GRN"),
        );
        entries.insert(
            "dyn-LI.csv".to_string(),
            meta(
                "dyn-LI",
                "Synthetic",
                "Long linear synthetic GRN with terminal feedback repression",
            ),
        );
        entries.insert(
            "dyn-LL.csv".to_string(),
            meta("dyn-LL", "Synthetic", "Long linear synthetic GRN"),
        );
        entries.insert(
            "dyn-TF.csv".to_string(),
            meta("dyn-TF", "Synthetic", "Synthetic transcription factor hub network"),
        );
        entries.insert(
            "mCAD.csv".to_string(),
            meta("mCAD", "Mouse", "Mouse cortical arealization gene regulatory network"),
        );
        entries.insert(
            "VSC.csv".to_string(),
            meta("VSC", "Mouse", "Ventral spinal cord gene regulatory network"),
        );
        entries.insert(
            "HSC.csv".to_string(),
            meta("HSC", "Mouse", "Hematopoietic stem cell gene regulatory network"),
        );
        entries.insert(
            "GSD.csv".to_string(),
            meta("GSD", "Human", "Gonadal sex determination gene regulatory network"),
        );
        Self { entries }
    }

    /// Look up metadata for a CSV filename
    ///
    /// # Arguments
    /// * `file_name` - Exact CSV filename (case- and format-sensitive)
    /// * `id` - Derived dataset identifier, used as the fallback name
    ///
    /// Unknown filenames fall back to `{ name: id, organism: "Unknown",
    /// description: "" }`; a miss is never an error.
    pub fn lookup(&self, file_name: &str, id: &str) -> DatasetMeta {
        self.entries
            .get(file_name)
            .cloned()
            .unwrap_or_else(|| meta(id, "Unknown", ""))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
