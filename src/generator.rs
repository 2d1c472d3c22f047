// ==============================================================================
// generator.rs - Dataset Registry Generation Pipeline
// ==============================================================================
// Description: Converts a directory of Beeline CSVs and emits the registry module
// Author: Matt Barham
// Created: 2026-08-12
// Modified: 2026-08-29
// Version: 1.0.0
// ==============================================================================

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::codegen::render_datasets_module;
use crate::converter::convert_beeline_csv;
use crate::metadata::MetadataTable;
use crate::models::DatasetEntry;

/// Pipeline that converts every CSV in a directory and generates datasets.ts
pub struct DatasetGenerator {
    input_dir: PathBuf,
    output_dir: PathBuf,
    datasets_path: PathBuf,
    metadata: MetadataTable,
}

impl DatasetGenerator {
    pub fn new(
        input_dir: PathBuf,
        output_dir: PathBuf,
        datasets_path: PathBuf,
        metadata: MetadataTable,
    ) -> Self {
        Self {
            input_dir,
            output_dir,
            datasets_path,
            metadata,
        }
    }

    /// Run the full pipeline
    ///
    /// Converts each CSV in the input directory to JSON in the output
    /// directory, collects a registry entry per file, writes the generated
    /// datasets.ts module, and returns the entries.
    ///
    /// Files are processed sequentially in sorted filename order so the
    /// generated module is reproducible run to run. The first failure
    /// aborts the run; JSON files already written stay on disk.
    pub async fn generate(&self) -> Result<Vec<DatasetEntry>> {
        info!("Generating dataset registry from {:?}", self.input_dir);

        // 1. Ensure the JSON output directory exists
        std::fs::create_dir_all(&self.output_dir)
            .with_context(|| format!("Failed to create output directory {:?}", self.output_dir))?;

        // 2. Enumerate CSV files, sorted for deterministic output
        let csv_files = self.list_csv_files()?;
        info!("Found {} CSV file(s)", csv_files.len());

        // 3. Convert each file and collect its registry entry
        let mut entries = Vec::with_capacity(csv_files.len());
        for file_name in &csv_files {
            entries.push(self.process_file(file_name)?);
        }

        // 4. Emit the registry module
        let module = render_datasets_module(&entries);
        std::fs::write(&self.datasets_path, module).with_context(|| {
            format!("Failed to write datasets module {:?}", self.datasets_path)
        })?;

        info!(
            "Generated datasets module at {:?} ({} datasets)",
            self.datasets_path,
            entries.len()
        );

        Ok(entries)
    }

    /// Convert only, without emitting the registry module
    pub async fn convert_all(&self) -> Result<usize> {
        std::fs::create_dir_all(&self.output_dir)
            .with_context(|| format!("Failed to create output directory {:?}", self.output_dir))?;

        let csv_files = self.list_csv_files()?;
        info!("Found {} CSV file(s)", csv_files.len());

        for file_name in &csv_files {
            let input_path = self.input_dir.join(file_name);
            let output_path = self.output_dir.join(json_file_name(file_name));
            convert_beeline_csv(&input_path, &output_path)?;
        }

        Ok(csv_files.len())
    }

    /// List CSV filenames at the top level of the input directory, sorted
    fn list_csv_files(&self) -> Result<Vec<String>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.input_dir).min_depth(1).max_depth(1) {
            let entry = entry
                .with_context(|| format!("Failed to read input directory {:?}", self.input_dir))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            if name.ends_with(".csv") {
                files.push(name);
            } else {
                debug!("Skipping non-CSV file {:?}", entry.path());
            }
        }

        files.sort();
        Ok(files)
    }

    /// Convert one CSV and build its registry entry
    fn process_file(&self, file_name: &str) -> Result<DatasetEntry> {
        let id = DatasetEntry::derive_id(file_name);
        let input_path = self.input_dir.join(file_name);
        let json_name = json_file_name(file_name);
        let output_path = self.output_dir.join(&json_name);

        convert_beeline_csv(&input_path, &output_path)?;

        let meta = self.metadata.lookup(file_name, &id);
        debug!("Registered dataset {} ({})", id, meta.name);

        Ok(DatasetEntry {
            id,
            name: meta.name,
            organism: meta.organism,
            description: meta.description,
            file_name: json_name,
        })
    }
}

/// Replace the .csv extension with .json
fn json_file_name(csv_name: &str) -> String {
    format!("{}.json", csv_name.strip_suffix(".csv").unwrap_or(csv_name))
}
