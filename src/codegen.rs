// ==============================================================================
// codegen.rs - Dataset Registry Module Emission
// ==============================================================================
// Description: Renders the generated datasets.ts registry module
// Author: Matt Barham
// Created: 2026-08-12
// Modified: 2026-08-29
// Version: 1.0.0
// ==============================================================================

use crate::models::DatasetEntry;

/// Escape a string for embedding in a double-quoted JS string literal
///
/// Metadata fields come from a hand-maintained table, but descriptions can
/// legitimately contain quotes; emitting them raw would corrupt the
/// generated module.
fn escape_js_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Render the datasets.ts registry module for the given entries
///
/// The module imports the shared `buildBeelineDataset` helper, imports each
/// converted JSON file under its dataset identifier, and default-exports an
/// array with one object per dataset. The helper is an opaque collaborator
/// in the frontend; only its import path and call shape are emitted here.
pub fn render_datasets_module(entries: &[DatasetEntry]) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(r#"import { buildBeelineDataset } from "@/utils/buildBeelineDataset";"#.to_string());

    for e in entries {
        lines.push(format!(
            r#"import {} from "./json/{}";"#,
            e.id,
            escape_js_string(&e.file_name)
        ));
    }

    lines.push(String::new());
    lines.push("const datasets = [".to_string());

    for e in entries {
        lines.push("  {".to_string());
        lines.push(format!(r#"    id: "{}","#, escape_js_string(&e.id)));
        lines.push(format!(r#"    name: "{}","#, escape_js_string(&e.name)));
        lines.push(format!(
            r#"    organism: "{}","#,
            escape_js_string(&e.organism)
        ));
        lines.push(format!(
            r#"    description: "{}","#,
            escape_js_string(&e.description)
        ));
        lines.push(format!("    ...buildBeelineDataset({})", e.id));
        lines.push("  },".to_string());
    }

    lines.push("];".to_string());
    lines.push(String::new());
    lines.push("export default datasets;".to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, name: &str, organism: &str, description: &str, file_name: &str) -> DatasetEntry {
        DatasetEntry {
            id: id.to_string(),
            name: name.to_string(),
            organism: organism.to_string(),
            description: description.to_string(),
            file_name: file_name.to_string(),
        }
    }

    #[test]
    fn test_renders_imports_literal_and_export() {
        let entries = vec![
            entry("dynli", "dyn-LI", "Synthetic", "Linear network", "dyn-LI.json"),
            entry("gsd", "GSD", "Human", "Sex determination", "GSD.json"),
        ];

        let module = render_datasets_module(&entries);

        assert!(module.starts_with(
            r#"import { buildBeelineDataset } from "@/utils/buildBeelineDataset";"#
        ));
        assert!(module.contains(r#"import dynli from "./json/dyn-LI.json";"#));
        assert!(module.contains(r#"import gsd from "./json/GSD.json";"#));
        assert!(module.contains("const datasets = ["));
        assert!(module.contains(r#"    id: "dynli","#));
        assert!(module.contains(r#"    organism: "Human","#));
        assert!(module.contains("    ...buildBeelineDataset(dynli)"));
        assert!(module.contains("    ...buildBeelineDataset(gsd)"));
        assert!(module.ends_with("export default datasets;"));

        // Imports come before the array, array before the export
        let array_pos = module.find("const datasets").unwrap();
        assert!(module.find("import dynli").unwrap() < array_pos);
        assert!(array_pos < module.find("export default").unwrap());
    }

    #[test]
    fn test_empty_entry_list() {
        let module = render_datasets_module(&[]);
        assert!(module.contains("const datasets = [\n];"));
        assert!(module.ends_with("export default datasets;"));
    }

    #[test]
    fn test_metadata_strings_are_escaped() {
        let entries = vec![entry(
            "odd",
            "odd \"name\"",
            "Unknown",
            "line1\nline2 \\ backslash",
            "odd.json",
        )];

        let module = render_datasets_module(&entries);

        assert!(module.contains(r#"    name: "odd \"name\"","#));
        assert!(module.contains(r#"    description: "line1\nline2 \\ backslash","#));
        // The raw newline must not appear inside the literal
        assert!(!module.contains("line1\nline2"));
    }

    #[test]
    fn test_entry_order_preserved() {
        let entries = vec![
            entry("b", "B", "Unknown", "", "b.json"),
            entry("a", "A", "Unknown", "", "a.json"),
        ];

        let module = render_datasets_module(&entries);
        assert!(module.find(r#"id: "b""#).unwrap() < module.find(r#"id: "a""#).unwrap());
    }
}
