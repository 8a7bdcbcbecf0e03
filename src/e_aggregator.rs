//! Collects classified diagnostics for a whole build and renders the summary.

use crate::e_classifier::classify;
use crate::e_style::{SeverityStyle, StyleRole};
use crate::e_types::{DiagnosticKind, DiagnosticRecord};
use std::collections::HashMap;

/// Symbol name to the files in which it was reported as multiply defined.
///
/// Files are kept per symbol in arrival order, duplicates included. Symbols
/// iterate in the order they were first seen.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SymbolDefinitionIndex {
    positions: HashMap<String, usize>,
    entries: Vec<(String, Vec<String>)>,
}

impl SymbolDefinitionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, symbol: &str, file: &str) {
        match self.positions.get(symbol) {
            Some(&idx) => self.entries[idx].1.push(file.to_string()),
            None => {
                self.positions.insert(symbol.to_string(), self.entries.len());
                self.entries.push((symbol.to_string(), vec![file.to_string()]));
            }
        }
    }

    pub fn files_for(&self, symbol: &str) -> Option<&[String]> {
        self.positions
            .get(symbol)
            .map(|&idx| self.entries[idx].1.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(symbol, files)| (symbol.as_str(), files.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// All records reported against one file, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileGroup<'a> {
    pub file: &'a str,
    pub records: Vec<&'a DiagnosticRecord>,
}

/// Owns every record of a run.
#[derive(Debug, Default)]
pub struct Aggregator {
    records: Vec<DiagnosticRecord>,
    symbol_index: SymbolDefinitionIndex,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trim and classify one line of build output, keeping it if it is a
    /// diagnostic. Returns whether a record was added.
    pub fn ingest(&mut self, line: &str) -> bool {
        let Some(record) = classify(line.trim()) else {
            return false;
        };
        if let Some(symbol) = record.symbol() {
            self.symbol_index.record(symbol, record.file());
        }
        self.records.push(record);
        true
    }

    pub fn records(&self) -> &[DiagnosticRecord] {
        &self.records
    }

    pub fn symbol_index(&self) -> &SymbolDefinitionIndex {
        &self.symbol_index
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn count_of(&self, kind: DiagnosticKind) -> usize {
        self.records.iter().filter(|r| r.kind() == kind).count()
    }

    pub fn error_count(&self) -> usize {
        self.count_of(DiagnosticKind::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count_of(DiagnosticKind::Warning)
    }

    /// Records grouped by file, groups in the order each file was first seen.
    pub fn groups(&self) -> Vec<FileGroup<'_>> {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<FileGroup<'_>> = Vec::new();
        for record in &self.records {
            let idx = *positions.entry(record.file()).or_insert_with(|| {
                groups.push(FileGroup {
                    file: record.file(),
                    records: Vec::new(),
                });
                groups.len() - 1
            });
            groups[idx].records.push(record);
        }
        groups
    }

    /// Render the report. Every line, including the last, ends with `\n`.
    pub fn summarize(&self, style: &dyn SeverityStyle) -> String {
        if self.records.is_empty() {
            return format!(
                "{}\n",
                style.paint(StyleRole::Success, "✓ Build successful - no errors found")
            );
        }

        let mut out = String::from("\n=== Build Error Summary ===\n\n");
        for group in self.groups() {
            out.push('\n');
            out.push_str(&style.paint(StyleRole::FileHeader, &format!("File: {}", group.file)));
            out.push('\n');
            for record in group.records {
                let role = StyleRole::from(record.kind());
                match (record.symbol(), record.first_defined_in()) {
                    (Some(symbol), Some(first_defined_in)) => {
                        let header = format!("  ↳ Multiple definition of '{}'", symbol);
                        out.push_str(&style.paint(role, &header));
                        out.push('\n');
                        out.push_str(&format!("    First defined in: {}\n", first_defined_in));
                    }
                    _ => {
                        let header = format!(
                            "  ↳ {} at line {}:",
                            record.kind().as_str().to_uppercase(),
                            record.line()
                        );
                        out.push_str(&style.paint(role, &header));
                        out.push('\n');
                        out.push_str(&format!("    {}\n", record.message()));
                    }
                }
            }
        }

        out.push_str(&format!(
            "\nTotal: {}, {}\n",
            style.paint(StyleRole::Error, &format!("{} errors", self.error_count())),
            style.paint(
                StyleRole::Warning,
                &format!("{} warnings", self.warning_count())
            ),
        ));
        out
    }
}
