use crate::e_aggregator::{Aggregator, SymbolDefinitionIndex};
use crate::e_types::DiagnosticRecord;
use serde::{Serialize, Serializer};

#[derive(Serialize)]
struct FileEntry<'a> {
    file: &'a str,
    diagnostics: Vec<&'a DiagnosticRecord>,
}

/// Serializes the index as an object whose keys keep first-seen order.
struct SymbolsInOrder<'a>(&'a SymbolDefinitionIndex);

impl Serialize for SymbolsInOrder<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter())
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    files: Vec<FileEntry<'a>>,
    multiple_definitions: SymbolsInOrder<'a>,
    errors: usize,
    warnings: usize,
}

/// Machine readable form of the summary, grouped the same way as the text
/// report, plus the multiple-definition index.
pub fn render_json(aggregator: &Aggregator) -> serde_json::Result<String> {
    let files = aggregator
        .groups()
        .into_iter()
        .map(|g| FileEntry {
            file: g.file,
            diagnostics: g.records,
        })
        .collect();

    let report = JsonReport {
        files,
        multiple_definitions: SymbolsInOrder(aggregator.symbol_index()),
        errors: aggregator.error_count(),
        warnings: aggregator.warning_count(),
    };
    serde_json::to_string_pretty(&report)
}
