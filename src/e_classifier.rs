//! Line classifier for compiler and linker diagnostics.
//!
//! Two shapes are recognized, tried in this order:
//!
//! 1. `a.o:(.text+0x10): multiple definition of 'foo'; b.o: first defined here`
//! 2. `foo.c:10:5: error: undefined symbol 'bar'`
//!
//! Both are anchored at the start of the line. Anything else is build noise.

use crate::e_types::{DiagnosticKind, DiagnosticRecord};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

static MULTIPLE_DEFINITION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(?P<file>.+?):\(.+?\):\s*multiple definition of\s*['"](?P<symbol>.+?)['"];\s*(?P<first_def>.+?):\s*first defined here"#,
    )
    .expect("invalid multiple definition regex")
});

// The file prefix is non-greedy: the first `:<digits>:<digits>:` that is
// followed by a severity wins.
static STANDARD_DIAGNOSTIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<file>.+?):(?P<line>\d+):(?P<col>\d+):\s*(?P<kind>warning|error):\s*(?P<message>.*)",
    )
    .expect("invalid standard diagnostic regex")
});

/// Classify a single, already trimmed, line of build output.
///
/// Returns `None` for lines that carry no diagnostic.
///
/// # Example
/// ```
/// use e_build_summary::e_classifier::classify;
/// use e_build_summary::e_types::DiagnosticKind;
///
/// let rec = classify("foo.c:10:5: error: undefined symbol 'bar'").unwrap();
/// assert_eq!(rec.file(), "foo.c");
/// assert_eq!((rec.line(), rec.column()), (10, 5));
/// assert_eq!(rec.kind(), DiagnosticKind::Error);
/// assert!(classify("Compiling .pio/build/src/main.cpp.o").is_none());
/// ```
pub fn classify(line: &str) -> Option<DiagnosticRecord> {
    classify_multiple_definition(line).or_else(|| classify_standard(line))
}

fn classify_multiple_definition(line: &str) -> Option<DiagnosticRecord> {
    let caps = MULTIPLE_DEFINITION_RE.captures(line)?;
    let file = caps.name("file")?.as_str();
    let symbol = caps.name("symbol")?.as_str();
    let first_def = caps.name("first_def")?.as_str();
    debug!(
        "multiple definition of '{}' in {} (first defined in {})",
        symbol, file, first_def
    );
    Some(DiagnosticRecord::multiple_definition(file, symbol, first_def))
}

fn classify_standard(line: &str) -> Option<DiagnosticRecord> {
    let caps = STANDARD_DIAGNOSTIC_RE.captures(line)?;
    let file = caps.name("file")?.as_str();
    let kind: DiagnosticKind = caps.name("kind")?.as_str().parse().ok()?;
    // Digit-only captures; only an out-of-range number can fail here.
    let (line_no, col_no) = match (caps["line"].parse::<u32>(), caps["col"].parse::<u32>()) {
        (Ok(l), Ok(c)) => (l, c),
        _ => {
            debug!("line/column out of range, skipping: {}", line);
            return None;
        }
    };
    let message = caps.name("message").map(|m| m.as_str()).unwrap_or("");
    debug!("{} at {}:{}:{}", kind, file, line_no, col_no);
    Some(DiagnosticRecord::standard(file, line_no, col_no, kind, message))
}
