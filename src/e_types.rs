use std::fmt;
use std::str::FromStr;

#[cfg(feature = "uses_serde")]
use serde::Serialize;

/// Severity of a classified build diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "uses_serde", derive(Serialize))]
#[cfg_attr(feature = "uses_serde", serde(rename_all = "lowercase"))]
pub enum DiagnosticKind {
    Error,
    Warning,
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::Error => "error",
            DiagnosticKind::Warning => "warning",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiagnosticKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(DiagnosticKind::Error),
            "warning" => Ok(DiagnosticKind::Warning),
            other => Err(format!("unknown diagnostic kind: {}", other)),
        }
    }
}

/// One classified line of build output.
///
/// A record is either a standard `file:line:col: kind: message` diagnostic or a
/// linker multiple-definition diagnostic. The two constructors are the only way
/// to build one, so `symbol` and `first_defined_in` are always both set or both
/// absent, and multiple-definition records are always errors at line 0, col 0.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uses_serde", derive(Serialize))]
pub struct DiagnosticRecord {
    file: String,
    line: u32,
    column: u32,
    kind: DiagnosticKind,
    message: String,
    #[cfg_attr(feature = "uses_serde", serde(skip_serializing_if = "Option::is_none"))]
    symbol: Option<String>,
    #[cfg_attr(feature = "uses_serde", serde(skip_serializing_if = "Option::is_none"))]
    first_defined_in: Option<String>,
}

impl DiagnosticRecord {
    pub fn standard(
        file: impl Into<String>,
        line: u32,
        column: u32,
        kind: DiagnosticKind,
        message: impl Into<String>,
    ) -> Self {
        DiagnosticRecord {
            file: file.into(),
            line,
            column,
            kind,
            message: message.into(),
            symbol: None,
            first_defined_in: None,
        }
    }

    /// Build a linker "multiple definition" record. The message is synthesized
    /// from the symbol and the file it was first defined in.
    pub fn multiple_definition(
        file: impl Into<String>,
        symbol: impl Into<String>,
        first_defined_in: impl Into<String>,
    ) -> Self {
        let symbol = symbol.into();
        let first_defined_in = first_defined_in.into();
        DiagnosticRecord {
            file: file.into(),
            line: 0,
            column: 0,
            kind: DiagnosticKind::Error,
            message: format!(
                "Multiple definition of '{}', first defined in {}",
                symbol, first_defined_in
            ),
            symbol: Some(symbol),
            first_defined_in: Some(first_defined_in),
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    pub fn first_defined_in(&self) -> Option<&str> {
        self.first_defined_in.as_deref()
    }

    pub fn is_multiple_definition(&self) -> bool {
        self.symbol.is_some()
    }
}
