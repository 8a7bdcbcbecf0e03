#![doc = include_str!("../README.md")]

// Re-export std common modules
pub mod prelude {
    pub use std::env;
    pub use std::io;
    pub use std::path::{Path, PathBuf};
    pub use std::process::exit;
    pub use log::{debug, error, info, warn};
}

pub mod e_types;
pub use e_types::{DiagnosticKind, DiagnosticRecord};
pub mod e_classifier;
pub use e_classifier::classify;
pub mod e_aggregator;
pub use e_aggregator::{Aggregator, FileGroup, SymbolDefinitionIndex};
pub mod e_style;
pub use e_style::{AnsiStyle, ColorChoice, PlainStyle, SeverityStyle, StyleRole};
pub mod e_input;
pub mod e_checksum;
pub mod e_cli;
pub use e_cli::Cli;
#[cfg(feature = "uses_serde")]
pub mod e_report_json;
