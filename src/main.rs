//! # e_build_summary
//!
//! Pipe a build through it and get the errors, warnings and linker multiple
//! definitions back grouped by file.
//!
//! ```sh
//! pio run 2>&1 | e_build_summary
//! e_build_summary build.log
//! e_build_summary checksum .pio/build/esp32/firmware.bin
//! ```

use anyhow::Result;
use clap::Parser;
use e_build_summary::e_checksum::post_build_checksum;
use e_build_summary::e_cli::{Command, OutputFormat};
use e_build_summary::e_input::ingest_sources;
use e_build_summary::prelude::*;
use e_build_summary::{Aggregator, Cli};

pub fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let cli = Cli::parse();

    if let Some(Command::Checksum { artifacts }) = &cli.command {
        // A failed checksum is reported by the hook and never fails the build.
        for artifact in artifacts {
            post_build_checksum(artifact);
        }
        return Ok(());
    }

    let mut aggregator = Aggregator::new();
    ingest_sources(&mut aggregator, &cli.inputs);
    info!(
        "{} diagnostics ({} errors, {} warnings)",
        aggregator.records().len(),
        aggregator.error_count(),
        aggregator.warning_count()
    );

    match cli.format {
        OutputFormat::Text => {
            let style = cli.color.style();
            print!("{}", aggregator.summarize(style.as_ref()));
        }
        #[cfg(feature = "uses_serde")]
        OutputFormat::Json => {
            println!("{}", e_build_summary::e_report_json::render_json(&aggregator)?);
        }
    }
    Ok(())
}
