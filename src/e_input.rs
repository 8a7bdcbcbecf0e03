use crate::e_aggregator::Aggregator;
use anyhow::{Context, Result};
use log::{info, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Feed every line of `reader` to the aggregator.
///
/// Lines are decoded lossily, so a build log with stray non-UTF-8 bytes still
/// gets classified. Returns the number of lines read.
pub fn ingest_reader<R: BufRead>(aggregator: &mut Aggregator, mut reader: R) -> io::Result<usize> {
    let mut buf = Vec::new();
    let mut lines = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        lines += 1;
        aggregator.ingest(&String::from_utf8_lossy(&buf));
    }
    Ok(lines)
}

/// Read a build log from a file.
pub fn ingest_path(aggregator: &mut Aggregator, path: &Path) -> Result<usize> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let before = aggregator.records().len();
    let lines = ingest_reader(aggregator, BufReader::new(file))
        .with_context(|| format!("reading {}", path.display()))?;
    info!(
        "{}: {} lines, {} diagnostics",
        path.display(),
        lines,
        aggregator.records().len() - before
    );
    Ok(lines)
}

/// Read a build log from stdin until end of stream.
pub fn ingest_stdin(aggregator: &mut Aggregator) -> Result<usize> {
    let stdin = io::stdin();
    let lines = ingest_reader(aggregator, stdin.lock()).context("reading stdin")?;
    info!("stdin: {} lines, {} diagnostics", lines, aggregator.records().len());
    Ok(lines)
}

/// Ingest each source in order. `-` means stdin. A source that fails is
/// reported and skipped; whatever was read before the failure is kept.
pub fn ingest_sources(aggregator: &mut Aggregator, sources: &[String]) {
    if sources.is_empty() {
        if let Err(e) = ingest_stdin(aggregator) {
            warn!("{:#}", e);
        }
        return;
    }
    for source in sources {
        let result = if source == "-" {
            ingest_stdin(aggregator)
        } else {
            ingest_path(aggregator, Path::new(source))
        };
        if let Err(e) = result {
            warn!("{:#}", e);
        }
    }
}
