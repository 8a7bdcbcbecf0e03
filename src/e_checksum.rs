//! Post-build checksum hook.
//!
//! Writes the MD5 digest of a finished artifact (firmware image, filesystem
//! image) next to it as `<artifact>.md5`. Failures are reported, never fatal.

use anyhow::{Context, Result};
use log::{info, warn};
use md5::{Digest, Md5};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

pub const CHECKSUM_SUFFIX: &str = ".md5";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksumOutcome {
    pub artifact: PathBuf,
    pub digest: String,
    pub checksum_path: PathBuf,
}

/// `firmware.bin` -> `firmware.bin.md5`
pub fn checksum_path_for(artifact: &Path) -> PathBuf {
    let mut name = artifact.as_os_str().to_owned();
    name.push(CHECKSUM_SUFFIX);
    PathBuf::from(name)
}

/// Hash `artifact` and write the lowercase hex digest, without a newline, to
/// the sibling checksum file.
pub fn generate_md5(artifact: &Path) -> Result<ChecksumOutcome> {
    let mut file =
        File::open(artifact).with_context(|| format!("opening {}", artifact.display()))?;
    let mut hasher = Md5::new();
    io::copy(&mut file, &mut hasher)
        .with_context(|| format!("reading {}", artifact.display()))?;
    let digest = format!("{:x}", hasher.finalize());

    let checksum_path = checksum_path_for(artifact);
    fs::write(&checksum_path, &digest)
        .with_context(|| format!("writing {}", checksum_path.display()))?;
    info!("wrote {}", checksum_path.display());

    Ok(ChecksumOutcome {
        artifact: artifact.to_path_buf(),
        digest,
        checksum_path,
    })
}

/// Run the hook for one artifact, printing the outcome. Never aborts the build.
pub fn post_build_checksum(artifact: &Path) -> Option<ChecksumOutcome> {
    if !artifact.exists() {
        warn!("checksum skipped, {} does not exist", artifact.display());
        println!("Warning: File not found: {}", artifact.display());
        return None;
    }
    match generate_md5(artifact) {
        Ok(outcome) => {
            let name = artifact
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| artifact.display().to_string());
            println!("MD5 hash generated for {}: {}", name, outcome.digest);
            Some(outcome)
        }
        Err(e) => {
            warn!("checksum failed: {:#}", e);
            println!("Error generating MD5: {:#}", e);
            None
        }
    }
}
