#![allow(dead_code)]
use std::fs;
use std::io::Result as IoResult;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// A temporary build directory holding logs and artifacts.
pub struct TestBuildDir {
    /// When this is dropped, the directory and its contents are removed.
    pub temp_dir: TempDir,
}

impl TestBuildDir {
    pub fn new() -> IoResult<Self> {
        Ok(TestBuildDir {
            temp_dir: tempdir()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a build log, one entry per line.
    pub fn write_log(&self, name: &str, lines: &[&str]) -> IoResult<PathBuf> {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, lines.join("\n"))?;
        Ok(path)
    }

    pub fn write_artifact(&self, name: &str, contents: &[u8]) -> IoResult<PathBuf> {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, contents)?;
        Ok(path)
    }
}

/// A PlatformIO style build log with one of each diagnostic shape mixed into noise.
pub const MIXED_BUILD_LOG: &[&str] = &[
    "Processing esp32dev (platform: espressif32; board: esp32dev; framework: arduino)",
    "Compiling .pio/build/esp32dev/src/main.cpp.o",
    "src/main.cpp:10:5: error: 'sensor' was not declared in this scope",
    "src/modul_dht.h:42:17: warning: unused variable 'humidity' [-Wunused-variable]",
    "Linking .pio/build/esp32dev/firmware.elf",
    ".pio/build/esp32dev/src/wifi.cpp.o:(.bss.server+0x0): multiple definition of 'server'; .pio/build/esp32dev/src/main.cpp.o: first defined here",
    "src/main.cpp:20:1: warning: control reaches end of non-void function",
    "*** [.pio/build/esp32dev/firmware.elf] Error 1",
];
