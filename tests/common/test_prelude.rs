// common/test_prelude.rs

// Re-export commonly used items for integration tests.
#![allow(unused_imports)]
pub use assert_cmd::Command;
pub use predicates::prelude::*;
pub use predicates::str::contains;

pub fn summary_cmd() -> Command {
    let mut cmd = Command::cargo_bin("e_build_summary").expect("binary should build");
    cmd.env_remove("RUST_LOG");
    cmd
}
