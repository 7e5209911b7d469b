//! Transitive import enumeration via `go list -deps`.
//!
//! The Go toolchain does the actual package loading; we only collect the
//! canonical import paths it prints. Sources must already be present in
//! GOPATH (fetching is a separate, explicit step).

use std::collections::HashSet;
use std::process::Command;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnumerateError {
    #[error("could not run go list: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("go list -deps {path} failed: {stderr}")]
    Load { path: String, stderr: String },
}

/// All packages the given package depends on, directly or transitively,
/// including itself and standard-library packages. No ordering, no
/// duplicates.
pub fn enumerate(import_path: &str) -> Result<HashSet<String>, EnumerateError> {
    let output = Command::new("go")
        .args(["list", "-deps", import_path])
        .output()?;

    if !output.status.success() {
        return Err(EnumerateError::Load {
            path: import_path.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(parse_list_output(&String::from_utf8_lossy(&output.stdout)))
}

/// One import path per line; blank lines are skipped.
fn parse_list_output(stdout: &str) -> HashSet<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
