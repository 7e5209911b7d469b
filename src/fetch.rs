//! Fetching and removing linter sources.
//!
//! Both directions are idempotent: `go get -d` is a no-op for a package
//! that is already present, and removing an absent checkout succeeds
//! silently.

use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{anyhow, Result};
use colored::Colorize;

use crate::catalog;
use crate::gopath;

/// Download a package and its dependencies into GOPATH via `go get -d`.
/// The build step is skipped; only sources are needed.
pub fn install(import_path: &str) -> Result<()> {
    let status = Command::new("go")
        .args(["get", "-d", import_path])
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| anyhow!("could not run go get: {e}"))?;

    if !status.success() {
        return Err(anyhow!("go get -d {import_path} exited with {status}"));
    }

    Ok(())
}

/// Delete the checkout roots of every catalog entry from GOPATH/src.
/// Per-entry failures are logged and the sweep continues. gometalinter's
/// own checkout stays; only the catalog is swept.
pub fn remove_all() {
    for path in sweep_targets() {
        let root = match gopath::repo_root(path) {
            Ok(root) => root,
            Err(e) => {
                eprintln!("{} cannot locate {path}: {e}", "✗".red());
                continue;
            }
        };

        if let Err(e) = remove_tree(&root) {
            eprintln!("{} error removing {}: {e}", "✗".red(), root.display());
        } else {
            eprintln!("{} removed {}", "→".cyan(), root.display());
        }
    }
}

/// Import paths the removal sweep deletes: the catalog entries, nothing
/// else.
fn sweep_targets() -> Vec<&'static str> {
    catalog::all().iter().map(|l| l.path).collect()
}

/// Remove a directory tree; an absent path is a no-op.
fn remove_tree(path: &Path) -> std::io::Result<()> {
    match std::fs::remove_dir_all(path) {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn sweep_targets_cover_the_catalog_only() {
        let targets = sweep_targets();
        assert_eq!(targets.len(), catalog::all().len());
        assert!(!targets.contains(&catalog::GOMETALINTER_PATH));
    }

    #[test]
    fn remove_tree_deletes_directory() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("src/github.com/foo/bar");
        std::fs::create_dir_all(&target).unwrap();

        remove_tree(&target).unwrap();
        assert!(!target.exists());
    }

    #[test]
    fn remove_tree_is_noop_for_absent_path() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("never/created");

        remove_tree(&target).unwrap();
        remove_tree(&target).unwrap();
    }
}
