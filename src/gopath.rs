//! GOPATH resolution and path helpers.
//!
//! Sources are expected in GOPATH workspace layout (`$GOPATH/src/<import
//! path>`), which is what `go get -d` produces for the catalog's tools.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

/// The effective GOPATH root: first element of `$GOPATH`, or `~/go`.
pub fn root() -> Result<PathBuf> {
    if let Ok(gopath) = std::env::var("GOPATH") {
        let first = gopath
            .split(if cfg!(windows) { ';' } else { ':' })
            .next()
            .unwrap_or("");
        if !first.is_empty() {
            return Ok(PathBuf::from(first));
        }
    }

    dirs::home_dir()
        .map(|home| home.join("go"))
        .ok_or_else(|| anyhow!("GOPATH is unset and no home directory was found"))
}

/// The source directory of a package: `GOPATH/src/<import path>`.
pub fn src_dir(import_path: &str) -> Result<PathBuf> {
    Ok(root()?.join("src").join(import_path))
}

/// The checkout root of a package: `GOPATH/src/` plus the first three
/// segments of the import path (host/owner/repo). This is the directory
/// a fetch creates and a removal sweep deletes.
pub fn repo_root(import_path: &str) -> Result<PathBuf> {
    let mut parts = import_path.splitn(4, '/');
    let (host, owner, repo) = match (parts.next(), parts.next(), parts.next()) {
        (Some(h), Some(o), Some(r)) => (h, o, r),
        _ => return Err(anyhow!("import path too short: {import_path}")),
    };

    Ok(root()?.join("src").join(host).join(owner).join(repo))
}
