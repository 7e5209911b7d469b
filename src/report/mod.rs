//! Report output: write to a named file, or to a temp path that is
//! opened in the default browser.

pub mod html;

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use chrono::Local;
use colored::Colorize;

use crate::models::LinterReport;

/// Render the report and write it out. With no target path a temp
/// directory is created, the file is kept there, and the viewer is
/// launched as a side effect.
pub fn write(out: Option<&Path>, results: &[LinterReport]) -> Result<PathBuf> {
    let timestamp = Local::now().to_rfc2822();
    let doc = html::render(&timestamp, results);

    let path = match out {
        Some(path) => path.to_path_buf(),
        None => {
            let dir = tempfile::Builder::new()
                .prefix("golinters")
                .tempdir()
                .context("could not create temp directory for report")?
                .keep();
            dir.join("golinters.html")
        }
    };

    std::fs::write(&path, doc)
        .with_context(|| format!("could not write report to {}", path.display()))?;

    if out.is_none() {
        present(&path);
    }

    Ok(path)
}

/// Open the report in the platform's default viewer. Failure to launch
/// a viewer is logged, not fatal; the file is on disk either way.
fn present(path: &Path) {
    let result = if cfg!(target_os = "macos") {
        Command::new("open").arg(path).spawn()
    } else if cfg!(windows) {
        Command::new("cmd").args(["/C", "start", ""]).arg(path).spawn()
    } else {
        Command::new("xdg-open").arg(path).spawn()
    };

    if let Err(e) = result {
        eprintln!("{} could not open {}: {e}", "⚠".yellow(), path.display());
    }
}
