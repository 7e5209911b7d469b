//! Per-linter classification.
//!
//! Each linter is classified from a single import enumeration plus two
//! reference lists computed once per run: gometalinter's definition
//! strings and metalint's dependency closure. Flags deliberately mix
//! match policies: analysis-library and stdlib flags are exact path
//! matches, CLI-stack flags are substring matches (those libraries are
//! often vendored under longer paths).

use std::collections::HashSet;

use colored::Colorize;

use crate::deps::{self, EnumerateError};
use crate::models::{Linter, LinterReport};
use crate::repo::{self, GitHubClient};

/// Build the full report row for one linter: enumerate its imports,
/// derive the capability flags, and attach repository metadata when the
/// lookup succeeds. A failed lookup only costs the metadata cells; a
/// failed enumeration fails the whole row.
pub async fn details(
    linter: &Linter,
    github: &GitHubClient,
    defs: &[String],
    metalint_pkgs: &HashSet<String>,
) -> Result<LinterReport, EnumerateError> {
    eprintln!("{} analyzing {}...", "→".cyan(), linter.name);

    let imports = deps::enumerate(linter.path)?;
    let mut report = classify(linter, &imports, defs, metalint_pkgs);

    match repo::resolve(linter.path, github).await {
        Ok(repository) => report.repo = Some(repository),
        Err(e) => eprintln!(
            "{} {}: could not get repository info: {e}",
            "⚠".yellow(),
            linter.name
        ),
    }

    Ok(report)
}

/// Derive the capability flags from an already-enumerated import set.
pub fn classify(
    linter: &Linter,
    imports: &HashSet<String>,
    defs: &[String],
    metalint_pkgs: &HashSet<String>,
) -> LinterReport {
    let contains = |needle: &str| imports.iter().any(|pkg| pkg.contains(needle));

    LinterReport {
        name: linter.name.to_string(),
        repo: None,
        go_parser: imports.contains("go/parser"),
        go_loader: imports.contains("golang.org/x/tools/go/loader"),
        go_ssa: imports.contains("golang.org/x/tools/go/ssa"),
        checker: imports.contains("github.com/mvdan/lint"),
        flag: imports.contains("flag"),
        go_arg: contains("github.com/alexflint/go-arg"),
        go_flags: contains("github.com/jessevdk/go-flags"),
        pflag: contains("github.com/spf13/pflag"),
        sflags: contains("github.com/octago/sflags/gen/gflag"),
        kingpin: contains("gopkg.in/alecthomas/kingpin"),
        gometalinter: defs.iter().any(|def| def.starts_with(linter.cmd)),
        metalint: metalint_pkgs.contains(linter.path),
        notes: linter.notes.to_string(),
    }
}
