//! `golinters` — survey Go linters and render a capability comparison report.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. `--remove`: sweep linter sources out of GOPATH and exit ([`fetch`]).
//! 3. Fetch missing linter sources, plus gometalinter ([`fetch`]).
//! 4. Extract gometalinter's linter definitions ([`metalinter`]).
//! 5. Enumerate metalint's dependency closure ([`deps`]).
//! 6. Classify each catalog entry and resolve its repository metadata
//!    ([`analyze`], [`repo`]).
//! 7. Render the HTML report to a file, or to a temp path opened in the
//!    browser ([`report`]).
//!
//! The two reference lists (steps 4 and 5) are computed once and any
//! failure there aborts the run; per-linter failures are logged and only
//! cost that linter's row.

mod analyze;
mod catalog;
mod cli;
mod deps;
mod fetch;
mod gopath;
mod metalinter;
mod models;
mod repo;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use cli::Cli;
use metalinter::{Definitions, SourceScan};
use repo::GitHubClient;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.remove {
        fetch::remove_all();
        return Ok(());
    }

    let linters = catalog::all();
    let github = GitHubClient::new(cli.gh_user, cli.gh_token);

    eprintln!("{} fetching missing linters, if required...", "→".cyan());
    fetch_sources(&linters);

    // Both reference lists are computed once, before the per-linter
    // loop. Classification depends on them, so failure here is fatal.
    let defs = SourceScan
        .linter_definitions()
        .context("could not extract gometalinter's linter definitions")?;

    let metalint_pkgs = deps::enumerate(catalog::METALINT_PATH)
        .context("could not enumerate metalint's imports")?;

    let mut results = Vec::with_capacity(linters.len());

    for linter in &linters {
        match analyze::details(linter, &github, &defs, &metalint_pkgs).await {
            Ok(report) => results.push(report),
            Err(e) => eprintln!("{} error analyzing {}: {e}", "✗".red(), linter.name),
        }
    }

    let path = report::write(cli.write.as_deref(), &results)?;
    eprintln!("{} report written to {}", "✓".green(), path.display());

    Ok(())
}

/// Fetch each catalog entry's source, plus gometalinter itself (its
/// config file feeds the definitions extractor). Fetch errors are
/// logged and the run continues; classification of an unfetched linter
/// fails later, on its own.
fn fetch_sources(linters: &[models::Linter]) {
    let bar = ProgressBar::new(linters.len() as u64 + 1);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    for linter in linters {
        bar.set_message(linter.name);
        if let Err(e) = fetch::install(linter.path) {
            bar.suspend(|| {
                eprintln!("{} error installing {}: {e}", "✗".red(), linter.name)
            });
        }
        bar.inc(1);
    }

    bar.set_message("gometalinter");
    if let Err(e) = fetch::install(catalog::GOMETALINTER_PATH) {
        bar.suspend(|| eprintln!("{} error installing gometalinter: {e}", "✗".red()));
    }
    bar.inc(1);

    bar.finish_and_clear();
}
