use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "golinters",
    about = "Survey Go linters and render a capability comparison report",
    version
)]
pub struct Cli {
    /// Write the HTML report to this file instead of opening a browser
    #[arg(long, value_name = "FILE")]
    pub write: Option<PathBuf>,

    /// GitHub username (for API use)
    #[arg(long = "gh-user", value_name = "USER")]
    pub gh_user: Option<String>,

    /// GitHub token (for API use)
    #[arg(long = "gh-token", value_name = "TOKEN")]
    pub gh_token: Option<String>,

    /// Delete all linter sources in GOPATH/src and exit (be careful)
    #[arg(long, conflicts_with_all = ["write", "gh_user", "gh_token"])]
    pub remove: bool,
}
