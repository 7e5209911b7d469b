/// One static-analysis tool tracked by the catalog.
#[derive(Debug, Clone)]
pub struct Linter {
    /// Display name used in log lines and the report.
    pub name: &'static str,
    /// Invocation command, as gometalinter would run it. Used for the
    /// prefix test against gometalinter's definition strings.
    pub cmd: &'static str,
    /// Go import path of the tool's main package.
    pub path: &'static str,
    /// Free-text remark rendered in the report's Notes column.
    pub notes: &'static str,
}

/// Repository metadata resolved from an import path.
#[derive(Debug, Clone, PartialEq)]
pub struct Repository {
    /// Full name of the repository owner, or the login handle when no
    /// display name is set.
    pub maintainer: String,
    /// Browsable HTML URL of the repository.
    pub url: String,
}

/// Per-linter classification, built once from a single import
/// enumeration and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct LinterReport {
    pub name: String,
    pub repo: Option<Repository>,
    pub go_parser: bool,
    pub go_loader: bool,
    pub go_ssa: bool,
    pub gometalinter: bool,
    pub metalint: bool,
    pub checker: bool,
    pub flag: bool,
    pub go_arg: bool,
    pub go_flags: bool,
    pub kingpin: bool,
    pub pflag: bool,
    pub sflags: bool,
    pub notes: String,
}
