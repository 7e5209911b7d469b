//! Extraction of gometalinter's linter definition strings.
//!
//! The definitions live in a `map[string]string` literal inside
//! gometalinter's `config.go`. [`Definitions`] is the extraction
//! contract; [`SourceScan`] is the only complete strategy, a line
//! scanner over the raw source text.

pub mod source;

use thiserror::Error;

pub use source::SourceScan;

#[derive(Debug, Error, PartialEq)]
pub enum ExtractError {
    #[error("linterDefinitions not found")]
    DefinitionsNotFound,

    #[error("unexpected EOF inside linterDefinitions")]
    UnexpectedEof,

    #[error("malformed linterDefinitions entry: {0:?}")]
    Malformed(String),

    #[error("could not read gometalinter source: {0}")]
    Io(String),
}

/// Yields gometalinter's linter definition strings, one per map entry,
/// in source order.
pub trait Definitions {
    fn linter_definitions(&self) -> Result<Vec<String>, ExtractError>;
}
