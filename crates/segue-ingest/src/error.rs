//! Catalog loading error types.

use thiserror::Error;

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The catalog file lacks a required column. Fatal: the caller
    /// must supply a catalog with the expected schema.
    #[error("missing required column: {column}")]
    MissingColumn { column: &'static str },

    /// A row's cell could not be parsed (for example a non-numeric
    /// tempo). Line numbers are 1-based and count the header.
    #[error("row at line {line}: {source}")]
    InvalidRow {
        line: u64,
        #[source]
        source: csv::Error,
    },

    /// An error propagated from the CSV reader, including I/O
    /// failures opening the catalog file.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl IngestError {
    /// Returns `true` when the error is a schema problem (wrong or
    /// malformed columns) rather than an environment problem.
    #[must_use]
    pub fn is_schema(&self) -> bool {
        matches!(self, Self::MissingColumn { .. } | Self::InvalidRow { .. })
    }
}

/// Convenience alias for ingest results.
pub type IngestResult<T> = std::result::Result<T, IngestError>;
