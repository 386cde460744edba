//! Named failures of the log-to-table conversion.
//!
//! These are wrapped into `anyhow::Error` at the call sites; tests and callers
//! that need to tell them apart can `downcast_ref::<ConvertError>()`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// A table was requested for a row set with no records, so there is
    /// nothing to take a header from.
    #[error("cannot render table {table:?}: it has no records")]
    EmptyRowSet { table: String },

    /// A numeric capture in a recognized line did not parse.
    #[error("malformed {field} at {source_name}:{line}: {text:?}")]
    MalformedNumber {
        source_name: String,
        line: usize,
        field: &'static str,
        text: String,
    },
}
