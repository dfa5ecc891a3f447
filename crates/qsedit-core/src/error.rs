//! Errors raised at the edges of query editing (URL input, CLI assignments).
//!
//! Editing itself never fails; see [`crate::editor`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QsError {
    /// An absolute request URL could not be parsed.
    #[error("invalid request URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A `KEY=VALUE` argument had no `=` or an empty key.
    #[error("invalid parameter assignment {0:?}; expected KEY=VALUE")]
    InvalidAssignment(String),
}
