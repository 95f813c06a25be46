//! Error types for sqlquery

use crate::filter::SkippedFilter;
use thiserror::Error;

/// Result type alias for sqlquery operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Error types for query compilation.
///
/// Compiling a statement never fails on its own: malformed filters are dropped.
/// These errors only surface from parsing configuration and from the opt-in
/// strict mode ([`crate::BuiltQuery::strict`]).
#[derive(Debug, Error)]
pub enum QueryError {
    /// Flavor name not recognized
    #[error("Unknown SQL flavor: {0}")]
    UnknownFlavor(String),

    /// One or more filters were dropped while compiling
    #[error("{} filter(s) skipped: {}", .0.len(), describe(.0))]
    SkippedFilters(Vec<SkippedFilter>),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl QueryError {
    /// Check if this is a skipped-filters error
    pub fn is_skipped_filters(&self) -> bool {
        matches!(self, Self::SkippedFilters(_))
    }

    /// The skipped filters carried by this error, if any.
    pub fn skipped(&self) -> &[SkippedFilter] {
        match self {
            Self::SkippedFilters(skipped) => skipped,
            _ => &[],
        }
    }
}

fn describe(skipped: &[SkippedFilter]) -> String {
    skipped
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
