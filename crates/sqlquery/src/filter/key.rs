//! Filter key parsing (`field` / `field.op`).

use std::fmt;

/// Separator between the field name and the operator.
pub const SEPARATOR: char = '.';

/// Operator carried by a filter key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOp {
    /// Bare key: equality, or `IS NULL` for a null value.
    Eq,
    In,
    NotIn,
    Not,
    Gt,
    Gte,
    Lt,
    Lte,
    Like,
    Null,
}

impl FilterOp {
    /// Every operator that can follow the separator.
    pub const SUFFIXED: [FilterOp; 9] = [
        FilterOp::In,
        FilterOp::NotIn,
        FilterOp::Not,
        FilterOp::Gt,
        FilterOp::Gte,
        FilterOp::Lt,
        FilterOp::Lte,
        FilterOp::Like,
        FilterOp::Null,
    ];

    /// Look up a suffix name. Matching is exact and case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::SUFFIXED.into_iter().find(|op| op.name() == name)
    }

    /// The suffix name, empty for [`FilterOp::Eq`].
    pub fn name(self) -> &'static str {
        match self {
            FilterOp::Eq => "",
            FilterOp::In => "in",
            FilterOp::NotIn => "notin",
            FilterOp::Not => "not",
            FilterOp::Gt => "gt",
            FilterOp::Gte => "gte",
            FilterOp::Lt => "lt",
            FilterOp::Lte => "lte",
            FilterOp::Like => "like",
            FilterOp::Null => "null",
        }
    }
}

impl fmt::Display for FilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterOp::Eq => f.write_str("eq"),
            op => f.write_str(op.name()),
        }
    }
}

/// A parsed filter key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterKey<'a> {
    /// The key exactly as it appeared in the filter map.
    pub raw: &'a str,
    /// Column name (everything before the first separator).
    pub field: &'a str,
    /// Recognized operator, or the unrecognized suffix.
    pub op: Result<FilterOp, &'a str>,
}

impl<'a> FilterKey<'a> {
    /// Split a raw key into field and operator.
    ///
    /// Only the segment directly after the first separator names the
    /// operator; anything after a second separator is ignored.
    pub fn parse(raw: &'a str) -> Self {
        let mut parts = raw.split(SEPARATOR);
        let field = parts.next().unwrap_or(raw);
        let op = match parts.next() {
            None => Ok(FilterOp::Eq),
            Some(name) => FilterOp::from_name(name).ok_or(name),
        };
        Self { raw, field, op }
    }
}
