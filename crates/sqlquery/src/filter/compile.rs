//! Compilation of filter entries into condition expressions.

use std::fmt;

use crate::filter::Filters;
use crate::filter::key::{FilterKey, FilterOp};
use crate::qb::{ConditionSink, Expr};
use crate::value::Value;

/// Why a filter entry produced no condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The suffix after the separator is not a known operator.
    UnknownOperator(String),
    /// `in` / `notin` need a comma-separated text value.
    ExpectedText { op: FilterOp, found: &'static str },
    /// `null` needs a boolean value.
    ExpectedBool { found: &'static str },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnknownOperator(name) => write!(f, "unknown operator `{name}`"),
            SkipReason::ExpectedText { op, found } => {
                write!(f, "operator `{op}` expects TEXT, got {found}")
            }
            SkipReason::ExpectedBool { found } => {
                write!(f, "operator `null` expects BOOLEAN, got {found}")
            }
        }
    }
}

/// A filter entry left out of the WHERE clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFilter {
    pub key: String,
    pub reason: SkipReason,
}

impl fmt::Display for SkippedFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.reason)
    }
}

/// Compile one filter entry into a condition.
///
/// | operator | value | condition |
/// |---|---|---|
/// | bare | `Null` | `field IS NULL` |
/// | bare | other | `field = ?` |
/// | `in` / `notin` | `Text` | `field IN (?, ...)` / `NOT IN`, one arg per comma token |
/// | `not` | any | `field <> ?` |
/// | `gt` `gte` `lt` `lte` | any | `>` `>=` `<` `<=` |
/// | `like` | any | `field LIKE ?` |
/// | `null` | `Bool` | `raw_key IS NULL` / `raw_key IS NOT NULL` |
///
/// The `null` operator tests the raw key (for example `id.null IS NULL`),
/// not the bare field.
pub fn compile_filter(key: &FilterKey<'_>, value: &Value) -> Result<Expr, SkipReason> {
    let op = key
        .op
        .map_err(|name| SkipReason::UnknownOperator(name.to_string()))?;
    let field = key.field;

    let expr = match op {
        FilterOp::Eq if value.is_null() => Expr::is_null(field),
        FilterOp::Eq => Expr::eq(field, value.clone()),
        FilterOp::In | FilterOp::NotIn => {
            let Some(text) = value.as_str() else {
                return Err(SkipReason::ExpectedText {
                    op,
                    found: value.type_name(),
                });
            };
            let tokens: Vec<&str> = text.split(',').collect();
            if op == FilterOp::In {
                Expr::in_list(field, tokens)
            } else {
                Expr::not_in(field, tokens)
            }
        }
        FilterOp::Not => Expr::ne(field, value.clone()),
        FilterOp::Gt => Expr::gt(field, value.clone()),
        FilterOp::Gte => Expr::gte(field, value.clone()),
        FilterOp::Lt => Expr::lt(field, value.clone()),
        FilterOp::Lte => Expr::lte(field, value.clone()),
        FilterOp::Like => Expr::like(field, value.clone()),
        FilterOp::Null => match value.as_bool() {
            Some(true) => Expr::is_null(key.raw),
            Some(false) => Expr::is_not_null(key.raw),
            None => {
                return Err(SkipReason::ExpectedBool {
                    found: value.type_name(),
                });
            }
        },
    };
    Ok(expr)
}

/// AND one condition per accepted filter onto `sink`, in key order.
///
/// Never fails: entries that cannot be compiled are left out and returned.
pub fn apply_filters<S: ConditionSink>(sink: &mut S, filters: &Filters) -> Vec<SkippedFilter> {
    let mut skipped = Vec::new();

    for (raw, value) in filters {
        let key = FilterKey::parse(raw);
        match compile_filter(&key, value) {
            Ok(expr) => sink.and_where(expr),
            Err(reason) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    target: "sqlquery.filter",
                    key = %raw,
                    reason = %reason,
                    "skipping filter"
                );
                skipped.push(SkippedFilter {
                    key: raw.clone(),
                    reason,
                });
            }
        }
    }

    skipped
}
