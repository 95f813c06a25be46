//! Filter maps and their compilation into WHERE conditions.
//!
//! A filter map associates keys of the form `field` or `field.op` with a
//! [`Value`](crate::Value). Entries are visited in ascending key order, so
//! the same map always produces the same SQL.

mod compile;
mod key;

pub use compile::{SkipReason, SkippedFilter, apply_filters, compile_filter};
pub use key::{FilterKey, FilterOp};

use std::collections::BTreeMap;

use crate::value::Value;

/// Filter map keyed by raw filter key.
pub type Filters = BTreeMap<String, Value>;

#[cfg(test)]
mod tests;
