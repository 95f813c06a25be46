//! Options records consumed by the statement assemblers in [`crate::query`].
//!
//! Every record is a plain value: `with_*` consumes `self` and returns the
//! updated record. To branch from a shared base, clone it first; the clone
//! owns its own filter and assignment maps.
//!
//! ```
//! use sqlquery::{FindAllOptions, Flavor};
//!
//! let base = FindAllOptions::new(Flavor::Postgres).with_filter("status", "active");
//! let admins = base.clone().with_filter("role", "admin");
//!
//! assert_eq!(base.filters().len(), 1);
//! assert_eq!(admins.filters().len(), 2);
//! ```
//!
//! All records deserialize from JSON, so filter sets can be loaded from
//! configuration:
//!
//! ```
//! use sqlquery::{DeleteOptions, Flavor};
//!
//! let opts = DeleteOptions::from_json(r#"{"flavor": "mysql", "filters": {"id.in": "1,2"}}"#)?;
//! assert_eq!(opts.flavor(), Flavor::MySql);
//! # Ok::<(), sqlquery::QueryError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::error::QueryResult;
use crate::filter::Filters;
use crate::flavor::Flavor;
use crate::value::Value;

fn default_fields() -> Vec<String> {
    vec!["*".to_string()]
}

/// Options for [`find_query`](crate::find_query).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FindOptions {
    flavor: Flavor,
    fields: Vec<String>,
    filters: Filters,
    for_update: bool,
    /// Appended verbatim after `FOR UPDATE` when non-empty.
    for_update_mode: String,
}

impl Default for FindOptions {
    fn default() -> Self {
        Self::new(Flavor::default())
    }
}

impl FindOptions {
    /// Select all columns, no filters, no locking.
    pub fn new(flavor: Flavor) -> Self {
        Self {
            flavor,
            fields: default_fields(),
            filters: Filters::new(),
            for_update: false,
            for_update_mode: String::new(),
        }
    }

    /// Load options from a JSON document.
    pub fn from_json(json: &str) -> QueryResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replace the selected columns.
    pub fn with_fields<S: Into<String>>(mut self, fields: impl IntoIterator<Item = S>) -> Self {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Add or replace a filter entry.
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    /// Lock the selected rows; `mode` (e.g. `NOWAIT`) may be empty.
    pub fn with_for_update(mut self, mode: impl Into<String>) -> Self {
        self.for_update = true;
        self.for_update_mode = mode.into();
        self
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    /// `Some(mode)` when locking was requested.
    pub fn for_update(&self) -> Option<&str> {
        self.for_update.then_some(self.for_update_mode.as_str())
    }
}

/// Options for [`find_all_query`](crate::find_all_query).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FindAllOptions {
    flavor: Flavor,
    fields: Vec<String>,
    filters: Filters,
    limit: i64,
    offset: i64,
    order_by: String,
    for_update: bool,
    /// Appended verbatim after `FOR UPDATE` when non-empty.
    for_update_mode: String,
}

impl Default for FindAllOptions {
    fn default() -> Self {
        Self::new(Flavor::default())
    }
}

impl FindAllOptions {
    /// Select all columns with `LIMIT 0 OFFSET 0`.
    pub fn new(flavor: Flavor) -> Self {
        Self {
            flavor,
            fields: default_fields(),
            filters: Filters::new(),
            limit: 0,
            offset: 0,
            order_by: String::new(),
            for_update: false,
            for_update_mode: String::new(),
        }
    }

    /// Load options from a JSON document.
    pub fn from_json(json: &str) -> QueryResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replace the selected columns.
    pub fn with_fields<S: Into<String>>(mut self, fields: impl IntoIterator<Item = S>) -> Self {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Add or replace a filter entry.
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    /// A negative limit drops the LIMIT clause.
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    /// A negative offset drops the OFFSET clause.
    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    /// Raw ORDER BY clause, e.g. `created_at DESC, id`.
    ///
    /// Inserted verbatim; never pass untrusted input.
    pub fn with_order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = order_by.into();
        self
    }

    /// Lock the selected rows; `mode` (e.g. `SKIP LOCKED`) may be empty.
    pub fn with_for_update(mut self, mode: impl Into<String>) -> Self {
        self.for_update = true;
        self.for_update_mode = mode.into();
        self
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn order_by(&self) -> &str {
        &self.order_by
    }

    /// `Some(mode)` when locking was requested.
    pub fn for_update(&self) -> Option<&str> {
        self.for_update.then_some(self.for_update_mode.as_str())
    }
}

/// Options for [`update_with_options_query`](crate::update_with_options_query).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UpdateOptions {
    flavor: Flavor,
    assignments: Filters,
    filters: Filters,
}

impl UpdateOptions {
    pub fn new(flavor: Flavor) -> Self {
        Self {
            flavor,
            ..Self::default()
        }
    }

    /// Load options from a JSON document.
    pub fn from_json(json: &str) -> QueryResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add or replace a `column = value` assignment.
    pub fn with_assignment(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.assignments.insert(column.into(), value.into());
        self
    }

    /// Add or replace a filter entry.
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Assignments keyed by column, in ascending column order.
    pub fn assignments(&self) -> &Filters {
        &self.assignments
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }
}

/// Options for [`delete_with_options_query`](crate::delete_with_options_query).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeleteOptions {
    flavor: Flavor,
    filters: Filters,
}

impl DeleteOptions {
    pub fn new(flavor: Flavor) -> Self {
        Self {
            flavor,
            filters: Filters::new(),
        }
    }

    /// Load options from a JSON document.
    pub fn from_json(json: &str) -> QueryResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add or replace a filter entry.
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_defaults() {
        let opts = FindOptions::new(Flavor::MySql);
        assert_eq!(opts.flavor(), Flavor::MySql);
        assert_eq!(opts.fields(), ["*"]);
        assert!(opts.filters().is_empty());
        assert_eq!(opts.for_update(), None);
    }

    #[test]
    fn find_all_defaults() {
        let opts = FindAllOptions::new(Flavor::Sqlite);
        assert_eq!(opts.limit(), 0);
        assert_eq!(opts.offset(), 0);
        assert_eq!(opts.order_by(), "");
        assert_eq!(opts.fields(), ["*"]);
    }

    #[test]
    fn branches_do_not_share_filters() {
        let base = FindOptions::new(Flavor::Postgres).with_filter("a", 1);
        let left = base.clone().with_filter("b", 2);
        let right = base.clone().with_filter("c", 3);

        assert_eq!(base.filters().len(), 1);
        assert!(left.filters().contains_key("b"));
        assert!(!left.filters().contains_key("c"));
        assert!(right.filters().contains_key("c"));
        assert!(!right.filters().contains_key("b"));
    }

    #[test]
    fn update_branches_do_not_share_assignments() {
        let base = UpdateOptions::new(Flavor::Postgres).with_assignment("name", "x");
        let changed = base.clone().with_assignment("age", 3);
        assert_eq!(base.assignments().len(), 1);
        assert_eq!(changed.assignments().len(), 2);
    }

    #[test]
    fn with_filter_replaces_existing_key() {
        let opts = DeleteOptions::new(Flavor::Postgres)
            .with_filter("id", 1)
            .with_filter("id", 2);
        assert_eq!(opts.filters().get("id"), Some(&Value::Int(2)));
    }

    #[test]
    fn for_update_with_empty_mode() {
        let opts = FindAllOptions::new(Flavor::Postgres).with_for_update("");
        assert_eq!(opts.for_update(), Some(""));
    }

    #[test]
    fn find_all_from_json() {
        let opts = FindAllOptions::from_json(
            r#"{
                "flavor": "postgresql",
                "fields": ["id", "name"],
                "filters": {"age.gte": 18, "status": "active", "deleted_at": null},
                "limit": 20,
                "order_by": "id DESC",
                "for_update": true,
                "for_update_mode": "NOWAIT"
            }"#,
        )
        .unwrap();

        assert_eq!(opts.flavor(), Flavor::Postgres);
        assert_eq!(opts.fields(), ["id", "name"]);
        assert_eq!(opts.filters().get("age.gte"), Some(&Value::Int(18)));
        assert_eq!(opts.filters().get("deleted_at"), Some(&Value::Null));
        assert_eq!(opts.limit(), 20);
        assert_eq!(opts.offset(), 0);
        assert_eq!(opts.for_update(), Some("NOWAIT"));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let opts = FindOptions::from_json("{}").unwrap();
        assert_eq!(opts, FindOptions::new(Flavor::Postgres));
    }

    #[test]
    fn invalid_json_is_a_serialization_error() {
        let err = UpdateOptions::from_json(r#"{"flavor": "oracle"}"#).unwrap_err();
        assert!(matches!(err, crate::QueryError::Serialization(_)));

        let err = DeleteOptions::from_json(r#"{"filter": {}}"#).unwrap_err();
        assert!(matches!(err, crate::QueryError::Serialization(_)));
    }

    #[test]
    fn serialize_round_trips() {
        let opts = UpdateOptions::new(Flavor::MySql)
            .with_assignment("name", "x")
            .with_filter("id.in", "1,2");
        let json = serde_json::to_string(&opts).unwrap();
        assert_eq!(UpdateOptions::from_json(&json).unwrap(), opts);
    }
}
