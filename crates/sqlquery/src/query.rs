//! Statement assemblers: options or records in, [`BuiltQuery`] out.
//!
//! These functions never fail. Filter entries that cannot be compiled are
//! left out of the WHERE clause and reported in [`BuiltQuery::skipped`];
//! call [`BuiltQuery::strict`] to turn them into an error.

use crate::filter::{SkippedFilter, apply_filters};
use crate::flavor::Flavor;
use crate::options::{DeleteOptions, FindAllOptions, FindOptions, UpdateOptions};
use crate::qb::{BuiltQuery, ConditionSink, DeleteQb, InsertQb, SelectQb, SqlQb, UpdateQb};
use crate::record::Record;
use crate::value::Value;

/// Column matched by the id-based assemblers.
pub const ID_COLUMN: &str = "id";

#[cfg(feature = "tracing")]
fn trace_built(kind: &'static str, flavor: Flavor, built: &BuiltQuery) {
    tracing::trace!(
        target: "sqlquery.sql",
        kind,
        %flavor,
        sql = %built.sql,
        args = built.args.len(),
        skipped = built.skipped.len(),
        "compiled statement"
    );
}

#[cfg(not(feature = "tracing"))]
fn trace_built(_kind: &'static str, _flavor: Flavor, _built: &BuiltQuery) {}

fn finish(kind: &'static str, qb: &impl SqlQb, skipped: Vec<SkippedFilter>) -> BuiltQuery {
    let built = qb.build().with_skipped(skipped);
    trace_built(kind, qb.flavor(), &built);
    built
}

/// `SELECT fields FROM table [WHERE ...] [FOR UPDATE [mode]]`
///
/// ```
/// use sqlquery::{find_query, FindOptions, Flavor};
///
/// let opts = FindOptions::new(Flavor::Postgres)
///     .with_filter("status", "active")
///     .with_filter("age.gte", 18);
/// let built = find_query("users", &opts);
/// assert_eq!(built.sql, "SELECT * FROM users WHERE age >= $1 AND status = $2");
/// ```
pub fn find_query(table: &str, options: &FindOptions) -> BuiltQuery {
    let mut qb = SelectQb::new(options.flavor(), table).select_cols(options.fields());
    if let Some(mode) = options.for_update() {
        qb = qb.for_update(Some(mode));
    }
    let skipped = apply_filters(&mut qb, options.filters());
    finish("select", &qb, skipped)
}

/// `SELECT fields FROM table [WHERE ...] [ORDER BY ...] LIMIT ? OFFSET ? [FOR UPDATE [mode]]`
///
/// LIMIT and OFFSET are bound as arguments after the filter arguments.
pub fn find_all_query(table: &str, options: &FindAllOptions) -> BuiltQuery {
    let mut qb = SelectQb::new(options.flavor(), table)
        .select_cols(options.fields())
        .limit(options.limit())
        .offset(options.offset());
    if !options.order_by().is_empty() {
        qb = qb.order_by(options.order_by());
    }
    if let Some(mode) = options.for_update() {
        qb = qb.for_update(Some(mode));
    }
    let skipped = apply_filters(&mut qb, options.filters());
    finish("select", &qb, skipped)
}

/// `INSERT INTO table (cols) VALUES (?, ...)` from the record's `tag` columns.
pub fn insert_query(flavor: Flavor, tag: &str, table: &str, record: &impl Record) -> BuiltQuery {
    let qb = InsertQb::new(flavor, table).set_all(record.columns(tag));
    finish("insert", &qb, Vec::new())
}

/// `UPDATE table SET col = ?, ... WHERE id = ?` from the record's `tag` columns.
pub fn update_query(
    flavor: Flavor,
    tag: &str,
    table: &str,
    id: impl Into<Value>,
    record: &impl Record,
) -> BuiltQuery {
    let mut qb = UpdateQb::new(flavor, table).set_all(record.columns(tag));
    qb.where_eq(ID_COLUMN, id);
    finish("update", &qb, Vec::new())
}

/// `DELETE FROM table WHERE id = ?`
pub fn delete_query(flavor: Flavor, table: &str, id: impl Into<Value>) -> BuiltQuery {
    let mut qb = DeleteQb::new(flavor, table);
    qb.where_eq(ID_COLUMN, id);
    finish("delete", &qb, Vec::new())
}

/// `UPDATE table SET ... [WHERE ...]` with assignments in ascending column order.
///
/// ```
/// use sqlquery::{update_with_options_query, Flavor, UpdateOptions};
///
/// let opts = UpdateOptions::new(Flavor::Postgres)
///     .with_assignment("name", "X")
///     .with_assignment("age", 43)
///     .with_filter("id", 1);
/// let built = update_with_options_query("players", &opts);
/// assert_eq!(built.sql, "UPDATE players SET age = $1, name = $2 WHERE id = $3");
/// ```
pub fn update_with_options_query(table: &str, options: &UpdateOptions) -> BuiltQuery {
    let assignments = options
        .assignments()
        .iter()
        .map(|(column, value)| (column.as_str(), value.clone()));
    let mut qb = UpdateQb::new(options.flavor(), table).set_all(assignments);
    let skipped = apply_filters(&mut qb, options.filters());
    finish("update", &qb, skipped)
}

/// `DELETE FROM table [WHERE ...]`
///
/// With no filters (or only skipped ones) the statement deletes every row.
pub fn delete_with_options_query(table: &str, options: &DeleteOptions) -> BuiltQuery {
    let mut qb = DeleteQb::new(options.flavor(), table);
    let skipped = apply_filters(&mut qb, options.filters());
    finish("delete", &qb, skipped)
}
