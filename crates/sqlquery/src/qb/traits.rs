//! Trait definitions for query builders.

use crate::error::{QueryError, QueryResult};
use crate::filter::SkippedFilter;
use crate::flavor::Flavor;
use crate::qb::expr::Expr;
use crate::value::Value;

/// Base trait for all query builders.
pub trait SqlQb {
    /// Flavor the statement is rendered for.
    fn flavor(&self) -> Flavor;

    /// Render the statement and collect its arguments.
    fn build(&self) -> BuiltQuery;

    /// Debug helper to get the SQL string.
    fn to_sql(&self) -> String {
        self.build().sql
    }
}

/// The condition sink shared by SELECT, UPDATE and DELETE builders.
///
/// Implementors only provide [`ConditionSink::and_where`]; the predicate
/// vocabulary is identical for every statement kind.
pub trait ConditionSink {
    /// AND an expression onto the WHERE clause.
    fn and_where(&mut self, expr: Expr);

    /// column = value
    fn where_eq(&mut self, column: &str, value: impl Into<Value>) {
        self.and_where(Expr::eq(column, value));
    }

    /// column <> value
    fn where_ne(&mut self, column: &str, value: impl Into<Value>) {
        self.and_where(Expr::ne(column, value));
    }

    /// column > value
    fn where_gt(&mut self, column: &str, value: impl Into<Value>) {
        self.and_where(Expr::gt(column, value));
    }

    /// column >= value
    fn where_gte(&mut self, column: &str, value: impl Into<Value>) {
        self.and_where(Expr::gte(column, value));
    }

    /// column < value
    fn where_lt(&mut self, column: &str, value: impl Into<Value>) {
        self.and_where(Expr::lt(column, value));
    }

    /// column <= value
    fn where_lte(&mut self, column: &str, value: impl Into<Value>) {
        self.and_where(Expr::lte(column, value));
    }

    /// column LIKE pattern
    fn where_like(&mut self, column: &str, pattern: impl Into<Value>) {
        self.and_where(Expr::like(column, pattern));
    }

    /// column IN (values...)
    fn where_in<V: Into<Value>>(&mut self, column: &str, values: Vec<V>) {
        self.and_where(Expr::in_list(column, values));
    }

    /// column NOT IN (values...)
    fn where_not_in<V: Into<Value>>(&mut self, column: &str, values: Vec<V>) {
        self.and_where(Expr::not_in(column, values));
    }

    /// column IS NULL
    fn where_null(&mut self, column: &str) {
        self.and_where(Expr::is_null(column));
    }

    /// column IS NOT NULL
    fn where_not_null(&mut self, column: &str) {
        self.and_where(Expr::is_not_null(column));
    }

    /// Raw SQL condition.
    ///
    /// The fragment is inserted verbatim; never pass untrusted input.
    fn where_raw(&mut self, sql: &str) {
        self.and_where(Expr::raw(sql));
    }
}

/// The result of building a query: SQL text plus positional arguments.
///
/// The Nth placeholder in `sql` corresponds to `args[N - 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    pub sql: String,
    pub args: Vec<Value>,
    /// Filters dropped while compiling (never affects `sql`/`args`).
    pub skipped: Vec<SkippedFilter>,
}

impl BuiltQuery {
    /// Create a new built query.
    pub fn new(sql: String, args: Vec<Value>) -> Self {
        Self {
            sql,
            args,
            skipped: Vec::new(),
        }
    }

    /// Attach skipped-filter diagnostics.
    pub fn with_skipped(mut self, skipped: Vec<SkippedFilter>) -> Self {
        self.skipped = skipped;
        self
    }

    /// Split into the `(sql, args)` pair a database driver expects.
    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.args)
    }

    /// Fail if any filter was dropped during compilation.
    ///
    /// The default compile path silently omits malformed filters; call this to
    /// turn those omissions into a [`QueryError::SkippedFilters`].
    pub fn strict(self) -> QueryResult<Self> {
        if self.skipped.is_empty() {
            Ok(self)
        } else {
            Err(QueryError::SkippedFilters(self.skipped))
        }
    }

    /// Get arguments as references compatible with tokio-postgres.
    #[cfg(feature = "postgres")]
    pub fn params_ref(&self) -> Vec<&(dyn tokio_postgres::types::ToSql + Sync)> {
        self.args
            .iter()
            .map(|v| v as &(dyn tokio_postgres::types::ToSql + Sync))
            .collect()
    }
}
