//! SELECT query builder.

use crate::flavor::Flavor;
use crate::qb::expr::{Expr, ExprGroup};
use crate::qb::param::ParamList;
use crate::qb::traits::{BuiltQuery, ConditionSink, SqlQb};

/// Row-locking clause appended after everything else.
#[derive(Clone, Debug, PartialEq)]
struct ForUpdate {
    /// Raw mode appended verbatim (e.g. `NOWAIT`, `SKIP LOCKED`).
    mode: Option<String>,
}

/// SELECT query builder.
#[derive(Clone, Debug)]
pub struct SelectQb {
    flavor: Flavor,
    /// Table name
    table: String,
    /// SELECT columns (default ["*"])
    select_cols: Vec<String>,
    /// WHERE conditions
    where_group: ExprGroup,
    /// Raw ORDER BY clause
    order_by: Option<String>,
    /// LIMIT (bound as an argument)
    limit: Option<i64>,
    /// OFFSET (bound as an argument)
    offset: Option<i64>,
    for_update: Option<ForUpdate>,
}

impl SelectQb {
    /// Create a new SELECT query builder for a table.
    pub fn new(flavor: Flavor, table: &str) -> Self {
        Self {
            flavor,
            table: table.to_string(),
            select_cols: vec!["*".to_string()],
            where_group: ExprGroup::new(),
            order_by: None,
            limit: None,
            offset: None,
            for_update: None,
        }
    }

    /// Set SELECT columns. An empty list selects `*`.
    pub fn select_cols<S: AsRef<str>>(mut self, cols: &[S]) -> Self {
        self.select_cols = cols.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    /// Add a custom expression.
    pub fn and_expr(mut self, expr: Expr) -> Self {
        self.where_group.push(expr);
        self
    }

    /// Set the ORDER BY clause.
    ///
    /// The clause is inserted verbatim after `ORDER BY`; never pass untrusted input.
    pub fn order_by(mut self, clause: &str) -> Self {
        self.order_by = Some(clause.to_string());
        self
    }

    /// Set LIMIT. A negative value removes the clause.
    pub fn limit(mut self, n: i64) -> Self {
        self.limit = (n >= 0).then_some(n);
        self
    }

    /// Set OFFSET. A negative value removes the clause.
    pub fn offset(mut self, n: i64) -> Self {
        self.offset = (n >= 0).then_some(n);
        self
    }

    /// Lock selected rows with `FOR UPDATE`, optionally followed by a raw mode.
    ///
    /// The mode is appended verbatim; never pass untrusted input.
    pub fn for_update(mut self, mode: Option<&str>) -> Self {
        self.for_update = Some(ForUpdate {
            mode: mode.filter(|m| !m.is_empty()).map(str::to_string),
        });
        self
    }

    fn write_pagination(&self, sql: &mut String, params: &mut ParamList) {
        if let Some(limit) = self.limit {
            sql.push_str(" LIMIT ");
            sql.push_str(&params.bind(limit));
        } else if self.flavor.offset_requires_limit() {
            return;
        }

        if let Some(offset) = self.offset {
            sql.push_str(" OFFSET ");
            sql.push_str(&params.bind(offset));
        }
    }

    fn write_for_update(&self, sql: &mut String) {
        let Some(lock) = &self.for_update else {
            return;
        };
        if !self.flavor.supports_for_update() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                target: "sqlquery.sql",
                flavor = %self.flavor,
                table = %self.table,
                "dropping FOR UPDATE: flavor has no row locks"
            );
            return;
        }
        sql.push_str(" FOR UPDATE");
        if let Some(mode) = &lock.mode {
            sql.push(' ');
            sql.push_str(mode);
        }
    }
}

impl ConditionSink for SelectQb {
    fn and_where(&mut self, expr: Expr) {
        self.where_group.push(expr);
    }
}

impl SqlQb for SelectQb {
    fn flavor(&self) -> Flavor {
        self.flavor
    }

    fn build(&self) -> BuiltQuery {
        let mut params = ParamList::new(self.flavor);

        let cols = if self.select_cols.is_empty() {
            "*".to_string()
        } else {
            self.select_cols.join(", ")
        };
        let mut sql = format!("SELECT {} FROM {}", cols, self.table);

        self.where_group.write_where(&mut sql, &mut params);

        if let Some(order) = self.order_by.as_deref().filter(|o| !o.is_empty()) {
            sql.push_str(" ORDER BY ");
            sql.push_str(order);
        }

        self.write_pagination(&mut sql, &mut params);
        self.write_for_update(&mut sql);

        BuiltQuery::new(sql, params.into_values())
    }
}
