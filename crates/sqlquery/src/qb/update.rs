//! UPDATE query builder.

use crate::flavor::Flavor;
use crate::qb::expr::{Expr, ExprGroup};
use crate::qb::param::ParamList;
use crate::qb::traits::{BuiltQuery, ConditionSink, SqlQb};
use crate::value::Value;

/// UPDATE query builder.
///
/// SET entries are rendered in the order they were added; WHERE placeholders
/// continue the numbering after the last SET placeholder.
#[derive(Clone, Debug)]
pub struct UpdateQb {
    flavor: Flavor,
    /// Table name
    table: String,
    /// SET clauses
    set_fields: Vec<(String, Value)>,
    /// WHERE conditions
    where_group: ExprGroup,
}

impl UpdateQb {
    /// Create a new UPDATE query builder.
    pub fn new(flavor: Flavor, table: &str) -> Self {
        Self {
            flavor,
            table: table.to_string(),
            set_fields: Vec::new(),
            where_group: ExprGroup::new(),
        }
    }

    /// Set a column value.
    pub fn set(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.set_fields.push((column.to_string(), value.into()));
        self
    }

    /// Set every `(column, value)` pair in order.
    pub fn set_all<C: Into<String>>(mut self, fields: impl IntoIterator<Item = (C, Value)>) -> Self {
        self.set_fields
            .extend(fields.into_iter().map(|(c, v)| (c.into(), v)));
        self
    }

    /// Add a custom expression.
    pub fn and_expr(mut self, expr: Expr) -> Self {
        self.where_group.push(expr);
        self
    }
}

impl ConditionSink for UpdateQb {
    fn and_where(&mut self, expr: Expr) {
        self.where_group.push(expr);
    }
}

impl SqlQb for UpdateQb {
    fn flavor(&self) -> Flavor {
        self.flavor
    }

    fn build(&self) -> BuiltQuery {
        let mut params = ParamList::new(self.flavor);
        let mut sql = format!("UPDATE {}", self.table);

        if !self.set_fields.is_empty() {
            let set_parts: Vec<String> = self
                .set_fields
                .iter()
                .map(|(col, value)| format!("{} = {}", col, params.bind(value.clone())))
                .collect();
            sql.push_str(" SET ");
            sql.push_str(&set_parts.join(", "));
        }

        self.where_group.write_where(&mut sql, &mut params);

        BuiltQuery::new(sql, params.into_values())
    }
}
