//! DELETE query builder.

use crate::flavor::Flavor;
use crate::qb::expr::{Expr, ExprGroup};
use crate::qb::param::ParamList;
use crate::qb::traits::{BuiltQuery, ConditionSink, SqlQb};

/// DELETE query builder.
///
/// A builder without conditions renders an unconditional DELETE; the filter
/// compiler never adds a guard of its own.
#[derive(Clone, Debug)]
pub struct DeleteQb {
    flavor: Flavor,
    /// Table name
    table: String,
    /// WHERE conditions
    where_group: ExprGroup,
}

impl DeleteQb {
    /// Create a new DELETE query builder.
    pub fn new(flavor: Flavor, table: &str) -> Self {
        Self {
            flavor,
            table: table.to_string(),
            where_group: ExprGroup::new(),
        }
    }

    /// Add a custom expression.
    pub fn and_expr(mut self, expr: Expr) -> Self {
        self.where_group.push(expr);
        self
    }
}

impl ConditionSink for DeleteQb {
    fn and_where(&mut self, expr: Expr) {
        self.where_group.push(expr);
    }
}

impl SqlQb for DeleteQb {
    fn flavor(&self) -> Flavor {
        self.flavor
    }

    fn build(&self) -> BuiltQuery {
        let mut params = ParamList::new(self.flavor);
        let mut sql = format!("DELETE FROM {}", self.table);
        self.where_group.write_where(&mut sql, &mut params);
        BuiltQuery::new(sql, params.into_values())
    }
}
