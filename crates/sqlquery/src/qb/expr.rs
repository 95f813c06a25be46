//! Expression layer for WHERE clauses.
//!
//! `Expr::build()` writes placeholders through a shared [`ParamList`], so the
//! position of each placeholder in the SQL text and the position of its value
//! in the argument list are decided in the same step.

use crate::qb::param::ParamList;
use crate::value::Value;

/// Expression node for building WHERE clauses.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// AND group: all conditions must be true.
    And(Vec<Expr>),

    /// Simple comparison: column op placeholder
    Compare {
        column: String,
        op: &'static str,
        value: Value,
    },

    /// NULL check: column IS NULL or column IS NOT NULL
    NullCheck { column: String, is_null: bool },

    /// IN list: column IN (p1, p2, ...) or column NOT IN (...)
    InList {
        column: String,
        values: Vec<Value>,
        negated: bool,
    },

    /// Raw SQL fragment without parameters.
    Raw(String),

    /// Always true (used for empty NOT IN lists).
    True,

    /// Always false (used for empty IN lists).
    False,
}

impl Expr {
    /// Create an AND expression from a list of expressions.
    pub fn and(exprs: Vec<Expr>) -> Self {
        Expr::And(exprs)
    }

    fn compare(column: impl Into<String>, op: &'static str, value: impl Into<Value>) -> Self {
        Expr::Compare {
            column: column.into(),
            op,
            value: value.into(),
        }
    }

    /// column = value
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, "=", value)
    }

    /// column <> value
    pub fn ne(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, "<>", value)
    }

    /// column > value
    pub fn gt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, ">", value)
    }

    /// column >= value
    pub fn gte(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, ">=", value)
    }

    /// column < value
    pub fn lt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, "<", value)
    }

    /// column <= value
    pub fn lte(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, "<=", value)
    }

    /// column LIKE pattern
    pub fn like(column: impl Into<String>, pattern: impl Into<Value>) -> Self {
        Self::compare(column, "LIKE", pattern)
    }

    /// column IS NULL
    pub fn is_null(column: impl Into<String>) -> Self {
        Expr::NullCheck {
            column: column.into(),
            is_null: true,
        }
    }

    /// column IS NOT NULL
    pub fn is_not_null(column: impl Into<String>) -> Self {
        Expr::NullCheck {
            column: column.into(),
            is_null: false,
        }
    }

    /// column IN (values...)
    pub fn in_list<V: Into<Value>>(column: impl Into<String>, values: Vec<V>) -> Self {
        if values.is_empty() {
            return Expr::False;
        }
        Expr::InList {
            column: column.into(),
            values: values.into_iter().map(Into::into).collect(),
            negated: false,
        }
    }

    /// column NOT IN (values...)
    pub fn not_in<V: Into<Value>>(column: impl Into<String>, values: Vec<V>) -> Self {
        if values.is_empty() {
            return Expr::True;
        }
        Expr::InList {
            column: column.into(),
            values: values.into_iter().map(Into::into).collect(),
            negated: true,
        }
    }

    /// Create a raw SQL fragment.
    pub fn raw(sql: impl Into<String>) -> Self {
        Expr::Raw(sql.into())
    }

    /// Number of placeholders this expression will emit.
    pub fn param_count(&self) -> usize {
        match self {
            Expr::And(exprs) => exprs.iter().map(Expr::param_count).sum(),
            Expr::Compare { .. } => 1,
            Expr::InList { values, .. } => values.len(),
            Expr::NullCheck { .. } | Expr::Raw(_) | Expr::True | Expr::False => 0,
        }
    }

    /// Check if this expression is empty (contains no conditions).
    pub fn is_empty(&self) -> bool {
        match self {
            Expr::And(exprs) => exprs.iter().all(Expr::is_empty),
            _ => false,
        }
    }

    /// Build the SQL fragment, binding values into `params` in textual order.
    pub fn build(&self, params: &mut ParamList) -> String {
        match self {
            Expr::And(exprs) => join_and(exprs, params),
            Expr::Compare { column, op, value } => {
                let placeholder = params.bind(value.clone());
                format!("{column} {op} {placeholder}")
            }
            Expr::NullCheck { column, is_null } => {
                if *is_null {
                    format!("{column} IS NULL")
                } else {
                    format!("{column} IS NOT NULL")
                }
            }
            Expr::InList {
                column,
                values,
                negated,
            } => {
                if values.is_empty() {
                    return if *negated { "1=1".to_string() } else { "1=0".to_string() };
                }
                let placeholders: Vec<String> =
                    values.iter().map(|v| params.bind(v.clone())).collect();
                let op = if *negated { "NOT IN" } else { "IN" };
                format!("{column} {op} ({})", placeholders.join(", "))
            }
            Expr::Raw(sql) => sql.clone(),
            Expr::True => "1=1".to_string(),
            Expr::False => "1=0".to_string(),
        }
    }
}

/// AND the non-empty expressions together.
///
/// Raw fragments are parenthesized when they share the clause with another
/// condition, so an `OR` inside them cannot bind across the `AND`.
fn join_and(exprs: &[Expr], params: &mut ParamList) -> String {
    let live: Vec<&Expr> = exprs.iter().filter(|e| !e.is_empty()).collect();
    let joined = live.len() > 1;

    let mut sql = String::new();
    for expr in live {
        let part = expr.build(params);
        if part.is_empty() {
            continue;
        }
        if !sql.is_empty() {
            sql.push_str(" AND ");
        }
        if joined && matches!(expr, Expr::Raw(_)) {
            sql.push('(');
            sql.push_str(&part);
            sql.push(')');
        } else {
            sql.push_str(&part);
        }
    }
    sql
}

/// A builder for constructing WHERE clauses incrementally.
///
/// Expressions are ANDed together in the order they were added.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExprGroup {
    exprs: Vec<Expr>,
}

impl ExprGroup {
    /// Create a new empty expression group.
    pub fn new() -> Self {
        Self { exprs: Vec::new() }
    }

    /// Check if the group is empty.
    pub fn is_empty(&self) -> bool {
        self.exprs.iter().all(Expr::is_empty)
    }

    /// Add an expression to be ANDed.
    pub fn push(&mut self, expr: Expr) {
        self.exprs.push(expr);
    }

    /// Get all expressions.
    pub fn exprs(&self) -> &[Expr] {
        &self.exprs
    }

    /// Build the clause content (without the `WHERE` keyword) into `params`.
    pub fn build(&self, params: &mut ParamList) -> String {
        join_and(&self.exprs, params)
    }

    /// Append ` WHERE <conditions>` to `sql` if the group is non-empty.
    pub fn write_where(&self, sql: &mut String, params: &mut ParamList) {
        let clause = self.build(params);
        if !clause.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clause);
        }
    }
}
