//! INSERT query builder.

use crate::flavor::Flavor;
use crate::qb::param::ParamList;
use crate::qb::traits::{BuiltQuery, SqlQb};
use crate::value::Value;

/// INSERT query builder for a single row.
#[derive(Clone, Debug)]
pub struct InsertQb {
    flavor: Flavor,
    /// Table name
    table: String,
    /// Column names, aligned with `values`
    columns: Vec<String>,
    values: Vec<Value>,
}

impl InsertQb {
    /// Create a new INSERT query builder.
    pub fn new(flavor: Flavor, table: &str) -> Self {
        Self {
            flavor,
            table: table.to_string(),
            columns: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Set a column value.
    pub fn set(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.columns.push(column.to_string());
        self.values.push(value.into());
        self
    }

    /// Set every `(column, value)` pair in order.
    pub fn set_all<C: Into<String>>(mut self, fields: impl IntoIterator<Item = (C, Value)>) -> Self {
        for (column, value) in fields {
            self.columns.push(column.into());
            self.values.push(value);
        }
        self
    }
}

impl SqlQb for InsertQb {
    fn flavor(&self) -> Flavor {
        self.flavor
    }

    fn build(&self) -> BuiltQuery {
        let mut params = ParamList::new(self.flavor);

        if self.columns.is_empty() {
            let sql = match self.flavor {
                Flavor::MySql => format!("INSERT INTO {} () VALUES ()", self.table),
                Flavor::Postgres | Flavor::Sqlite => {
                    format!("INSERT INTO {} DEFAULT VALUES", self.table)
                }
            };
            return BuiltQuery::new(sql, Vec::new());
        }

        let placeholders: Vec<String> = self
            .values
            .iter()
            .map(|v| params.bind(v.clone()))
            .collect();
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table,
            self.columns.join(", "),
            placeholders.join(", ")
        );

        BuiltQuery::new(sql, params.into_values())
    }
}
