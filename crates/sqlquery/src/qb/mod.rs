//! Flavor-aware statement builders.
//!
//! Every builder owns its conditions and renders through a single
//! [`ParamList`], so placeholder numbering always follows textual order:
//! SET values, then WHERE values, then LIMIT, then OFFSET.
//!
//! # Usage
//!
//! ```
//! use sqlquery::qb::{self, ConditionSink, SqlQb};
//! use sqlquery::Flavor;
//!
//! let mut q = qb::select(Flavor::Postgres, "users")
//!     .order_by("created_at DESC")
//!     .limit(20);
//! q.where_eq("status", "active");
//!
//! let built = q.build();
//! assert_eq!(
//!     built.sql,
//!     "SELECT * FROM users WHERE status = $1 ORDER BY created_at DESC LIMIT $2"
//! );
//! assert_eq!(built.args.len(), 2);
//! ```

mod delete;
mod expr;
mod insert;
mod param;
mod select;
mod traits;
mod update;

pub use delete::DeleteQb;
pub use expr::{Expr, ExprGroup};
pub use insert::InsertQb;
pub use param::ParamList;
pub use select::SelectQb;
pub use traits::{BuiltQuery, ConditionSink, SqlQb};
pub use update::UpdateQb;

use crate::flavor::Flavor;

/// Create a SELECT query builder for the given table.
pub fn select(flavor: Flavor, table: &str) -> SelectQb {
    SelectQb::new(flavor, table)
}

/// Create an INSERT query builder for the given table.
pub fn insert(flavor: Flavor, table: &str) -> InsertQb {
    InsertQb::new(flavor, table)
}

/// Create an UPDATE query builder for the given table.
pub fn update(flavor: Flavor, table: &str) -> UpdateQb {
    UpdateQb::new(flavor, table)
}

/// Create a DELETE query builder for the given table.
///
/// Without conditions the statement deletes every row.
pub fn delete(flavor: Flavor, table: &str) -> DeleteQb {
    DeleteQb::new(flavor, table)
}
