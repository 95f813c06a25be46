//! # sqlquery
//!
//! Dialect-aware SQL statement compiler.
//!
//! Describe a statement (table, fields, filters, pagination, ordering,
//! row locking or assignments) and get back parameterized SQL plus its
//! positional arguments. Nothing here opens a connection; hand the
//! `(sql, args)` pair to your driver.
//!
//! ## Features
//!
//! - **Three flavors**: `$N` placeholders for PostgreSQL, `?` for MySQL and SQLite
//! - **Filter maps**: `field` / `field.op` keys compiled into a deterministic WHERE clause
//! - **Aligned arguments**: the Nth placeholder always binds `args[N - 1]`
//! - **Value options**: options records are plain values, cloned to branch, loadable from JSON
//!
//! ## Filter keys
//!
//! | key | condition |
//! |---|---|
//! | `field` | `field = ?` (`field IS NULL` for a null value) |
//! | `field.in` / `field.notin` | `field IN (?, ...)` from a comma-separated string |
//! | `field.not` | `field <> ?` |
//! | `field.gt` `gte` `lt` `lte` | `>` `>=` `<` `<=` |
//! | `field.like` | `field LIKE ?` |
//! | `field.null` | `IS NULL` / `IS NOT NULL` from a boolean |
//!
//! ## Example
//!
//! ```
//! use sqlquery::{find_all_query, FindAllOptions, Flavor, Value};
//!
//! let opts = FindAllOptions::new(Flavor::Postgres)
//!     .with_filter("status", "active")
//!     .with_filter("age.gte", 18)
//!     .with_order_by("created_at DESC")
//!     .with_limit(10);
//!
//! let built = find_all_query("users", &opts);
//! assert_eq!(
//!     built.sql,
//!     "SELECT * FROM users WHERE age >= $1 AND status = $2 ORDER BY created_at DESC LIMIT $3 OFFSET $4"
//! );
//! assert_eq!(
//!     built.args,
//!     vec![Value::Int(18), Value::from("active"), Value::Int(10), Value::Int(0)]
//! );
//! ```
//!
//! `order_by` and the `FOR UPDATE` mode are inserted verbatim. Never build
//! them from untrusted input.

pub mod error;
pub mod filter;
pub mod flavor;
pub mod options;
pub mod prelude;
pub mod qb;
pub mod query;
pub mod record;
pub mod value;

pub use error::{QueryError, QueryResult};
pub use filter::{FilterKey, FilterOp, Filters, SkipReason, SkippedFilter};
pub use flavor::Flavor;
pub use options::{DeleteOptions, FindAllOptions, FindOptions, UpdateOptions};
pub use qb::{BuiltQuery, ConditionSink, SqlQb};
pub use query::{
    delete_query, delete_with_options_query, find_all_query, find_query, insert_query,
    update_query, update_with_options_query,
};
pub use record::Record;
pub use value::Value;

#[cfg(feature = "derive")]
pub use sqlquery_derive::Record;
