//! Convenient imports for typical `sqlquery` usage.
//!
//! ```
//! use sqlquery::prelude::*;
//!
//! let built = delete_query(Flavor::Sqlite, "sessions", 7);
//! assert_eq!(built.sql, "DELETE FROM sessions WHERE id = ?");
//! ```

pub use crate::{
    BuiltQuery, DeleteOptions, FindAllOptions, FindOptions, Flavor, QueryError, QueryResult,
    Record, UpdateOptions, Value, delete_query, delete_with_options_query, find_all_query,
    find_query, insert_query, update_query, update_with_options_query,
};
