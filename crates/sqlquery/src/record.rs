//! Struct-to-column extraction used by [`insert_query`](crate::insert_query)
//! and [`update_query`](crate::update_query).

use crate::value::Value;

/// A value that can list its columns for a statement.
///
/// `tag` selects which columns take part (for example `"insert"` or
/// `"update"`); an implementation decides what each tag means. Columns are
/// rendered in the returned order.
///
/// Usually derived:
///
/// ```
/// # #[cfg(feature = "derive")] {
/// use sqlquery::{Record, Value};
///
/// #[derive(Record)]
/// struct Player {
///     #[sqlquery(tags = "insert")]
///     id: i64,
///     #[sqlquery(tags = "insert,update")]
///     name: String,
/// }
///
/// let p = Player { id: 1, name: "Ann".into() };
/// assert_eq!(p.columns("update"), vec![("name", Value::from("Ann"))]);
/// assert_eq!(p.columns("").len(), 2);
/// # }
/// ```
pub trait Record {
    /// Ordered `(column, value)` pairs selected by `tag`.
    fn columns(&self, tag: &str) -> Vec<(&'static str, Value)>;
}

impl<T: Record + ?Sized> Record for &T {
    fn columns(&self, tag: &str) -> Vec<(&'static str, Value)> {
        (**self).columns(tag)
    }
}
