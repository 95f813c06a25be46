//! Derive macros for sqlquery
//!
//! Provides `#[derive(Record)]`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod attrs;
mod record;

/// Derive `Record` for a struct with named fields.
///
/// # Example
///
/// ```ignore
/// use sqlquery::Record;
///
/// #[derive(Record)]
/// struct Player {
///     #[sqlquery(tags = "insert")]
///     id: i64,
///     #[sqlquery(column = "display_name", tags = "insert,update")]
///     name: String,
///     #[sqlquery(skip)]
///     cache: Vec<u8>,
/// }
/// ```
///
/// # Attributes
///
/// - `#[sqlquery(column = "name")]` - Map field to a different column name
/// - `#[sqlquery(tags = "a,b")]` - Statement tags that include this field
/// - `#[sqlquery(skip)]` - Never emit this field
///
/// Every non-skipped field is emitted for the empty tag. Field types must be
/// `Clone + Into<sqlquery::Value>`.
#[proc_macro_derive(Record, attributes(sqlquery))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
