//! Load options from JSON and compile them.
//!
//! Run with: cargo run --example json_options -p sqlquery -- '{"flavor":"mysql","filters":{"id.gt":3}}'

use sqlquery::{FindAllOptions, QueryError, find_all_query};

const DEFAULT_OPTIONS: &str = r#"{
    "flavor": "postgres",
    "fields": ["id", "title"],
    "filters": {"status": "published", "tag.in": "rust,sql", "deleted_at": null},
    "limit": 20,
    "order_by": "published_at DESC"
}"#;

fn main() -> Result<(), QueryError> {
    let json = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OPTIONS.to_string());

    let opts = FindAllOptions::from_json(&json)?;
    let built = find_all_query("posts", &opts);

    println!("sql:  {}", built.sql);
    println!("args: {:?}", built.args);
    if !built.skipped.is_empty() {
        return Err(QueryError::SkippedFilters(built.skipped));
    }
    Ok(())
}
