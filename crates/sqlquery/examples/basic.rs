//! Basic usage example for sqlquery
//!
//! Run with: cargo run --example basic -p sqlquery

use sqlquery::{
    DeleteOptions, FindAllOptions, Flavor, QueryError, Record, UpdateOptions, delete_query,
    delete_with_options_query, find_all_query, insert_query, update_query,
    update_with_options_query,
};

#[derive(Debug, Record)]
struct User {
    #[sqlquery(tags = "insert")]
    id: i64,
    #[sqlquery(tags = "insert,update")]
    username: String,
    #[sqlquery(tags = "insert,update")]
    email: Option<String>,
}

fn main() -> Result<(), QueryError> {
    let user = User {
        id: 1,
        username: "alice".to_string(),
        email: Some("alice@example.com".to_string()),
    };

    for flavor in Flavor::ALL {
        println!("== {flavor} ==");

        let built = insert_query(flavor, "insert", "users", &user);
        println!("{}  {:?}", built.sql, built.args);

        let built = update_query(flavor, "update", "users", user.id, &user);
        println!("{}  {:?}", built.sql, built.args);

        let opts = FindAllOptions::new(flavor)
            .with_filter("username.like", "a%")
            .with_filter("id.in", "1,2,3")
            .with_order_by("id DESC")
            .with_limit(10)
            .with_for_update("SKIP LOCKED");
        let built = find_all_query("users", &opts).strict()?;
        println!("{}  {:?}", built.sql, built.args);

        let opts = UpdateOptions::new(flavor)
            .with_assignment("email", None::<String>)
            .with_filter("email.null", false);
        let built = update_with_options_query("users", &opts);
        println!("{}  {:?}", built.sql, built.args);

        let built = delete_query(flavor, "users", user.id);
        println!("{}  {:?}", built.sql, built.args);

        // Malformed filters are dropped, not fatal.
        let opts = DeleteOptions::new(flavor).with_filter("id.in", 5);
        let built = delete_with_options_query("users", &opts);
        for skipped in &built.skipped {
            println!("skipped {skipped}");
        }
    }

    Ok(())
}
