#![cfg(feature = "derive")]

use sqlquery::{Flavor, Record, Value, insert_query, update_query};

#[derive(Debug, Clone, Record)]
struct Player {
    #[sqlquery(tags = "insert")]
    id: i64,
    #[sqlquery(tags = "insert,update")]
    name: String,
}

#[derive(Debug, Clone, Record)]
struct Account {
    #[sqlquery(tags = "insert")]
    id: uuid::Uuid,
    #[sqlquery(column = "display_name", tags = "insert, update")]
    name: String,
    #[sqlquery(tags = "update")]
    nickname: Option<String>,
    #[sqlquery(skip)]
    #[allow(dead_code)]
    cached_rank: u64,
    created_at: chrono::DateTime<chrono::Utc>,
}

fn account() -> Account {
    Account {
        id: uuid::Uuid::nil(),
        name: "Ann".to_string(),
        nickname: None,
        cached_rank: 3,
        created_at: chrono::DateTime::from_timestamp(0, 0).unwrap(),
    }
}

#[test]
fn player_insert_and_update() {
    let p = Player {
        id: 1,
        name: "Mr Bean".to_string(),
    };

    let built = insert_query(Flavor::Postgres, "insert", "players", &p);
    assert_eq!(built.sql, "INSERT INTO players (id, name) VALUES ($1, $2)");
    assert_eq!(built.args, vec![Value::Int(1), Value::from("Mr Bean")]);

    let built = update_query(Flavor::Postgres, "update", "players", 1, &p);
    assert_eq!(built.sql, "UPDATE players SET name = $1 WHERE id = $2");
    assert_eq!(built.args, vec![Value::from("Mr Bean"), Value::Int(1)]);
}

#[test]
fn empty_tag_selects_every_field() {
    let cols: Vec<&str> = account().columns("").into_iter().map(|(c, _)| c).collect();
    assert_eq!(cols, ["id", "display_name", "nickname", "created_at"]);
}

#[test]
fn tags_select_fields_in_declaration_order() {
    let a = account();

    let insert: Vec<&str> = a.columns("insert").into_iter().map(|(c, _)| c).collect();
    assert_eq!(insert, ["id", "display_name"]);

    let update = a.columns("update");
    assert_eq!(
        update,
        vec![("display_name", Value::from("Ann")), ("nickname", Value::Null)]
    );

    assert!(a.columns("archive").is_empty());
}

#[test]
fn derived_record_by_reference() {
    let a = account();
    let built = update_query(Flavor::MySql, "update", "accounts", a.id, &&a);
    assert_eq!(
        built.sql,
        "UPDATE accounts SET display_name = ?, nickname = ? WHERE id = ?"
    );
    assert_eq!(built.args[2], Value::Uuid(uuid::Uuid::nil()));
}
