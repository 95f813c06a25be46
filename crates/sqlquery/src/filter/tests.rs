//! Tests for filter compilation against real statement builders.

use crate::filter::{FilterKey, Filters, SkipReason, SkippedFilter, apply_filters, compile_filter};
use crate::flavor::Flavor;
use crate::qb::{BuiltQuery, Expr, SelectQb, SqlQb};
use crate::value::Value;

fn filters<const N: usize>(entries: [(&str, Value); N]) -> Filters {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

fn where_of(flavor: Flavor, filters: &Filters) -> (BuiltQuery, Vec<SkippedFilter>) {
    let mut qb = SelectQb::new(flavor, "t");
    let skipped = apply_filters(&mut qb, filters);
    (qb.build(), skipped)
}

fn placeholder_count(sql: &str, flavor: Flavor) -> usize {
    match flavor {
        Flavor::Postgres => sql.matches('$').count(),
        Flavor::MySql | Flavor::Sqlite => sql.matches('?').count(),
    }
}

#[test]
fn test_operator_table() {
    let cases: Vec<(&str, Value, &str, Vec<Value>)> = vec![
        ("id", Value::Int(1), "id = $1", vec![Value::Int(1)]),
        ("id", Value::Null, "id IS NULL", vec![]),
        ("id.not", Value::Int(1), "id <> $1", vec![Value::Int(1)]),
        ("id.gt", Value::Int(1), "id > $1", vec![Value::Int(1)]),
        ("id.gte", Value::Int(1), "id >= $1", vec![Value::Int(1)]),
        ("id.lt", Value::Int(1), "id < $1", vec![Value::Int(1)]),
        ("id.lte", Value::Int(1), "id <= $1", vec![Value::Int(1)]),
        ("name.like", Value::from("%a%"), "name LIKE $1", vec![Value::from("%a%")]),
        (
            "id.in",
            Value::from("1,2,3"),
            "id IN ($1, $2, $3)",
            vec![Value::from("1"), Value::from("2"), Value::from("3")],
        ),
        (
            "id.notin",
            Value::from("1,2,3"),
            "id NOT IN ($1, $2, $3)",
            vec![Value::from("1"), Value::from("2"), Value::from("3")],
        ),
        ("id.null", Value::Bool(true), "id.null IS NULL", vec![]),
        ("id.null", Value::Bool(false), "id.null IS NOT NULL", vec![]),
    ];

    for (key, value, expected_where, expected_args) in cases {
        let (built, skipped) = where_of(Flavor::Postgres, &filters([(key, value)]));
        assert!(skipped.is_empty(), "{key}");
        assert_eq!(built.sql, format!("SELECT * FROM t WHERE {expected_where}"), "{key}");
        assert_eq!(built.args, expected_args, "{key}");
    }
}

#[test]
fn test_null_operator_uses_raw_key() {
    let key = FilterKey::parse("deleted_at.null");
    let expr = compile_filter(&key, &Value::Bool(true));
    assert_eq!(expr, Ok(Expr::is_null("deleted_at.null")));
}

#[test]
fn test_malformed_shapes_are_skipped() {
    let cases = [
        ("id.in", Value::Int(1), SkipReason::ExpectedText {
            op: crate::filter::FilterOp::In,
            found: "BIGINT",
        }),
        ("id.notin", Value::Bool(true), SkipReason::ExpectedText {
            op: crate::filter::FilterOp::NotIn,
            found: "BOOLEAN",
        }),
        ("id.null", Value::from("yes"), SkipReason::ExpectedBool { found: "TEXT" }),
        ("id.between", Value::Int(1), SkipReason::UnknownOperator("between".into())),
    ];

    for (key, value, reason) in cases {
        let (built, skipped) = where_of(Flavor::MySql, &filters([(key, value)]));
        assert_eq!(built.sql, "SELECT * FROM t", "{key}");
        assert!(built.args.is_empty(), "{key}");
        assert_eq!(
            skipped,
            vec![SkippedFilter {
                key: key.to_string(),
                reason
            }]
        );
    }
}

#[test]
fn test_skipped_entry_does_not_disturb_others() {
    let f = filters([
        ("a", Value::Int(1)),
        ("b.in", Value::Int(2)),
        ("c.gt", Value::Int(3)),
    ]);
    let (built, skipped) = where_of(Flavor::Postgres, &f);
    assert_eq!(built.sql, "SELECT * FROM t WHERE a = $1 AND c > $2");
    assert_eq!(built.args, vec![Value::Int(1), Value::Int(3)]);
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].to_string(), "b.in: operator `in` expects TEXT, got BIGINT");
}

#[test]
fn test_conditions_follow_key_order() {
    let f = filters([
        ("status", Value::from("active")),
        ("age.gte", Value::Int(18)),
    ]);
    let (built, _) = where_of(Flavor::Postgres, &f);
    assert_eq!(built.sql, "SELECT * FROM t WHERE age >= $1 AND status = $2");
    assert_eq!(built.args, vec![Value::Int(18), Value::from("active")]);
}

#[test]
fn test_placeholders_match_args_every_flavor() {
    let f = filters([
        ("a", Value::Int(1)),
        ("b", Value::Null),
        ("c.in", Value::from("x,y")),
        ("d.notin", Value::from("z")),
        ("e.not", Value::from("q")),
        ("f.like", Value::from("p%")),
        ("g.null", Value::Bool(false)),
        ("h.lte", Value::Float(1.5)),
    ]);

    for flavor in Flavor::ALL {
        let (built, skipped) = where_of(flavor, &f);
        assert!(skipped.is_empty());
        assert_eq!(placeholder_count(&built.sql, flavor), built.args.len(), "{flavor}");
        assert_eq!(built.args.len(), 7, "{flavor}");
    }
}

#[test]
fn test_in_keeps_token_order_and_empty_tokens() {
    let (built, _) = where_of(Flavor::Sqlite, &filters([("tag.in", Value::from("b,,a"))]));
    assert_eq!(built.sql, "SELECT * FROM t WHERE tag IN (?, ?, ?)");
    assert_eq!(
        built.args,
        vec![Value::from("b"), Value::from(""), Value::from("a")]
    );
}

#[test]
fn test_compiling_twice_is_identical() {
    let f = filters([("id.in", Value::from("1,2")), ("name", Value::from("n"))]);
    assert_eq!(where_of(Flavor::Postgres, &f), where_of(Flavor::Postgres, &f));
}
