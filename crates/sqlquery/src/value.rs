//! Dynamic SQL values.
//!
//! [`Value`] is the "untyped" argument carried by filters, assignments and
//! compiled statements. Filter compilation inspects the variant to decide
//! whether a value has the shape an operator requires (e.g. `in` needs text).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A dynamically-typed SQL value.
///
/// Serialization is untagged, so it is lossy on the way back in: a
/// serialized `Uuid`, `Date` or `Timestamp` reloads as [`Value::Text`] and
/// `Bytes` reloads as a [`Value::Json`] array. Options that must survive a
/// JSON round trip should carry those as text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// NULL value
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed integer
    Int(i64),

    /// Floating point
    Float(f64),

    /// Text string
    Text(String),

    /// Binary data
    Bytes(Vec<u8>),

    /// UUID
    Uuid(uuid::Uuid),

    /// Calendar date
    Date(NaiveDate),

    /// Timestamp with timezone (UTC)
    Timestamp(DateTime<Utc>),

    /// JSON document
    Json(serde_json::Value),
}

impl Value {
    /// Check if this value is NULL.
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the type name of this value.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "NULL",
            Value::Bool(_) => "BOOLEAN",
            Value::Int(_) => "BIGINT",
            Value::Float(_) => "DOUBLE",
            Value::Text(_) => "TEXT",
            Value::Bytes(_) => "BLOB",
            Value::Uuid(_) => "UUID",
            Value::Date(_) => "DATE",
            Value::Timestamp(_) => "TIMESTAMPTZ",
            Value::Json(_) => "JSON",
        }
    }

    /// Borrow the string if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the boolean if this is a boolean value.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the integer if this is an integer value.
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Convert a JSON value.
    ///
    /// Numbers that fit `i64` become [`Value::Int`] and fractional numbers
    /// [`Value::Float`]. Strings become [`Value::Text`]. Integers above
    /// `i64::MAX` stay exact as a [`Value::Json`] number, as do arrays and
    /// objects.
    pub fn from_json(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => Value::Int(i),
                (None, Some(f)) if n.is_f64() => Value::Float(f),
                _ => Value::Json(serde_json::Value::Number(n)),
            },
            serde_json::Value::String(s) => Value::Text(s),
            other @ (serde_json::Value::Array(_) | serde_json::Value::Object(_)) => {
                Value::Json(other)
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(Value::from_json)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Text(v.clone())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<uuid::Uuid> for Value {
    fn from(v: uuid::Uuid) -> Self {
        Value::Uuid(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Timestamp(v)
    }
}

/// Same mapping as [`Value::from_json`]: JSON `null` is SQL NULL and JSON
/// strings are text, so they behave like any other filter value.
impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::from_json(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

#[cfg(feature = "postgres")]
mod pg {
    use super::Value;
    use bytes::BytesMut;
    use std::error::Error;
    use tokio_postgres::types::{IsNull, ToSql, Type, to_sql_checked};

    impl ToSql for Value {
        fn to_sql(
            &self,
            ty: &Type,
            out: &mut BytesMut,
        ) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
            match self {
                Value::Null => Ok(IsNull::Yes),
                Value::Bool(v) => v.to_sql(ty, out),
                Value::Int(v) => {
                    // Narrow to the column width Postgres asked for.
                    if *ty == Type::INT2 {
                        i16::try_from(*v)?.to_sql(ty, out)
                    } else if *ty == Type::INT4 {
                        i32::try_from(*v)?.to_sql(ty, out)
                    } else {
                        v.to_sql(ty, out)
                    }
                }
                Value::Float(v) => {
                    if *ty == Type::FLOAT4 {
                        (*v as f32).to_sql(ty, out)
                    } else {
                        v.to_sql(ty, out)
                    }
                }
                Value::Text(v) => v.to_sql(ty, out),
                Value::Bytes(v) => v.to_sql(ty, out),
                Value::Uuid(v) => v.to_sql(ty, out),
                Value::Date(v) => v.to_sql(ty, out),
                Value::Timestamp(v) => v.to_sql(ty, out),
                Value::Json(v) => v.to_sql(ty, out),
            }
        }

        fn accepts(_ty: &Type) -> bool {
            true
        }

        to_sql_checked!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_scalars() {
        assert_eq!(Value::from(7i32), Value::Int(7));
        assert_eq!(Value::from(7u16), Value::Int(7));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from("a"), Value::Text("a".to_string()));
        assert_eq!(Value::from(1.5f64), Value::Float(1.5));
    }

    #[test]
    fn from_option() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::Text("x".to_string()));
    }

    #[test]
    fn deserialize_from_json() {
        let v: Vec<Value> =
            serde_json::from_str(r#"[null, true, 18, 2.5, "active", [1, 2], {"a": 1}]"#).unwrap();
        assert_eq!(v[0], Value::Null);
        assert_eq!(v[1], Value::Bool(true));
        assert_eq!(v[2], Value::Int(18));
        assert_eq!(v[3], Value::Float(2.5));
        assert_eq!(v[4], Value::Text("active".to_string()));
        assert_eq!(v[5], Value::Json(serde_json::json!([1, 2])));
        assert_eq!(v[6], Value::Json(serde_json::json!({"a": 1})));
    }

    #[test]
    fn large_unsigned_stays_exact() {
        let v: Value = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(v, Value::Json(serde_json::json!(18446744073709551615u64)));

        let v: Value = serde_json::from_str("9223372036854775807").unwrap();
        assert_eq!(v, Value::Int(i64::MAX));
    }

    #[test]
    fn from_json_value_matches_from_json() {
        use serde_json::json;

        assert_eq!(Value::from(json!(null)), Value::Null);
        assert_eq!(Value::from(json!(true)), Value::Bool(true));
        assert_eq!(Value::from(json!(3)), Value::Int(3));
        assert_eq!(Value::from(json!("1,2")), Value::Text("1,2".to_string()));
        assert_eq!(Value::from(json!([1])), Value::Json(json!([1])));
    }

    #[test]
    fn typed_values_reload_as_text() {
        let original = vec![
            Value::Uuid(uuid::Uuid::nil()),
            Value::Date(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()),
            Value::Bytes(vec![1, 2]),
        ];
        let json = serde_json::to_string(&original).unwrap();
        let reloaded: Vec<Value> = serde_json::from_str(&json).unwrap();

        assert_eq!(
            reloaded,
            vec![
                Value::Text("00000000-0000-0000-0000-000000000000".to_string()),
                Value::Text("2024-01-02".to_string()),
                Value::Json(serde_json::json!([1, 2])),
            ]
        );
    }

    #[test]
    fn serialize_untagged() {
        let json = serde_json::to_string(&vec![Value::Int(1), Value::Null, Value::from("x")]).unwrap();
        assert_eq!(json, r#"[1,null,"x"]"#);
    }

    #[test]
    fn type_names() {
        assert_eq!(Value::Null.type_name(), "NULL");
        assert_eq!(Value::from("x").type_name(), "TEXT");
        assert_eq!(Value::from(1).type_name(), "BIGINT");
    }

    #[cfg(feature = "postgres")]
    #[test]
    fn to_sql_narrows_int_to_column_type() {
        use bytes::BytesMut;
        use tokio_postgres::types::{IsNull, ToSql, Type};

        let mut buf = BytesMut::new();
        Value::Int(7).to_sql(&Type::INT4, &mut buf).unwrap();
        assert_eq!(buf.len(), 4);

        let mut buf = BytesMut::new();
        Value::Int(7).to_sql(&Type::INT8, &mut buf).unwrap();
        assert_eq!(buf.len(), 8);

        let mut buf = BytesMut::new();
        assert!(Value::Int(i64::MAX).to_sql(&Type::INT2, &mut buf).is_err());

        let mut buf = BytesMut::new();
        assert!(matches!(
            Value::Null.to_sql(&Type::TEXT, &mut buf).unwrap(),
            IsNull::Yes
        ));
    }
}
