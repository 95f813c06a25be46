//! SQL flavors (dialects) supported by the compiler.
//!
//! A [`Flavor`] only decides how a statement is *rendered*: placeholder syntax
//! and the few clauses whose support differs between databases. It carries no
//! other state.

use crate::error::QueryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// SQL dialect used when rendering a statement.
///
/// # Example
/// ```
/// use sqlquery::Flavor;
///
/// assert_eq!(Flavor::Postgres.placeholder(2), "$2");
/// assert_eq!(Flavor::MySql.placeholder(2), "?");
/// let f: Flavor = "postgresql".parse()?;
/// assert_eq!(f, Flavor::Postgres);
/// # Ok::<(), sqlquery::QueryError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    /// MySQL and MariaDB (uses `?` placeholders)
    #[serde(alias = "mariadb")]
    MySql,
    /// PostgreSQL (uses `$1, $2, ...` placeholders)
    #[default]
    #[serde(alias = "postgresql", alias = "pg")]
    Postgres,
    /// SQLite (uses `?` placeholders)
    Sqlite,
}

impl Flavor {
    /// All supported flavors.
    pub const ALL: [Flavor; 3] = [Flavor::MySql, Flavor::Postgres, Flavor::Sqlite];

    /// Placeholder for the given parameter index (1-based).
    pub fn placeholder(self, index: usize) -> String {
        match self {
            Flavor::Postgres => format!("${index}"),
            Flavor::MySql | Flavor::Sqlite => "?".to_string(),
        }
    }

    /// Whether placeholders carry their own position (`$n`).
    pub const fn numbered_placeholders(self) -> bool {
        matches!(self, Flavor::Postgres)
    }

    /// Whether `SELECT ... FOR UPDATE` is accepted by this dialect.
    ///
    /// SQLite has no row-level locks and rejects the clause.
    pub const fn supports_for_update(self) -> bool {
        !matches!(self, Flavor::Sqlite)
    }

    /// Whether OFFSET may only appear after a LIMIT clause.
    pub const fn offset_requires_limit(self) -> bool {
        matches!(self, Flavor::MySql | Flavor::Sqlite)
    }

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Flavor::MySql => "mysql",
            Flavor::Postgres => "postgres",
            Flavor::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Flavor {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(Flavor::MySql),
            "postgres" | "postgresql" | "pg" => Ok(Flavor::Postgres),
            "sqlite" | "sqlite3" => Ok(Flavor::Sqlite),
            _ => Err(QueryError::UnknownFlavor(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_per_flavor() {
        assert_eq!(Flavor::Postgres.placeholder(1), "$1");
        assert_eq!(Flavor::Postgres.placeholder(12), "$12");
        assert_eq!(Flavor::MySql.placeholder(3), "?");
        assert_eq!(Flavor::Sqlite.placeholder(3), "?");
    }

    #[test]
    fn parse_flavor_names() {
        assert_eq!("mysql".parse::<Flavor>().unwrap(), Flavor::MySql);
        assert_eq!("PostgreSQL".parse::<Flavor>().unwrap(), Flavor::Postgres);
        assert_eq!(" sqlite ".parse::<Flavor>().unwrap(), Flavor::Sqlite);
    }

    #[test]
    fn parse_unknown_flavor() {
        let err = "oracle".parse::<Flavor>().unwrap_err();
        assert!(matches!(err, QueryError::UnknownFlavor(ref s) if s == "oracle"));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for flavor in Flavor::ALL {
            assert_eq!(flavor.to_string().parse::<Flavor>().unwrap(), flavor);
        }
    }

    #[test]
    fn serde_accepts_aliases() {
        let f: Flavor = serde_json::from_str(r#""postgresql""#).unwrap();
        assert_eq!(f, Flavor::Postgres);
        let f: Flavor = serde_json::from_str(r#""mysql""#).unwrap();
        assert_eq!(f, Flavor::MySql);
        assert_eq!(serde_json::to_string(&Flavor::Sqlite).unwrap(), r#""sqlite""#);
    }

    #[test]
    fn sqlite_has_no_row_locks() {
        assert!(!Flavor::Sqlite.supports_for_update());
        assert!(Flavor::MySql.supports_for_update());
        assert!(Flavor::Postgres.supports_for_update());
    }
}
