use crate::db::models::SqlValue;
use crate::error::BuzzError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{FromRow, Pool, Sqlite};
use std::str::FromStr;
use tracing::{info, warn};

pub type SqlitePool = Pool<Sqlite>;

/// Owner of the single database connection. Opened once at startup by the
/// composition root, cloned into each repository, never closed. The pool is
/// capped at one connection, so statement execution is serialized in
/// submission order.
#[derive(Clone)]
pub struct Gateway {
    pool: SqlitePool,
}

impl Gateway {
    pub async fn open(database_url: &str) -> Result<Self, BuzzError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Execute a generated statement with positional binds. Both outcomes are
    /// logged under the statement's action label; a failure propagates to the
    /// caller carrying the driver error.
    pub async fn execute(&self, statement: &str, values: Vec<SqlValue>) -> Result<(), BuzzError> {
        let action = action_label(statement);
        let mut query = sqlx::query(statement);
        for value in values {
            query = match value {
                SqlValue::Null => query.bind(None::<String>),
                SqlValue::Integer(i) => query.bind(i),
                SqlValue::Real(f) => query.bind(f),
                SqlValue::Text(s) => query.bind(s),
            };
        }
        match query.execute(&self.pool).await {
            Ok(_) => {
                info!(action, "statement successful");
                Ok(())
            }
            Err(e) => {
                warn!(action, error = %e, "statement failed");
                Err(e.into())
            }
        }
    }

    /// Run a SELECT and decode every row, in whatever order the driver
    /// returns them.
    pub async fn fetch_all<T>(&self, statement: &str) -> Result<Vec<T>, BuzzError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let action = action_label(statement);
        match sqlx::query_as::<_, T>(statement).fetch_all(&self.pool).await {
            Ok(rows) => {
                info!(action, rows = rows.len(), "statement successful");
                Ok(rows)
            }
            Err(e) => {
                warn!(action, error = %e, "statement failed");
                Err(e.into())
            }
        }
    }
}

/// Observability label for a statement: everything before the first `(`,
/// trimmed. Statements without parentheses label as their full text.
fn action_label(statement: &str) -> &str {
    statement.split('(').next().unwrap_or(statement).trim()
}
