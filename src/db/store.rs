use std::sync::Arc;

use tracing::debug;

use crate::db::models::User;
use crate::db::provider::ConnectionProvider;
use crate::db::schema::SQLITE_INIT;
use crate::error::StoreError;

/// Data-access component for the `users` table.
///
/// Each operation asks the injected provider for a connection, issues one
/// parameterized statement, and releases the connection before returning.
/// When both the statement and the release fail, the statement error wins.
#[derive(Clone)]
pub struct UserStore {
    provider: Arc<dyn ConnectionProvider>,
}

impl UserStore {
    pub fn new(provider: Arc<dyn ConnectionProvider>) -> Self {
        Self { provider }
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), StoreError> {
        let mut conn = self.provider.make_connection().await?;
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        let mut result: Result<(), sqlx::Error> = Ok(());
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            if let Err(e) = sqlx::query(s).execute(conn.executor()).await {
                result = Err(e);
                break;
            }
        }
        let released = conn.release().await;
        result.map_err(StoreError::from_statement)?;
        released?;
        debug!("schema initialized");
        Ok(())
    }

    /// Insert a record. A conflicting `id` fails with a persistence error and
    /// never alters the row already stored.
    pub async fn add(&self, user: &User) -> Result<(), StoreError> {
        let mut conn = self.provider.make_connection().await?;
        let result = sqlx::query("INSERT INTO users (id, name, password) VALUES (?, ?, ?)")
            .bind(&user.id)
            .bind(&user.name)
            .bind(&user.password)
            .execute(conn.executor())
            .await;
        let released = conn.release().await;
        result.map_err(StoreError::from_statement)?;
        released?;
        Ok(())
    }

    /// Look up a record by id. Zero matches is `NotFound`; more than one
    /// match (possible against a legacy table without the unique constraint)
    /// is `AmbiguousResult`.
    pub async fn get(&self, id: &str) -> Result<User, StoreError> {
        let mut conn = self.provider.make_connection().await?;
        let rows = sqlx::query_as::<_, User>("SELECT id, name, password FROM users WHERE id = ?")
            .bind(id)
            .fetch_all(conn.executor())
            .await;
        let released = conn.release().await;
        let mut rows = rows.map_err(StoreError::from_statement)?;
        released?;
        match rows.len() {
            0 => Err(StoreError::NotFound { id: id.to_string() }),
            1 => Ok(rows.remove(0)),
            n => Err(StoreError::AmbiguousResult {
                id: id.to_string(),
                count: n,
            }),
        }
    }

    pub async fn count(&self) -> Result<i64, StoreError> {
        let mut conn = self.provider.make_connection().await?;
        let result = sqlx::query_as::<_, (i64,)>("SELECT COUNT(*) FROM users")
            .fetch_one(conn.executor())
            .await;
        let released = conn.release().await;
        let (count,) = result.map_err(StoreError::from_statement)?;
        released?;
        Ok(count)
    }

    /// Remove every stored record. Meant for resetting state between
    /// independent test runs, not part of the primary data contract.
    pub async fn delete_all(&self) -> Result<(), StoreError> {
        let mut conn = self.provider.make_connection().await?;
        let result = sqlx::query("DELETE FROM users")
            .execute(conn.executor())
            .await;
        let released = conn.release().await;
        result.map_err(StoreError::from_statement)?;
        released?;
        Ok(())
    }
}
