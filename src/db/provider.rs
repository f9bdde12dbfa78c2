use std::str::FromStr;

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Connection, Sqlite, SqliteConnection, SqlitePool};

use crate::error::StoreError;

/// One live SQLite connection, owned by a single store operation.
///
/// A handle is released exactly once per acquisition: `release` closes a
/// direct connection gracefully, and dropping the handle covers early-return
/// paths (a pooled connection returns to its pool, a direct connection is
/// closed by its own `Drop`).
pub enum ConnectionHandle {
    Direct(SqliteConnection),
    Pooled(PoolConnection<Sqlite>),
}

impl ConnectionHandle {
    /// The underlying connection, for executing a statement against.
    pub fn executor(&mut self) -> &mut SqliteConnection {
        match self {
            ConnectionHandle::Direct(conn) => conn,
            ConnectionHandle::Pooled(conn) => &mut **conn,
        }
    }

    pub async fn release(self) -> Result<(), StoreError> {
        match self {
            ConnectionHandle::Direct(conn) => conn.close().await.map_err(StoreError::Connection),
            ConnectionHandle::Pooled(conn) => {
                drop(conn);
                Ok(())
            }
        }
    }
}

/// Strategy for producing a live backend connection. The store depends only
/// on this capability, never on a concrete variant.
#[async_trait]
pub trait ConnectionProvider: Send + Sync {
    async fn make_connection(&self) -> Result<ConnectionHandle, StoreError>;
}

/// Fixed-parameter variant: the database URL is parsed once at construction,
/// and every call opens a fresh connection.
#[derive(Debug, Clone)]
pub struct DirectConnector {
    options: SqliteConnectOptions,
}

impl DirectConnector {
    pub fn from_url(database_url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(StoreError::Connection)?
            .create_if_missing(true);
        Ok(Self { options })
    }
}

#[async_trait]
impl ConnectionProvider for DirectConnector {
    async fn make_connection(&self) -> Result<ConnectionHandle, StoreError> {
        let conn = SqliteConnection::connect_with(&self.options)
            .await
            .map_err(StoreError::Connection)?;
        Ok(ConnectionHandle::Direct(conn))
    }
}

/// Pool-backed variant: checks a connection out of an `sqlx` pool per call.
#[derive(Debug, Clone)]
pub struct PooledConnector {
    pool: SqlitePool,
}

impl PooledConnector {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(StoreError::Connection)?
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(StoreError::Connection)?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ConnectionProvider for PooledConnector {
    async fn make_connection(&self) -> Result<ConnectionHandle, StoreError> {
        let conn = self.pool.acquire().await.map_err(StoreError::Connection)?;
        Ok(ConnectionHandle::Pooled(conn))
    }
}
