use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum StoreError {
    #[error("connection error: {0}")]
    Connection(#[source] SqlxError),

    #[error("persistence error: {0}")]
    Persistence(#[source] SqlxError),

    #[error("no user found for id {id}")]
    NotFound { id: String },

    #[error("lookup for id {id} matched {count} rows, expected exactly one")]
    AmbiguousResult { id: String, count: usize },

    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),
}

impl StoreError {
    /// Split statement failures into transport-class errors and everything
    /// else. Acquisition failures never reach this; providers map those to
    /// `Connection` themselves.
    pub(crate) fn from_statement(e: SqlxError) -> Self {
        match e {
            e @ (SqlxError::Io(_)
            | SqlxError::PoolTimedOut
            | SqlxError::PoolClosed
            | SqlxError::WorkerCrashed) => StoreError::Connection(e),
            e => StoreError::Persistence(e),
        }
    }
}
