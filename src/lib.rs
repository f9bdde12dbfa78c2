pub mod config;
pub mod db;
pub mod error;

pub use db::models::User;
pub use db::provider::{ConnectionHandle, ConnectionProvider, DirectConnector, PooledConnector};
pub use db::store::UserStore;
pub use error::StoreError;
