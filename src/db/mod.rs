//! Database module: models, schema, and the user store.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `provider.rs`: connection-provisioning strategies
//! - `store.rs`: the data-access component built on top of a provider

pub mod models;
pub mod provider;
pub mod schema;
pub mod store;

pub use models::User;
pub use provider::{ConnectionHandle, ConnectionProvider, DirectConnector, PooledConnector};
pub use schema::SQLITE_INIT;
pub use store::UserStore;
