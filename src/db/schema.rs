//! SQL DDL for initializing the user storage.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `id` TEXT PRIMARY KEY (the unique lookup key)
/// - `name` and `password` stored as plain text, verbatim
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    password TEXT NOT NULL
);
"#;
