use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored user record. Immutable after construction; the `id` is the
/// unique lookup key, the password is stored and compared verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: String,
    pub name: String,
    pub password: String,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            password: password.into(),
        }
    }
}
