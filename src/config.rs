use figment::{Figment, providers::Env};
use serde::Deserialize;

/// Runtime configuration, extracted from `USERSTORE_`-prefixed environment
/// variables. The binary loads `.env` via dotenvy before extraction.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_loglevel")]
    pub loglevel: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, figment::Error> {
        Figment::new().merge(Env::prefixed("USERSTORE_")).extract()
    }
}

fn default_database_url() -> String {
    "sqlite:userstore.sqlite".to_string()
}

fn default_loglevel() -> String {
    "info".to_string()
}

fn default_max_connections() -> u32 {
    5
}
