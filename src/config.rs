use anyhow::{Context, Result};

/// Upper bound on open database connections; further requests wait for a free one.
pub const MAX_DB_CONNECTIONS: u32 = 10;

const DEFAULT_DATABASE_URL: &str = "sqlite://blog.db";
const DEFAULT_PORT: &str = "3000";
const DEFAULT_TEMPLATE_DIR: &str = "templates";
const DEFAULT_PUBLIC_DIR: &str = "public";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub template_dir: String,
    pub public_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());
        let port = get("SERVER_APP_PORT", DEFAULT_PORT);
        Ok(Config {
            database_url: get("DATABASE_URL", DEFAULT_DATABASE_URL),
            port: port
                .parse()
                .with_context(|| format!("SERVER_APP_PORT is not a valid port: {}", port))?,
            template_dir: get("TEMPLATE_DIR", DEFAULT_TEMPLATE_DIR),
            public_dir: get("PUBLIC_DIR", DEFAULT_PUBLIC_DIR),
        })
    }
}
