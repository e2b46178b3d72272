use std::time::Duration;

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub connect_timeout: Duration,
    pub sqlx_logging: bool,
    pub catalog_page_size: i64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://filmstore.db?mode=rwc".to_string());

        let max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .context("DB_MAX_CONNECTIONS")?;

        let connect_timeout_secs: u64 =
            std::env::var("DB_CONNECT_TIMEOUT_SECS").ok().and_then(|s| s.parse().ok()).unwrap_or(8);

        let sqlx_logging: bool =
            std::env::var("DB_SQLX_LOGGING").ok().and_then(|s| s.parse().ok()).unwrap_or(false);

        let catalog_page_size: i64 =
            std::env::var("CATALOG_PAGE_SIZE").ok().and_then(|s| s.parse().ok()).unwrap_or(20);

        Ok(Self {
            database_url,
            max_connections,
            connect_timeout: Duration::from_secs(connect_timeout_secs),
            sqlx_logging,
            catalog_page_size,
        })
    }

    /// A private in-memory database. Pinned to one connection, since every
    /// SQLite memory connection opens its own empty database.
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
            connect_timeout: Duration::from_secs(8),
            sqlx_logging: false,
            catalog_page_size: 20,
        }
    }
}
