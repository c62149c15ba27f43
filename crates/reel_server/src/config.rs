//! Server configuration, read from the environment.
//!
//!   REEL_BIND_ADDR      — listen address (default: 0.0.0.0:4100)
//!   REEL_JWT_SECRET     — JWT HMAC secret (required)
//!   REEL_STORE          — `postgres` (default) or `memory`
//!   DATABASE_URL        — Postgres connection string (required for postgres)
//!   DATABASE_POOL_SIZE  — max pool connections (default: 10)
//!   REEL_BLACKLIST_PATH — newline-separated word list replacing the built-in one

use std::{fmt::Display, path::PathBuf, str::FromStr};

use anyhow::{anyhow, bail, Context};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => bail!("unknown store backend {other:?} (expected postgres or memory)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub jwt_secret: String,
    pub store: StoreBackend,
    pub database_url: Option<String>,
    pub pool_size: u32,
    pub blacklist_path: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("REEL_JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| anyhow!("REEL_JWT_SECRET must be set"))?;
        let store: StoreBackend = try_load(&lookup, "REEL_STORE", "postgres")?;
        let database_url = lookup("DATABASE_URL");
        if store == StoreBackend::Postgres && database_url.is_none() {
            bail!("DATABASE_URL must be set when REEL_STORE=postgres");
        }

        Ok(Self {
            bind_addr: try_load(&lookup, "REEL_BIND_ADDR", "0.0.0.0:4100")?,
            jwt_secret,
            store,
            database_url,
            pool_size: try_load(&lookup, "DATABASE_POOL_SIZE", "10")?,
            blacklist_path: lookup("REEL_BLACKLIST_PATH").map(PathBuf::from),
        })
    }
}

fn try_load<T, F>(lookup: &F, key: &str, default: &str) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    raw.parse()
        .map_err(|e| anyhow!("{e}"))
        .with_context(|| format!("invalid {key} value {raw:?}"))
}
