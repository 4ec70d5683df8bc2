//! Runtime configuration read from the environment (and `.env`, if present).

use std::env;
use std::str::FromStr;
use tracing::warn;

const DEFAULT_DATABASE_URL: &str = "sqlite://blog.db";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8888";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_SESSION_TTL_SECONDS: i64 = 24 * 60 * 60;
const MAX_SESSION_TTL_SECONDS: i64 = 365 * 24 * 60 * 60;
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: String,
    pub bcrypt_cost: u32,
    pub cookie_secure: bool,
    pub session_ttl_seconds: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            bcrypt_cost: bcrypt::DEFAULT_COST,
            cookie_secure: false,
            session_ttl_seconds: DEFAULT_SESSION_TTL_SECONDS,
        }
    }
}

impl Config {
    /// Read the process environment; `main` loads `.env` into it beforehand.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            max_connections: parse_or("DB_MAX_CONNECTIONS", &lookup, defaults.max_connections),
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            bcrypt_cost: parse_or("BCRYPT_COST", &lookup, defaults.bcrypt_cost)
                .clamp(MIN_BCRYPT_COST, MAX_BCRYPT_COST),
            cookie_secure: lookup("SESSION_COOKIE_SECURE")
                .map(|v| matches!(v.trim().to_lowercase().as_str(), "true" | "1"))
                .unwrap_or(defaults.cookie_secure),
            session_ttl_seconds: parse_or(
                "SESSION_TTL_SECONDS",
                &lookup,
                defaults.session_ttl_seconds,
            )
            .clamp(1, MAX_SESSION_TTL_SECONDS),
        }
    }
}

fn parse_or<T: FromStr + Copy>(
    key: &str,
    lookup: &impl Fn(&str) -> Option<String>,
    default: T,
) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {}={:?}", key, raw);
            default
        }),
        None => default,
    }
}
