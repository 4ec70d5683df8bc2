use crate::sessions::SessionManager;
use chrono::TimeDelta;
use sqlx::SqlitePool;
use std::sync::{Arc, OnceLock};

const DUMMY_PASSWORD: &str = "dummy-password-for-unknown-users";

/// Application context handed to every handler through `State`.
///
/// Everything inside is cheap to clone: the pool and the session table are
/// reference counted.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub sessions: SessionManager,
    pub bcrypt_cost: u32,
    pub cookie_secure: bool,
    dummy_password_hash: Arc<OnceLock<String>>,
}

impl AppState {
    pub fn new(
        pool: SqlitePool,
        bcrypt_cost: u32,
        cookie_secure: bool,
        session_ttl_seconds: i64,
    ) -> Self {
        Self {
            pool,
            sessions: SessionManager::new(TimeDelta::seconds(session_ttl_seconds)),
            bcrypt_cost,
            cookie_secure,
            dummy_password_hash: Arc::new(OnceLock::new()),
        }
    }

    /// A hash at the configured cost, verified against when the username is
    /// unknown so both login failures cost the same.
    pub fn dummy_password_hash(&self) -> &str {
        self.dummy_password_hash.get_or_init(|| {
            bcrypt::hash(DUMMY_PASSWORD, self.bcrypt_cost).unwrap_or_default()
        })
    }
}
