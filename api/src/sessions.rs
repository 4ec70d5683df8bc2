use chrono::{DateTime, TimeDelta, Utc};
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, Copy)]
struct Session {
    user_id: i64,
    expires_at: DateTime<Utc>,
}

/// Server-side session table: opaque token -> user id.
///
/// Each user holds at most one session; logging in again replaces the old
/// token. Sessions expire after `ttl`, expired entries are dropped when they
/// are presented and swept on every login. A restart drops all of them.
#[derive(Clone)]
pub struct SessionManager {
    sessions: Arc<DashMap<String, Session>>,
    by_user: Arc<DashMap<i64, String>>,
    ttl: TimeDelta,
}

impl SessionManager {
    pub fn new(ttl: TimeDelta) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            by_user: Arc::new(DashMap::new()),
            ttl,
        }
    }

    pub fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    /// Start a session for `user_id` and return its token.
    pub fn create(&self, user_id: i64) -> String {
        let now = Utc::now();
        self.purge_expired(now);

        let token = Uuid::new_v4().simple().to_string();
        self.sessions.insert(
            token.clone(),
            Session {
                user_id,
                expires_at: now + self.ttl,
            },
        );

        if let Some(previous) = self.by_user.insert(user_id, token.clone()) {
            self.sessions.remove(&previous);
        }

        token
    }

    /// User id behind a live token. Expired tokens are removed.
    pub fn resolve(&self, token: &str) -> Option<i64> {
        // Copy out so no shard guard is held across the removal below.
        let session = self.sessions.get(token).map(|entry| *entry.value())?;

        if session.expires_at <= Utc::now() {
            self.destroy(token);
            return None;
        }

        Some(session.user_id)
    }

    /// Returns `false` if the token was unknown.
    pub fn destroy(&self, token: &str) -> bool {
        match self.sessions.remove(token) {
            Some((_, session)) => {
                self.by_user
                    .remove_if(&session.user_id, |_, current| current == token);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn purge_expired(&self, now: DateTime<Utc>) {
        self.sessions.retain(|_, session| session.expires_at > now);
        self.by_user
            .retain(|_, token| self.sessions.contains_key(token.as_str()));
    }
}
