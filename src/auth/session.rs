//! In-process session store: opaque token -> user id.
//!
//! Sessions are ephemeral and do not survive a restart. All access goes
//! through one `RwLock`, so operations on the same token are linearizable:
//! once `revoke` returns, no later `resolve` sees that token.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use uuid::Uuid;

use crate::utils::token::new_session_token;

/// Cookie carrying the session token.
pub const SESSION_COOKIE: &str = "session_id";

struct SessionRecord {
    user_id: Uuid,
    expires_at: Instant,
}

pub struct SessionStore {
    sessions: RwLock<HashMap<String, SessionRecord>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Issue a fresh token for a user who just authenticated. Expired
    /// entries are swept here rather than on a timer.
    pub fn issue(&self, user_id: Uuid) -> String {
        let token = new_session_token();
        let now = Instant::now();
        let mut sessions = self.sessions.write();
        sessions.retain(|_, record| record.expires_at > now);
        sessions.insert(
            token.clone(),
            SessionRecord {
                user_id,
                expires_at: now + self.ttl,
            },
        );
        token
    }

    /// Resolve a token to its user id. Unknown and expired tokens are
    /// indistinguishable to the caller.
    pub fn resolve(&self, token: &str) -> Option<Uuid> {
        let sessions = self.sessions.read();
        let record = sessions.get(token)?;
        if record.expires_at <= Instant::now() {
            return None;
        }
        Some(record.user_id)
    }

    /// Logout. Returns whether the token was live.
    pub fn revoke(&self, token: &str) -> bool {
        self.sessions.write().remove(token).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_resolves_to_its_user() {
        let store = SessionStore::new(Duration::from_secs(60));
        let user_id = Uuid::new_v4();
        let token = store.issue(user_id);
        assert_eq!(store.resolve(&token), Some(user_id));
    }

    #[test]
    fn unknown_token_resolves_to_none() {
        let store = SessionStore::new(Duration::from_secs(60));
        assert_eq!(store.resolve("sess_bogus"), None);
    }

    #[test]
    fn revoked_token_never_resolves_again() {
        let store = SessionStore::new(Duration::from_secs(60));
        let token = store.issue(Uuid::new_v4());
        assert!(store.revoke(&token));
        assert_eq!(store.resolve(&token), None);
        assert!(!store.revoke(&token));
    }

    #[test]
    fn expired_token_resolves_to_none() {
        let store = SessionStore::new(Duration::ZERO);
        let token = store.issue(Uuid::new_v4());
        assert_eq!(store.resolve(&token), None);
    }

    #[test]
    fn expired_entries_are_swept_on_issue() {
        let store = SessionStore::new(Duration::ZERO);
        store.issue(Uuid::new_v4());
        store.issue(Uuid::new_v4());
        // Each issue sweeps the previous, already-expired entry.
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn sessions_for_one_user_are_independent() {
        let store = SessionStore::new(Duration::from_secs(60));
        let user_id = Uuid::new_v4();
        let first = store.issue(user_id);
        let second = store.issue(user_id);
        assert_ne!(first, second);
        store.revoke(&first);
        assert_eq!(store.resolve(&second), Some(user_id));
    }
}
