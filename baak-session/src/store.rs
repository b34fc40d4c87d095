//! SessionStore — concurrent per-session access via DashMap.
//!
//! Every mutating method works through a single `get_mut` guard so a
//! read-modify-write on one session is atomic. Expiry is lazy: an idle
//! session is evicted on its next lookup; `sweep_expired` exists as an
//! optional maintenance call, not a correctness requirement.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use baak_core::config::SessionConfig;
use baak_core::intent::IntentKind;
use baak_core::models::Pending;

use crate::context::{Exchange, SessionContext};

/// Point-in-time store statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreStats {
    /// Sessions whose idle time is still within the timeout.
    pub active_sessions: usize,
    /// When the snapshot was taken.
    pub timestamp: DateTime<Utc>,
}

/// Thread-safe session store.
pub struct SessionStore {
    sessions: DashMap<String, SessionContext>,
    config: SessionConfig,
}

impl SessionStore {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            sessions: DashMap::new(),
            config,
        }
    }

    fn timeout(&self) -> Duration {
        Duration::minutes(self.config.timeout_minutes as i64)
    }

    /// Evict the session if it has expired. Returns true when evicted.
    fn evict_if_expired(&self, session_id: &str) -> bool {
        let expired = self
            .sessions
            .get(session_id)
            .map(|s| s.is_expired(self.timeout()))
            .unwrap_or(false);
        if expired {
            self.sessions.remove(session_id);
            debug!(session_id, "expired session evicted");
        }
        expired
    }

    /// Create a fresh session and return its id.
    pub fn create(&self) -> String {
        let session_id = Uuid::new_v4().to_string();
        self.sessions
            .insert(session_id.clone(), SessionContext::new(session_id.clone()));
        debug!(session_id, "session created");
        session_id
    }

    /// Get a session by id (cloned snapshot). An expired session is
    /// evicted and reported as absent.
    pub fn get(&self, session_id: &str) -> Option<SessionContext> {
        if self.evict_if_expired(session_id) {
            return None;
        }
        self.sessions.get(session_id).map(|r| r.clone())
    }

    /// Refresh a session's activity timestamp. Returns false if the
    /// session is absent or expired.
    pub fn touch(&self, session_id: &str) -> bool {
        if self.evict_if_expired(session_id) {
            return false;
        }
        if let Some(mut entry) = self.sessions.get_mut(session_id) {
            entry.touch();
            true
        } else {
            false
        }
    }

    /// Set the session's open clarification question, replacing any
    /// previous one.
    pub fn set_pending(&self, session_id: &str, pending: Pending) -> bool {
        if self.evict_if_expired(session_id) {
            return false;
        }
        if let Some(mut entry) = self.sessions.get_mut(session_id) {
            debug!(session_id, state = pending.label(), "pending set");
            entry.pending = Some(pending);
            entry.touch();
            true
        } else {
            false
        }
    }

    /// The session's open clarification question, if any.
    pub fn pending(&self, session_id: &str) -> Option<Pending> {
        if self.evict_if_expired(session_id) {
            return None;
        }
        self.sessions
            .get(session_id)
            .and_then(|s| s.pending.clone())
    }

    /// Clear the open clarification question. Returns false if the
    /// session is absent or expired.
    pub fn clear_pending(&self, session_id: &str) -> bool {
        if self.evict_if_expired(session_id) {
            return false;
        }
        if let Some(mut entry) = self.sessions.get_mut(session_id) {
            entry.pending = None;
            entry.touch();
            true
        } else {
            false
        }
    }

    /// Record one resolved turn, bounded FIFO.
    pub fn add_exchange(
        &self,
        session_id: &str,
        user_message: &str,
        bot_response: &str,
        intent: IntentKind,
    ) -> bool {
        if self.evict_if_expired(session_id) {
            return false;
        }
        if let Some(mut entry) = self.sessions.get_mut(session_id) {
            let exchange = Exchange {
                user_message: user_message.to_string(),
                bot_response: bot_response.to_string(),
                intent,
                timestamp: chrono::Utc::now(),
            };
            let max = self.config.max_exchanges;
            entry.push_exchange(exchange, max);
            true
        } else {
            false
        }
    }

    /// Remove a session outright.
    pub fn remove(&self, session_id: &str) -> Option<SessionContext> {
        self.sessions.remove(session_id).map(|(_, v)| v)
    }

    /// Evict every expired session. Returns the number evicted.
    pub fn sweep_expired(&self) -> usize {
        let timeout = self.timeout();
        let before = self.sessions.len();
        self.sessions.retain(|_, s| !s.is_expired(timeout));
        before - self.sessions.len()
    }

    /// Number of stored sessions, expired ones included until swept.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Timestamped snapshot of the active-session count. Unlike
    /// `session_count`, expired-but-unswept sessions are not counted.
    pub fn stats(&self) -> StoreStats {
        let timeout = self.timeout();
        let active_sessions = self
            .sessions
            .iter()
            .filter(|s| !s.is_expired(timeout))
            .count();
        StoreStats {
            active_sessions,
            timestamp: Utc::now(),
        }
    }
}
