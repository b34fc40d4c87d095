//! SessionContext — pending question and exchange history per conversation.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use baak_core::intent::IntentKind;
use baak_core::models::Pending;

/// One recorded turn: what the user said and what the engine resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    pub user_message: String,
    /// Terse summary of the response plan, not the rendered answer.
    pub bot_response: String,
    /// Final resolved intent of the turn.
    pub intent: IntentKind,
    pub timestamp: DateTime<Utc>,
}

/// Per-session state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Unique session identifier.
    pub session_id: String,
    /// When this session was created.
    pub created_at: DateTime<Utc>,
    /// Last activity timestamp; drives lazy expiry.
    pub last_activity: DateTime<Utc>,
    /// The open clarification question, at most one.
    pub pending: Option<Pending>,
    /// Recent exchanges, oldest first, bounded by the store.
    pub exchanges: VecDeque<Exchange>,
}

impl SessionContext {
    /// Create a new session context.
    pub fn new(session_id: String) -> Self {
        let now = Utc::now();
        Self {
            session_id,
            created_at: now,
            last_activity: now,
            pending: None,
            exchanges: VecDeque::new(),
        }
    }

    /// Whether the session has been idle longer than `timeout`.
    pub fn is_expired(&self, timeout: chrono::Duration) -> bool {
        Utc::now() - self.last_activity > timeout
    }

    /// Refresh the activity timestamp.
    pub fn touch(&mut self) {
        self.last_activity = Utc::now();
    }

    /// Append an exchange, dropping the oldest beyond `max_exchanges`.
    pub fn push_exchange(&mut self, exchange: Exchange, max_exchanges: usize) {
        self.exchanges.push_back(exchange);
        while self.exchanges.len() > max_exchanges {
            self.exchanges.pop_front();
        }
        self.last_activity = Utc::now();
    }
}
