//! # baak-session
//!
//! Per-session conversational state: the open clarification question and
//! a bounded history of recent exchanges. Expiry is lazy; an idle session
//! is treated as absent on its next lookup.

pub mod context;
pub mod store;

pub use context::{Exchange, SessionContext};
pub use store::{SessionStore, StoreStats};
