//! # baak-dialogue
//!
//! Resolution of messages that arrive while a session has an open
//! clarification question. The machine itself is stateless; the pending
//! record lives in the session store and the caller applies the
//! transition the machine returns.

pub mod machine;

pub use machine::{DialogueMachine, Resolution};
