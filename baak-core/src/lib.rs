//! # baak-core
//!
//! Foundation crate for the BAAK intent and dialogue engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod intent;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::BaakConfig;
pub use errors::{BaakError, BaakResult};
pub use intent::{CalendarGroup, CalendarTerm, FallbackReason, Intent, IntentKind, MissingParam};
pub use models::{ClarificationAsk, ClassCode, ClassPrefix, Pending, PrefixStats};
