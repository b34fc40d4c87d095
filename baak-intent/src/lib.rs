//! # baak-intent
//!
//! Pure text analysis: the class-code parser and the rule-cascade intent
//! classifier. No session access, no I/O; safe to call concurrently.

pub mod class_code;
pub mod classifier;
pub mod extract;
mod vocab;

pub use class_code::ClassCodeParser;
pub use classifier::IntentClassifier;
