//! # baak-engine
//!
//! One resolved chat turn: session handling, pending resolution or fresh
//! classification, dispatch to the lookup or knowledge collaborator, and
//! exchange recording. Produces structured [`baak_core::models::ResponsePlan`]s;
//! rendering to user-facing text is external.

pub mod engine;

pub use engine::ChatEngine;
