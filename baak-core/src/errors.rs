use thiserror::Error;

/// Shared error type for the engine.
///
/// Classification and dialogue resolution never fail: unmatched input
/// degrades to a fallback intent or a clarification, both of which are
/// data. The only faults that cross the engine boundary come from the
/// external collaborators (lookup, knowledge) and from config parsing.
#[derive(Debug, Error)]
pub enum BaakError {
    /// The schedule lookup collaborator failed.
    #[error("lookup failed: {reason}")]
    Lookup { reason: String },

    /// The retrieval/generation collaborator failed.
    #[error("knowledge service failed: {reason}")]
    Knowledge { reason: String },

    /// A configuration value is out of range or inconsistent.
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML config parsing failed.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl BaakError {
    /// Creates a lookup error.
    pub fn lookup(reason: impl Into<String>) -> Self {
        Self::Lookup {
            reason: reason.into(),
        }
    }

    /// Creates a knowledge-service error.
    pub fn knowledge(reason: impl Into<String>) -> Self {
        Self::Knowledge {
            reason: reason.into(),
        }
    }
}

/// A type alias for `Result<T, BaakError>`.
pub type BaakResult<T> = std::result::Result<T, BaakError>;
