//! Engine configuration, loadable from TOML with full defaults.

use serde::{Deserialize, Serialize};

use crate::errors::BaakResult;

mod defaults {
    pub const SESSION_TIMEOUT_MINUTES: u64 = 30;
    pub const MAX_EXCHANGES: usize = 3;

    pub const KNOWLEDGE_TOP_K: usize = 5;
    pub const KNOWLEDGE_MIN_SCORE: f64 = 0.45;
    pub const CATALOG_TOP_K: usize = 30;
    pub const CATALOG_MIN_SCORE: f64 = 0.30;
    pub const INFO_TOP_K: usize = 20;
    pub const INFO_MIN_SCORE: f64 = 0.30;
}

/// Session store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Idle minutes after which a session is treated as absent.
    pub timeout_minutes: u64,
    /// Maximum exchanges kept per session; oldest dropped first.
    pub max_exchanges: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timeout_minutes: defaults::SESSION_TIMEOUT_MINUTES,
            max_exchanges: defaults::MAX_EXCHANGES,
        }
    }
}

/// Retrieval/generation knobs passed to the knowledge collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeConfig {
    /// General fallback retrieval.
    pub top_k: usize,
    pub min_score: f64,
    /// Course-catalog retrieval (wide, extractive).
    pub catalog_top_k: usize,
    pub catalog_min_score: f64,
    /// Definitional / reading-guide retrieval.
    pub info_top_k: usize,
    pub info_min_score: f64,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::KNOWLEDGE_TOP_K,
            min_score: defaults::KNOWLEDGE_MIN_SCORE,
            catalog_top_k: defaults::CATALOG_TOP_K,
            catalog_min_score: defaults::CATALOG_MIN_SCORE,
            info_top_k: defaults::INFO_TOP_K,
            info_min_score: defaults::INFO_MIN_SCORE,
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BaakConfig {
    pub session: SessionConfig,
    pub knowledge: KnowledgeConfig,
}

impl BaakConfig {
    /// Parse a TOML document; missing sections and fields use defaults.
    pub fn from_toml(input: &str) -> BaakResult<Self> {
        Ok(toml::from_str(input)?)
    }
}
