use serde::{Deserialize, Serialize};

/// A ranked knowledge-base snippet returned by the retrieval collaborator.
///
/// The engine never interprets snippet contents; it counts them for the
/// `has_data` flag and forwards them in the response plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snippet {
    pub content: String,
    pub title: Option<String>,
    pub source: Option<String>,
    /// Ingestion key of the source document, used for preference ordering.
    pub doc_key: Option<String>,
    /// Similarity score in [0, 1].
    pub score: f64,
}
