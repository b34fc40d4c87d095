use crate::errors::BaakResult;
use crate::models::Snippet;

/// Vector retrieval plus answer generation.
///
/// The engine only decides when to call this and which query and
/// document-key preference to pass; ranking and generation live behind
/// the trait.
pub trait KnowledgeService: Send + Sync {
    /// Ranked snippets for a free-text query. `prefer_doc_keys` orders
    /// results so documents with those keys come first, in the order
    /// given; an empty slice means no preference.
    fn search(
        &self,
        query: &str,
        top_k: usize,
        min_score: f64,
        prefer_doc_keys: &[&str],
    ) -> BaakResult<Vec<Snippet>>;

    /// Generate an answer grounded on the snippets. `strict` forbids the
    /// generator from going beyond the snippet contents.
    fn generate(&self, query: &str, snippets: &[Snippet], strict: bool) -> BaakResult<String>;
}
