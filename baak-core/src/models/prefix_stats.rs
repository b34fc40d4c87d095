use serde::{Deserialize, Serialize};

/// Inclusive numeric range of class numbers known for a prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixRange {
    pub min: u8,
    pub max: u8,
}

/// What the lookup collaborator knows about a class prefix.
///
/// Echoed in `ClassRangeNeeded` prompts and attached as a suggestion when
/// a schedule lookup for a shape-valid but unknown class returns nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixStats {
    /// Whether any class with this prefix exists.
    pub exists: bool,
    /// Number of distinct classes under the prefix.
    pub count: usize,
    /// Known numeric range, when at least one class exists.
    pub range: Option<PrefixRange>,
}

impl PrefixStats {
    /// Stats for a prefix with no known classes.
    pub fn empty() -> Self {
        Self {
            exists: false,
            count: 0,
            range: None,
        }
    }
}
