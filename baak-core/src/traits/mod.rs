pub mod knowledge;
pub mod lookup;

pub use knowledge::KnowledgeService;
pub use lookup::ScheduleLookup;
