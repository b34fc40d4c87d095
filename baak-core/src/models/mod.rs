pub mod clarification;
pub mod class_code;
pub mod pending;
pub mod prefix_stats;
pub mod response_plan;
pub mod snippet;

pub use clarification::ClarificationAsk;
pub use class_code::{ClassCode, ClassPrefix};
pub use pending::Pending;
pub use prefix_stats::{PrefixRange, PrefixStats};
pub use response_plan::{ChatOutcome, ClarifyPrompt, ResponsePlan, ResponseSource};
pub use snippet::Snippet;
