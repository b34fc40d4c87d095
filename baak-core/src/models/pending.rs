use serde::{Deserialize, Serialize};

use super::class_code::{ClassCode, ClassPrefix};
use super::prefix_stats::PrefixRange;
use crate::intent::{IntentKind, MissingParam};

/// Session-scoped record of an open clarification question.
///
/// At most one pending question exists per session; every successful
/// resolution or terminal failure clears it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum Pending {
    /// "Course or exam schedule?" for a known class code.
    AwaitingScheduleType { kelas: ClassCode },
    /// "Which class number?" for a known prefix. The range is remembered
    /// once looked up so re-prompts can echo it without a fresh query.
    AwaitingClassRange {
        prefix: ClassPrefix,
        range: Option<PrefixRange>,
    },
    /// A named intent is waiting for one missing parameter.
    AwaitingParameter {
        intent: IntentKind,
        missing: MissingParam,
    },
}

impl Pending {
    /// Wire label of the state, for logs and exchange records.
    pub fn label(&self) -> &'static str {
        match self {
            Pending::AwaitingScheduleType { .. } => "awaiting_schedule_type",
            Pending::AwaitingClassRange { .. } => "awaiting_class_range",
            Pending::AwaitingParameter { .. } => "awaiting_parameter",
        }
    }
}
