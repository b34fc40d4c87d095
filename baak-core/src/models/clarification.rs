use serde::{Deserialize, Serialize};

use super::class_code::{ClassCode, ClassPrefix};
use crate::intent::{IntentKind, MissingParam};

/// What the clarification question is about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "ask", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum ClarificationAsk {
    /// A bare class code never implies course vs. exam; the user must
    /// pick. Carries the full code so the suffix survives until the
    /// choice is made.
    AmbiguousScheduleType { kelas: ClassCode },
    /// A bare prefix (`4KB`) needs a class number; the known numeric
    /// range for the prefix is reported back.
    ClassRangeNeeded { prefix: ClassPrefix },
    /// A keyword rule matched but its required parameter is absent.
    MissingParameter {
        missing: MissingParam,
        intent: IntentKind,
    },
}
