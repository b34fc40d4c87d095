//! Structured engine output.
//!
//! The engine returns `(intent, parameters, rows | snippets)` tuples;
//! turning a plan into human-readable text or markup is the response
//! formatter's job, outside this core.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::class_code::ClassPrefix;
use super::clarification::ClarificationAsk;
use super::prefix_stats::PrefixStats;
use super::snippet::Snippet;
use crate::intent::{Intent, IntentKind};

/// Where an answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseSource {
    #[serde(rename = "database")]
    Database,
    #[serde(rename = "llm_rag")]
    Knowledge,
    #[serde(rename = "clarification")]
    Clarification,
    #[serde(rename = "error")]
    Error,
}

impl ResponseSource {
    pub fn label(&self) -> &'static str {
        match self {
            ResponseSource::Database => "database",
            ResponseSource::Knowledge => "llm_rag",
            ResponseSource::Clarification => "clarification",
            ResponseSource::Error => "error",
        }
    }
}

/// The clarification question the renderer should ask.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "prompt", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum ClarifyPrompt {
    /// "Course or exam schedule for <kelas>?"
    ScheduleType { kelas: String },
    /// "Which class under <prefix>?" with the known range when available.
    ClassRange {
        prefix: ClassPrefix,
        stats: PrefixStats,
    },
    /// "Which <missing> for <intent>?"
    Parameter(ClarificationAsk),
}

/// What the renderer should produce for this turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "plan", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum ResponsePlan {
    /// Raw rows from the tabular store. `range_hint` is attached when a
    /// course/exam lookup came back empty but the class prefix is known.
    Rows {
        intent: Intent,
        rows: Vec<Value>,
        range_hint: Option<PrefixStats>,
    },
    /// Generated answer plus the snippets it was grounded on.
    Answer {
        text: String,
        snippets: Vec<Snippet>,
    },
    /// Ask a clarification question and wait.
    Clarify(ClarifyPrompt),
    /// Terminal failure of a parameter clarification: the reply still did
    /// not contain the needed value. Pending state is already cleared.
    InvalidFormat { intended: IntentKind },
}

impl ResponsePlan {
    /// Terse machine summary, recorded as the bot side of an exchange.
    pub fn summary(&self) -> String {
        match self {
            ResponsePlan::Rows { rows, .. } => format!("rows:{}", rows.len()),
            ResponsePlan::Answer { snippets, .. } => format!("answer:{}", snippets.len()),
            ResponsePlan::Clarify(ClarifyPrompt::ScheduleType { .. }) => {
                "clarify:schedule_type".to_string()
            }
            ResponsePlan::Clarify(ClarifyPrompt::ClassRange { .. }) => {
                "clarify:class_range".to_string()
            }
            ResponsePlan::Clarify(ClarifyPrompt::Parameter(_)) => "clarify:parameter".to_string(),
            ResponsePlan::InvalidFormat { .. } => "invalid_format".to_string(),
        }
    }

    /// Whether the plan carries actual data (rows or snippets).
    pub fn has_data(&self) -> bool {
        match self {
            ResponsePlan::Rows { rows, .. } => !rows.is_empty(),
            ResponsePlan::Answer { snippets, .. } => !snippets.is_empty(),
            _ => false,
        }
    }
}

/// One resolved turn: the final intent, the answer source, and the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatOutcome {
    /// Session the turn belongs to (freshly created when the incoming id
    /// was absent, unknown, or expired).
    pub session_id: String,
    /// Final resolved intent tag.
    pub intent: IntentKind,
    pub source: ResponseSource,
    pub has_data: bool,
    pub plan: ResponsePlan,
}
