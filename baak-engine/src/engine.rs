//! ChatEngine — session-aware turn resolution over borrowed collaborators.
//!
//! The engine is synchronous; all latency-bearing work lives behind the
//! `ScheduleLookup` and `KnowledgeService` traits. The caller must
//! serialize turns for a given session id: two concurrent resolutions
//! against the same pending question would race on the single-pending
//! invariant. Turns on different sessions run freely in parallel.

use tracing::info;

use baak_core::config::{BaakConfig, KnowledgeConfig};
use baak_core::constants::{
    CATALOG_DOC_KEYS, CATALOG_QUERY, CATALOG_TRIGGER_PHRASES, DEFINITION_DOC_KEYS,
    READING_GUIDE_DOC_KEYS,
};
use baak_core::errors::BaakResult;
use baak_core::intent::{Intent, IntentKind};
use baak_core::models::{
    ChatOutcome, ClarificationAsk, ClarifyPrompt, Pending, PrefixStats, ResponsePlan,
    ResponseSource,
};
use baak_core::traits::{KnowledgeService, ScheduleLookup};
use baak_dialogue::{DialogueMachine, Resolution};
use baak_intent::IntentClassifier;
use baak_session::SessionStore;

/// Turn engine. Owns the classifier and the session store, borrows the
/// collaborators for the engine's lifetime.
pub struct ChatEngine<'a> {
    classifier: IntentClassifier,
    sessions: SessionStore,
    knowledge_config: KnowledgeConfig,
    lookup: &'a dyn ScheduleLookup,
    knowledge: &'a dyn KnowledgeService,
}

impl<'a> ChatEngine<'a> {
    pub fn new(
        config: BaakConfig,
        lookup: &'a dyn ScheduleLookup,
        knowledge: &'a dyn KnowledgeService,
    ) -> Self {
        Self {
            classifier: IntentClassifier::new(),
            sessions: SessionStore::new(config.session),
            knowledge_config: config.knowledge,
            lookup,
            knowledge,
        }
    }

    /// The session store, exposed for maintenance (sweeps, inspection).
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Resolve one chat turn. An absent, unknown, or expired session id
    /// gets a fresh session; the id actually used is in the outcome.
    /// Only collaborator failures surface as errors.
    pub fn handle(&self, session_id: Option<&str>, text: &str) -> BaakResult<ChatOutcome> {
        let text = text.trim();
        let session_id = match session_id {
            Some(id) if self.sessions.touch(id) => id.to_string(),
            _ => self.sessions.create(),
        };

        let (intent, plan) = match self.sessions.pending(&session_id) {
            Some(pending) => {
                let machine = DialogueMachine::new(&self.classifier);
                match machine.resolve(&pending, text) {
                    Resolution::Dispatch(intent) => {
                        self.sessions.clear_pending(&session_id);
                        self.dispatch(&session_id, text, intent)?
                    }
                    Resolution::Await(next) => (
                        IntentKind::NeedsClarification,
                        self.ask(&session_id, next)?,
                    ),
                    Resolution::InvalidFormat { intended } => {
                        self.sessions.clear_pending(&session_id);
                        (intended, ResponsePlan::InvalidFormat { intended })
                    }
                }
            }
            None => {
                let intent = self.classifier.classify(text);
                self.dispatch(&session_id, text, intent)?
            }
        };

        let source = source_of(&plan);
        let has_data = plan.has_data();
        self.sessions
            .add_exchange(&session_id, text, &plan.summary(), intent);
        info!(
            session_id,
            intent = %intent,
            source = source.label(),
            has_data,
            "turn resolved"
        );

        Ok(ChatOutcome {
            session_id,
            intent,
            source,
            has_data,
            plan,
        })
    }

    fn dispatch(
        &self,
        session_id: &str,
        text: &str,
        intent: Intent,
    ) -> BaakResult<(IntentKind, ResponsePlan)> {
        match intent {
            Intent::CourseSchedule { ref kelas } => {
                let rows = self.lookup.course_schedule(kelas)?;
                let range_hint = if rows.is_empty() {
                    self.range_hint(kelas)?
                } else {
                    None
                };
                Ok((
                    IntentKind::CourseSchedule,
                    ResponsePlan::Rows {
                        intent,
                        rows,
                        range_hint,
                    },
                ))
            }
            Intent::ExamSchedule { ref kelas } => {
                let rows = self.lookup.exam_schedule(kelas)?;
                let range_hint = if rows.is_empty() {
                    self.range_hint(kelas)?
                } else {
                    None
                };
                Ok((
                    IntentKind::ExamSchedule,
                    ResponsePlan::Rows {
                        intent,
                        rows,
                        range_hint,
                    },
                ))
            }
            Intent::LecturerSchedule { ref dosen } => {
                let rows = self.lookup.lecturer_schedule(dosen)?;
                Ok((IntentKind::LecturerSchedule, rows_plan(intent, rows)))
            }
            Intent::Homeroom { ref kelas } => {
                let rows = self.lookup.homeroom(kelas)?;
                Ok((IntentKind::Homeroom, rows_plan(intent, rows)))
            }
            Intent::ServiceCounterSchedule => {
                let rows = self.lookup.service_counter_hours()?;
                Ok((IntentKind::ServiceCounterSchedule, rows_plan(intent, rows)))
            }
            Intent::AcademicCalendar { term, group } => {
                let rows = self.lookup.academic_calendar(term, group)?;
                Ok((IntentKind::AcademicCalendar, rows_plan(intent, rows)))
            }
            Intent::CourseCatalog => self.catalog(),
            Intent::ScheduleDefinition => {
                self.info_answer(IntentKind::ScheduleDefinition, text, DEFINITION_DOC_KEYS)
            }
            Intent::ScheduleReadingGuide => self.info_answer(
                IntentKind::ScheduleReadingGuide,
                text,
                READING_GUIDE_DOC_KEYS,
            ),
            Intent::GeneralFallback { .. } => self.fallback(session_id, text),
            Intent::NeedsClarification(ask) => Ok((
                IntentKind::NeedsClarification,
                self.ask(session_id, pending_from(ask))?,
            )),
        }
    }

    /// Course-catalog answer: wide extractive retrieval pinned to the
    /// catalog documents, strict generation. No snippets means the
    /// catalog is simply not ingested; generation is skipped.
    fn catalog(&self) -> BaakResult<(IntentKind, ResponsePlan)> {
        let snippets = self.knowledge.search(
            CATALOG_QUERY,
            self.knowledge_config.catalog_top_k,
            self.knowledge_config.catalog_min_score,
            CATALOG_DOC_KEYS,
        )?;
        let text = if snippets.is_empty() {
            String::new()
        } else {
            self.knowledge.generate(CATALOG_QUERY, &snippets, true)?
        };
        Ok((
            IntentKind::CourseCatalog,
            ResponsePlan::Answer { text, snippets },
        ))
    }

    /// Educational answers, grounded strictly on the preferred documents.
    fn info_answer(
        &self,
        kind: IntentKind,
        query: &str,
        prefer_doc_keys: &[&str],
    ) -> BaakResult<(IntentKind, ResponsePlan)> {
        let snippets = self.knowledge.search(
            query,
            self.knowledge_config.info_top_k,
            self.knowledge_config.info_min_score,
            prefer_doc_keys,
        )?;
        let text = if snippets.is_empty() {
            String::new()
        } else {
            self.knowledge.generate(query, &snippets, true)?
        };
        Ok((kind, ResponsePlan::Answer { text, snippets }))
    }

    /// General fallback. Catalog phrasing is rerouted to the catalog
    /// flow, and a class code inside otherwise-unmatched text falls back
    /// to the course-vs-exam question instead of the knowledge base.
    fn fallback(&self, session_id: &str, text: &str) -> BaakResult<(IntentKind, ResponsePlan)> {
        let low = text.to_lowercase();
        if CATALOG_TRIGGER_PHRASES.iter().any(|p| low.contains(p)) {
            return self.catalog();
        }

        if let Some(code) = self.classifier.codes().parse_full(text) {
            let plan = self.ask(session_id, Pending::AwaitingScheduleType { kelas: code })?;
            return Ok((IntentKind::NeedsClarification, plan));
        }

        let snippets = self.knowledge.search(
            text,
            self.knowledge_config.top_k,
            self.knowledge_config.min_score,
            &[],
        )?;
        let strict = !snippets.is_empty();
        let answer = self.knowledge.generate(text, &snippets, strict)?;
        Ok((
            IntentKind::GeneralFallback,
            ResponsePlan::Answer {
                text: answer,
                snippets,
            },
        ))
    }

    /// Store a pending question and build its clarification plan. Class
    /// ranges query the lookup so the prompt can echo the known numbers
    /// and the range is cached on the pending record.
    fn ask(&self, session_id: &str, pending: Pending) -> BaakResult<ResponsePlan> {
        let (pending, prompt) = match pending {
            Pending::AwaitingScheduleType { kelas } => {
                let prompt = ClarifyPrompt::ScheduleType {
                    kelas: kelas.full(),
                };
                (Pending::AwaitingScheduleType { kelas }, prompt)
            }
            Pending::AwaitingClassRange { prefix, .. } => {
                let stats = self.lookup.class_prefix_stats(&prefix)?;
                let pending = Pending::AwaitingClassRange {
                    prefix: prefix.clone(),
                    range: stats.range,
                };
                (pending, ClarifyPrompt::ClassRange { prefix, stats })
            }
            Pending::AwaitingParameter { intent, missing } => (
                Pending::AwaitingParameter { intent, missing },
                ClarifyPrompt::Parameter(ClarificationAsk::MissingParameter { missing, intent }),
            ),
        };
        self.sessions.set_pending(session_id, pending);
        Ok(ResponsePlan::Clarify(prompt))
    }

    /// Range suggestion for an empty course/exam lookup, when the class
    /// prefix is known to the lookup side.
    fn range_hint(&self, kelas: &str) -> BaakResult<Option<PrefixStats>> {
        let code = match self.classifier.codes().parse_full(kelas) {
            Some(code) => code,
            None => return Ok(None),
        };
        let stats = self.lookup.class_prefix_stats(&code.prefix())?;
        if stats.exists {
            Ok(Some(stats))
        } else {
            Ok(None)
        }
    }
}

fn rows_plan(intent: Intent, rows: Vec<serde_json::Value>) -> ResponsePlan {
    ResponsePlan::Rows {
        intent,
        rows,
        range_hint: None,
    }
}

fn pending_from(ask: ClarificationAsk) -> Pending {
    match ask {
        ClarificationAsk::AmbiguousScheduleType { kelas } => {
            Pending::AwaitingScheduleType { kelas }
        }
        ClarificationAsk::ClassRangeNeeded { prefix } => Pending::AwaitingClassRange {
            prefix,
            range: None,
        },
        ClarificationAsk::MissingParameter { missing, intent } => {
            Pending::AwaitingParameter { intent, missing }
        }
    }
}

fn source_of(plan: &ResponsePlan) -> ResponseSource {
    match plan {
        ResponsePlan::Rows { .. } => ResponseSource::Database,
        ResponsePlan::Answer { .. } => ResponseSource::Knowledge,
        ResponsePlan::Clarify(_) => ResponseSource::Clarification,
        ResponsePlan::InvalidFormat { .. } => ResponseSource::Error,
    }
}
