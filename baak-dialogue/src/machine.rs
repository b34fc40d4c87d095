//! Pending-clarification state machine.
//!
//! Priority order, load-bearing:
//! 1. a fresh high-value intent in the reply escapes the pending flow;
//! 2. an exam/course keyword plus an inline code resolves directly;
//! 3. an open class-range question consumes any full code in the reply;
//! 4. an open schedule-type question falls back to the stored code;
//! 5. a parameter question either fills its parameter or fails terminally.

use tracing::debug;

use baak_core::intent::{FallbackReason, Intent, IntentKind, MissingParam};
use baak_core::models::{ClarificationAsk, Pending};
use baak_intent::IntentClassifier;

/// Outcome of one resolution step.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Pending is cleared; dispatch this intent.
    Dispatch(Intent),
    /// Stay in (or switch to) this pending state and re-prompt.
    Await(Pending),
    /// Terminal: the reply still did not carry the needed parameter.
    /// Pending is cleared; no retry loop on this path.
    InvalidFormat { intended: IntentKind },
}

/// Stateless resolver over a shared classifier. The caller owns the
/// session and applies the returned transition.
pub struct DialogueMachine<'a> {
    classifier: &'a IntentClassifier,
}

impl<'a> DialogueMachine<'a> {
    pub fn new(classifier: &'a IntentClassifier) -> Self {
        Self { classifier }
    }

    /// Resolve a message against the session's pending question.
    pub fn resolve(&self, pending: &Pending, text: &str) -> Resolution {
        let resolution = self.run(pending, text);
        debug!(pending = pending.label(), ?resolution, "pending resolved");
        resolution
    }

    fn run(&self, pending: &Pending, text: &str) -> Resolution {
        // 1) Escape hatch: a fresh, self-sufficient query replaces the
        //    pending flow entirely. An unmatched fallback stays here so
        //    one-word answers like "uas" can still address the question.
        let fresh = self.classifier.classify(text);
        match &fresh {
            Intent::CourseSchedule { .. }
            | Intent::ExamSchedule { .. }
            | Intent::LecturerSchedule { .. }
            | Intent::Homeroom { .. }
            | Intent::ServiceCounterSchedule
            | Intent::AcademicCalendar { .. }
            | Intent::CourseCatalog
            | Intent::ScheduleDefinition
            | Intent::ScheduleReadingGuide => return Resolution::Dispatch(fresh),
            Intent::GeneralFallback {
                reason: FallbackReason::Procedural,
            } => return Resolution::Dispatch(fresh),
            Intent::NeedsClarification(ClarificationAsk::ClassRangeNeeded { prefix }) => {
                return Resolution::Await(Pending::AwaitingClassRange {
                    prefix: prefix.clone(),
                    range: None,
                });
            }
            _ => {}
        }

        let low = text.to_lowercase();
        let wants_exam = low.contains("uas");
        let wants_course = low.contains("kuliah");
        let code = self.classifier.codes().parse_full(text);

        // 2) Keyword plus inline code resolves regardless of what was
        //    pending. The exam keyword wins when both appear.
        if let Some(code) = &code {
            if wants_exam {
                return Resolution::Dispatch(Intent::ExamSchedule { kelas: code.base() });
            }
            if wants_course {
                return Resolution::Dispatch(Intent::CourseSchedule { kelas: code.full() });
            }
        }

        match pending {
            // 3) Open class-range question: any full code settles it,
            //    defaulting to the course schedule when no keyword said
            //    otherwise. No code repeats the question, echoing the
            //    known range.
            Pending::AwaitingClassRange { prefix, range } => match code {
                Some(code) => Resolution::Dispatch(Intent::CourseSchedule { kelas: code.full() }),
                None => Resolution::Await(Pending::AwaitingClassRange {
                    prefix: prefix.clone(),
                    range: *range,
                }),
            },

            // 4) Open schedule-type question: the keyword alone is
            //    enough, the stored code fills in. A bare new code
            //    replaces the stored one and the question repeats.
            Pending::AwaitingScheduleType { kelas } => {
                if wants_exam {
                    return Resolution::Dispatch(Intent::ExamSchedule {
                        kelas: kelas.base(),
                    });
                }
                if wants_course {
                    return Resolution::Dispatch(Intent::CourseSchedule {
                        kelas: kelas.full(),
                    });
                }
                if let Some(code) = code {
                    return Resolution::Await(Pending::AwaitingScheduleType { kelas: code });
                }
                Resolution::Await(Pending::AwaitingScheduleType {
                    kelas: kelas.clone(),
                })
            }

            // 5) Parameter question: fill it or fail terminally.
            Pending::AwaitingParameter { intent, missing } => match missing {
                MissingParam::Kelas => match (code, intent) {
                    (Some(code), IntentKind::CourseSchedule) => {
                        Resolution::Dispatch(Intent::CourseSchedule { kelas: code.full() })
                    }
                    (Some(code), IntentKind::ExamSchedule) => {
                        Resolution::Dispatch(Intent::ExamSchedule { kelas: code.base() })
                    }
                    (Some(code), IntentKind::Homeroom) => {
                        Resolution::Dispatch(Intent::Homeroom { kelas: code.base() })
                    }
                    _ => Resolution::InvalidFormat { intended: *intent },
                },
                MissingParam::Dosen => match self.classifier.extractors().lecturer_name(text) {
                    Some(dosen) => Resolution::Dispatch(Intent::LecturerSchedule { dosen }),
                    None => Resolution::InvalidFormat { intended: *intent },
                },
            },
        }
    }
}
