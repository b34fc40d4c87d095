//! Ordered rule-cascade intent classifier.
//!
//! First matching rule wins and later rules are not evaluated. The order
//! is load-bearing: a bare prefix must be recognized before any keyword
//! rule, service-counter phrases before class-code checks, and a class
//! code anywhere in the message suppresses the definitional and calendar
//! rules because a concrete code signals a data-backed lookup.

use tracing::debug;

use baak_core::intent::{FallbackReason, Intent, IntentKind, MissingParam};
use baak_core::models::ClarificationAsk;

use crate::class_code::ClassCodeParser;
use crate::extract::Extractors;
use crate::vocab::Vocabulary;

pub struct IntentClassifier {
    codes: ClassCodeParser,
    vocab: Vocabulary,
    extract: Extractors,
}

impl IntentClassifier {
    pub fn new() -> Self {
        Self {
            codes: ClassCodeParser::new(),
            vocab: Vocabulary::new(),
            extract: Extractors::new(),
        }
    }

    /// The class-code parser this classifier uses. Shared with the
    /// dialogue machine so both sides agree on what counts as a code.
    pub fn codes(&self) -> &ClassCodeParser {
        &self.codes
    }

    /// The parameter extractors, shared the same way.
    pub fn extractors(&self) -> &Extractors {
        &self.extract
    }

    /// Classify a message. Pure; never fails, the last rule always
    /// matches.
    pub fn classify(&self, text: &str) -> Intent {
        let intent = self.run_cascade(text.trim());
        debug!(kind = %intent.kind(), "classified message");
        intent
    }

    fn run_cascade(&self, q: &str) -> Intent {
        // 1) The whole message is a bare prefix ("4KB"): the class
        //    number is missing and nothing implies course vs. exam yet.
        if let Some(prefix) = self.codes.parse_prefix_only(q) {
            return Intent::NeedsClarification(ClarificationAsk::ClassRangeNeeded { prefix });
        }

        // 2) Service-counter phrases, before anything code-related.
        if Vocabulary::matches_any(&self.vocab.service_counter, q) {
            return Intent::ServiceCounterSchedule;
        }

        // 3) The whole message is exactly a class code: ask which
        //    schedule type is wanted.
        if self.codes.is_bare_full_code(q) {
            if let Some(kelas) = self.codes.parse_full(q) {
                return Intent::NeedsClarification(ClarificationAsk::AmbiguousScheduleType {
                    kelas,
                });
            }
        }

        // 4) Educational questions, only without a class code anywhere.
        //    Reading-guide phrasing is probed before definitions.
        if !self.codes.contains_code_shape(q) {
            if Vocabulary::matches_any(&self.vocab.reading_guide, q) {
                return Intent::ScheduleReadingGuide;
            }
            if Vocabulary::matches_any(&self.vocab.schedule_definition, q) {
                return Intent::ScheduleDefinition;
            }
        }

        // 5) Course schedule: full code, the section suffix matters.
        if Vocabulary::matches_any(&self.vocab.course_schedule, q) {
            return match self.codes.parse_full(q) {
                Some(code) => Intent::CourseSchedule { kelas: code.full() },
                None => missing_kelas(IntentKind::CourseSchedule),
            };
        }

        // 6) Exam schedule: base code, exams are shared across sections.
        if Vocabulary::matches_any(&self.vocab.exam_schedule, q) {
            return match self.codes.parse_full(q) {
                Some(code) => Intent::ExamSchedule { kelas: code.base() },
                None => missing_kelas(IntentKind::ExamSchedule),
            };
        }

        // 7) Homeroom teacher: base code as well.
        if Vocabulary::matches_any(&self.vocab.homeroom, q) {
            return match self.codes.parse_full(q) {
                Some(code) => Intent::Homeroom { kelas: code.base() },
                None => missing_kelas(IntentKind::Homeroom),
            };
        }

        // 8) Lecturer schedule: the name follows a trigger word.
        if Vocabulary::matches_any(&self.vocab.lecturer_schedule, q) {
            return match self.extract.lecturer_name(q) {
                Some(dosen) => Intent::LecturerSchedule { dosen },
                None => Intent::NeedsClarification(ClarificationAsk::MissingParameter {
                    missing: MissingParam::Dosen,
                    intent: IntentKind::LecturerSchedule,
                }),
            };
        }

        // 9) Academic calendar. The before/after-midterm grouping is a
        //    stronger signal and is checked first; the keyword rules are
        //    suppressed by any class-code shape in the message.
        if let Some(group) = self.extract.calendar_group(q) {
            return Intent::AcademicCalendar {
                term: None,
                group: Some(group),
            };
        }
        if !self.codes.contains_code_shape(q) {
            let keyword_hit = self.vocab.calendar_explicit.is_match(q)
                || (self.vocab.calendar_direction.is_match(q)
                    && self.vocab.calendar_term_word.is_match(q)
                    && !self.vocab.kelas_word.is_match(q));
            if keyword_hit {
                return Intent::AcademicCalendar {
                    term: self.extract.calendar_term(q),
                    group: None,
                };
            }
        }

        // 10) Procedural vocabulary goes to retrieval + generation.
        let ql = q.to_lowercase();
        if self
            .vocab
            .procedural_keywords
            .iter()
            .any(|k| ql.contains(k))
        {
            return Intent::GeneralFallback {
                reason: FallbackReason::Procedural,
            };
        }

        // 11) Everything else too, but flagged as a plain miss so an
        //     open clarification can still claim the message.
        Intent::GeneralFallback {
            reason: FallbackReason::Unmatched,
        }
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn missing_kelas(intent: IntentKind) -> Intent {
    Intent::NeedsClarification(ClarificationAsk::MissingParameter {
        missing: MissingParam::Kelas,
        intent,
    })
}
