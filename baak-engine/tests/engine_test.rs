//! Full-turn behavior with mock collaborators.

use serde_json::{json, Value};

use baak_core::config::BaakConfig;
use baak_core::errors::BaakResult;
use baak_core::intent::{CalendarGroup, CalendarTerm, IntentKind};
use baak_core::models::{
    ClarifyPrompt, ClassPrefix, PrefixRange, PrefixStats, ResponsePlan, ResponseSource, Snippet,
};
use baak_core::traits::{KnowledgeService, ScheduleLookup};
use baak_engine::ChatEngine;

struct MockLookup;

impl ScheduleLookup for MockLookup {
    fn course_schedule(&self, kelas: &str) -> BaakResult<Vec<Value>> {
        if kelas == "1KA01" {
            Ok(vec![json!({"kelas": kelas, "hari": "Senin"})])
        } else {
            Ok(vec![])
        }
    }

    fn exam_schedule(&self, kelas: &str) -> BaakResult<Vec<Value>> {
        if kelas == "2KA05" {
            Ok(vec![json!({"kelas": kelas, "matkul": "Basis Data"})])
        } else {
            Ok(vec![])
        }
    }

    fn lecturer_schedule(&self, dosen: &str) -> BaakResult<Vec<Value>> {
        if dosen == "Budi Santoso" {
            Ok(vec![json!({"dosen": dosen})])
        } else {
            Ok(vec![])
        }
    }

    fn homeroom(&self, _kelas: &str) -> BaakResult<Vec<Value>> {
        Ok(vec![])
    }

    fn service_counter_hours(&self) -> BaakResult<Vec<Value>> {
        Ok(vec![json!({"hari": "Senin-Jumat", "jam": "09.00-15.00"})])
    }

    fn academic_calendar(
        &self,
        _term: Option<CalendarTerm>,
        _group: Option<CalendarGroup>,
    ) -> BaakResult<Vec<Value>> {
        Ok(vec![json!({"kegiatan": "UAS", "mulai": "2025-07-01"})])
    }

    fn class_prefix_stats(&self, prefix: &ClassPrefix) -> BaakResult<PrefixStats> {
        let known = prefix.to_string();
        if known == "1KA" || known == "2KA" {
            Ok(PrefixStats {
                exists: true,
                count: 20,
                range: Some(PrefixRange { min: 1, max: 20 }),
            })
        } else {
            Ok(PrefixStats::empty())
        }
    }
}

struct MockKnowledge;

impl KnowledgeService for MockKnowledge {
    fn search(
        &self,
        query: &str,
        _top_k: usize,
        _min_score: f64,
        prefer_doc_keys: &[&str],
    ) -> BaakResult<Vec<Snippet>> {
        if query.contains("cuti") || !prefer_doc_keys.is_empty() {
            Ok(vec![Snippet {
                content: "isi dokumen".to_string(),
                title: Some("Dokumen".to_string()),
                source: None,
                doc_key: prefer_doc_keys.first().map(|k| k.to_string()),
                score: 0.9,
            }])
        } else {
            Ok(vec![])
        }
    }

    fn generate(&self, _query: &str, snippets: &[Snippet], strict: bool) -> BaakResult<String> {
        Ok(format!("generated strict={strict} snippets={}", snippets.len()))
    }
}

fn engine<'a>(lookup: &'a MockLookup, knowledge: &'a MockKnowledge) -> ChatEngine<'a> {
    ChatEngine::new(BaakConfig::default(), lookup, knowledge)
}

#[test]
fn course_lookup_records_exchange() {
    let (lookup, knowledge) = (MockLookup, MockKnowledge);
    let engine = engine(&lookup, &knowledge);

    let out = engine.handle(None, "jadwal kuliah 1KA01").unwrap();
    assert_eq!(out.intent, IntentKind::CourseSchedule);
    assert_eq!(out.source, ResponseSource::Database);
    assert!(out.has_data);

    let ctx = engine.sessions().get(&out.session_id).unwrap();
    assert_eq!(ctx.exchanges.len(), 1);
    assert_eq!(ctx.exchanges[0].bot_response, "rows:1");
    assert_eq!(ctx.exchanges[0].intent, IntentKind::CourseSchedule);
}

#[test]
fn bare_code_then_uas_round_trip() {
    let (lookup, knowledge) = (MockLookup, MockKnowledge);
    let engine = engine(&lookup, &knowledge);

    let first = engine.handle(None, "2KA05").unwrap();
    assert_eq!(first.intent, IntentKind::NeedsClarification);
    assert_eq!(first.source, ResponseSource::Clarification);
    match &first.plan {
        ResponsePlan::Clarify(ClarifyPrompt::ScheduleType { kelas }) => {
            assert_eq!(kelas, "2KA05")
        }
        other => panic!("unexpected plan: {other:?}"),
    }

    let second = engine.handle(Some(&first.session_id), "uas").unwrap();
    assert_eq!(second.session_id, first.session_id);
    assert_eq!(second.intent, IntentKind::ExamSchedule);
    assert_eq!(second.source, ResponseSource::Database);
    assert!(second.has_data);
    assert!(engine.sessions().pending(&first.session_id).is_none());
}

#[test]
fn calendar_query_escapes_pending() {
    let (lookup, knowledge) = (MockLookup, MockKnowledge);
    let engine = engine(&lookup, &knowledge);

    let first = engine.handle(None, "2KA05").unwrap();
    let second = engine
        .handle(Some(&first.session_id), "kalender akademik")
        .unwrap();
    assert_eq!(second.intent, IntentKind::AcademicCalendar);
    assert_eq!(second.source, ResponseSource::Database);
    assert!(engine.sessions().pending(&first.session_id).is_none());
}

#[test]
fn prefix_flow_echoes_known_range() {
    let (lookup, knowledge) = (MockLookup, MockKnowledge);
    let engine = engine(&lookup, &knowledge);

    let first = engine.handle(None, "1KA").unwrap();
    assert_eq!(first.intent, IntentKind::NeedsClarification);
    match &first.plan {
        ResponsePlan::Clarify(ClarifyPrompt::ClassRange { prefix, stats }) => {
            assert_eq!(prefix.to_string(), "1KA");
            assert_eq!(stats.range, Some(PrefixRange { min: 1, max: 20 }));
        }
        other => panic!("unexpected plan: {other:?}"),
    }

    let second = engine.handle(Some(&first.session_id), "1KA01").unwrap();
    assert_eq!(second.intent, IntentKind::CourseSchedule);
    assert!(second.has_data);
}

#[test]
fn empty_lookup_attaches_range_hint() {
    let (lookup, knowledge) = (MockLookup, MockKnowledge);
    let engine = engine(&lookup, &knowledge);

    let out = engine.handle(None, "jadwal kuliah 1KA99").unwrap();
    assert_eq!(out.intent, IntentKind::CourseSchedule);
    assert!(!out.has_data);
    match &out.plan {
        ResponsePlan::Rows {
            rows, range_hint, ..
        } => {
            assert!(rows.is_empty());
            let hint = range_hint.as_ref().expect("known prefix");
            assert_eq!(hint.count, 20);
        }
        other => panic!("unexpected plan: {other:?}"),
    }
}

#[test]
fn unresolvable_parameter_is_terminal() {
    let (lookup, knowledge) = (MockLookup, MockKnowledge);
    let engine = engine(&lookup, &knowledge);

    let first = engine.handle(None, "jadwal kuliah").unwrap();
    assert_eq!(first.intent, IntentKind::NeedsClarification);

    let second = engine.handle(Some(&first.session_id), "tidak tahu").unwrap();
    assert_eq!(second.intent, IntentKind::CourseSchedule);
    assert_eq!(second.source, ResponseSource::Error);
    assert_eq!(
        second.plan,
        ResponsePlan::InvalidFormat {
            intended: IntentKind::CourseSchedule
        }
    );
    assert!(engine.sessions().pending(&first.session_id).is_none());

    // The session keeps working after the terminal failure.
    let third = engine
        .handle(Some(&first.session_id), "jadwal kuliah 1KA01")
        .unwrap();
    assert_eq!(third.intent, IntentKind::CourseSchedule);
    assert!(third.has_data);
}

#[test]
fn code_in_unmatched_text_asks_schedule_type() {
    let (lookup, knowledge) = (MockLookup, MockKnowledge);
    let engine = engine(&lookup, &knowledge);

    let out = engine.handle(None, "info 1KA01 dong").unwrap();
    assert_eq!(out.intent, IntentKind::NeedsClarification);
    match &out.plan {
        ResponsePlan::Clarify(ClarifyPrompt::ScheduleType { kelas }) => {
            assert_eq!(kelas, "1KA01")
        }
        other => panic!("unexpected plan: {other:?}"),
    }
    assert!(engine.sessions().pending(&out.session_id).is_some());
}

#[test]
fn catalog_phrase_reroutes_fallback() {
    let (lookup, knowledge) = (MockLookup, MockKnowledge);
    let engine = engine(&lookup, &knowledge);

    let out = engine.handle(None, "daftar mata kuliah dong").unwrap();
    assert_eq!(out.intent, IntentKind::CourseCatalog);
    assert_eq!(out.source, ResponseSource::Knowledge);
    assert!(out.has_data);
    match &out.plan {
        ResponsePlan::Answer { text, snippets } => {
            assert_eq!(snippets.len(), 1);
            assert!(text.contains("strict=true"));
        }
        other => panic!("unexpected plan: {other:?}"),
    }
}

#[test]
fn fallback_generation_is_strict_only_with_snippets() {
    let (lookup, knowledge) = (MockLookup, MockKnowledge);
    let engine = engine(&lookup, &knowledge);

    let grounded = engine.handle(None, "prosedur cuti akademik").unwrap();
    assert_eq!(grounded.intent, IntentKind::GeneralFallback);
    assert!(grounded.has_data);
    match &grounded.plan {
        ResponsePlan::Answer { text, .. } => assert!(text.contains("strict=true")),
        other => panic!("unexpected plan: {other:?}"),
    }

    let ungrounded = engine.handle(None, "halo apa kabar").unwrap();
    assert_eq!(ungrounded.intent, IntentKind::GeneralFallback);
    assert!(!ungrounded.has_data);
    match &ungrounded.plan {
        ResponsePlan::Answer { text, .. } => assert!(text.contains("strict=false")),
        other => panic!("unexpected plan: {other:?}"),
    }
}

#[test]
fn unknown_session_id_gets_a_fresh_session() {
    let (lookup, knowledge) = (MockLookup, MockKnowledge);
    let engine = engine(&lookup, &knowledge);

    let out = engine.handle(Some("no-such-session"), "halo").unwrap();
    assert_ne!(out.session_id, "no-such-session");
    assert!(engine.sessions().get(&out.session_id).is_some());
}

#[test]
fn educational_answer_uses_preferred_documents() {
    let (lookup, knowledge) = (MockLookup, MockKnowledge);
    let engine = engine(&lookup, &knowledge);

    let out = engine.handle(None, "cara membaca jadwal kuliah").unwrap();
    assert_eq!(out.intent, IntentKind::ScheduleReadingGuide);
    match &out.plan {
        ResponsePlan::Answer { snippets, .. } => {
            assert_eq!(snippets[0].doc_key.as_deref(), Some("cara_baca_jadwal"));
        }
        other => panic!("unexpected plan: {other:?}"),
    }
}
