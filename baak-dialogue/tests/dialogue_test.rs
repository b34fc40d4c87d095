//! Pending-resolution round-trips.

use baak_core::intent::{FallbackReason, Intent, IntentKind, MissingParam};
use baak_core::models::{ClassCode, Pending, PrefixRange};
use baak_dialogue::{DialogueMachine, Resolution};
use baak_intent::{ClassCodeParser, IntentClassifier};

fn code(s: &str) -> ClassCode {
    ClassCodeParser::new()
        .parse_full(s)
        .expect("valid class code")
}

fn awaiting_type(s: &str) -> Pending {
    Pending::AwaitingScheduleType { kelas: code(s) }
}

#[test]
fn exam_keyword_resolves_with_stored_code() {
    let classifier = IntentClassifier::new();
    let machine = DialogueMachine::new(&classifier);

    assert_eq!(
        machine.resolve(&awaiting_type("2KA05"), "uas"),
        Resolution::Dispatch(Intent::ExamSchedule {
            kelas: "2KA05".into()
        })
    );
    assert_eq!(
        machine.resolve(&awaiting_type("2KA05"), "kuliah saja"),
        Resolution::Dispatch(Intent::CourseSchedule {
            kelas: "2KA05".into()
        })
    );
}

#[test]
fn stored_suffix_survives_course_but_not_exam() {
    let classifier = IntentClassifier::new();
    let machine = DialogueMachine::new(&classifier);

    assert_eq!(
        machine.resolve(&awaiting_type("3KA11A"), "kuliah"),
        Resolution::Dispatch(Intent::CourseSchedule {
            kelas: "3KA11A".into()
        })
    );
    assert_eq!(
        machine.resolve(&awaiting_type("3KA11A"), "uas"),
        Resolution::Dispatch(Intent::ExamSchedule {
            kelas: "3KA11".into()
        })
    );
}

#[test]
fn calendar_query_overrides_pending() {
    let classifier = IntentClassifier::new();
    let machine = DialogueMachine::new(&classifier);

    assert_eq!(
        machine.resolve(&awaiting_type("2KA05"), "kalender akademik"),
        Resolution::Dispatch(Intent::AcademicCalendar {
            term: None,
            group: None,
        })
    );
}

#[test]
fn procedural_query_overrides_but_noise_does_not() {
    let classifier = IntentClassifier::new();
    let machine = DialogueMachine::new(&classifier);

    assert_eq!(
        machine.resolve(&awaiting_type("2KA05"), "syarat pengajuan cuti"),
        Resolution::Dispatch(Intent::GeneralFallback {
            reason: FallbackReason::Procedural
        })
    );
    // Unmatched text repeats the question with the stored code.
    assert_eq!(
        machine.resolve(&awaiting_type("2KA05"), "hmm"),
        Resolution::Await(awaiting_type("2KA05"))
    );
}

#[test]
fn inline_code_with_keyword_beats_stored_code() {
    let classifier = IntentClassifier::new();
    let machine = DialogueMachine::new(&classifier);

    assert_eq!(
        machine.resolve(&awaiting_type("2KA05"), "uas 4KB03 saja"),
        Resolution::Dispatch(Intent::ExamSchedule {
            kelas: "4KB03".into()
        })
    );
}

#[test]
fn bare_code_replaces_stored_code_and_reasks() {
    let classifier = IntentClassifier::new();
    let machine = DialogueMachine::new(&classifier);

    assert_eq!(
        machine.resolve(&awaiting_type("2KA05"), "4KB03"),
        Resolution::Await(awaiting_type("4KB03"))
    );
}

#[test]
fn class_range_consumes_any_full_code() {
    let classifier = IntentClassifier::new();
    let machine = DialogueMachine::new(&classifier);
    let pending = Pending::AwaitingClassRange {
        prefix: code("4KB01").prefix(),
        range: Some(PrefixRange { min: 1, max: 12 }),
    };

    assert_eq!(
        machine.resolve(&pending, "4KB03 dong"),
        Resolution::Dispatch(Intent::CourseSchedule {
            kelas: "4KB03".into()
        })
    );
    assert_eq!(
        machine.resolve(&pending, "uas 4KB03 dong"),
        Resolution::Dispatch(Intent::ExamSchedule {
            kelas: "4KB03".into()
        })
    );
    // No code repeats the question, keeping the cached range.
    assert_eq!(machine.resolve(&pending, "yg mana ya"), Resolution::Await(pending.clone()));
}

#[test]
fn fresh_prefix_switches_the_range_flow() {
    let classifier = IntentClassifier::new();
    let machine = DialogueMachine::new(&classifier);

    assert_eq!(
        machine.resolve(&awaiting_type("2KA05"), "1KA"),
        Resolution::Await(Pending::AwaitingClassRange {
            prefix: code("1KA01").prefix(),
            range: None,
        })
    );
}

#[test]
fn parameter_fill_and_terminal_failure() {
    let classifier = IntentClassifier::new();
    let machine = DialogueMachine::new(&classifier);
    let pending = Pending::AwaitingParameter {
        intent: IntentKind::CourseSchedule,
        missing: MissingParam::Kelas,
    };

    assert_eq!(
        machine.resolve(&pending, "4KB03"),
        Resolution::Dispatch(Intent::CourseSchedule {
            kelas: "4KB03".into()
        })
    );
    assert_eq!(
        machine.resolve(&pending, "tidak tahu"),
        Resolution::InvalidFormat {
            intended: IntentKind::CourseSchedule
        }
    );
}

#[test]
fn lecturer_parameter_needs_a_trigger_word() {
    let classifier = IntentClassifier::new();
    let machine = DialogueMachine::new(&classifier);
    let pending = Pending::AwaitingParameter {
        intent: IntentKind::LecturerSchedule,
        missing: MissingParam::Dosen,
    };

    assert_eq!(
        machine.resolve(&pending, "bu Sari Dewi"),
        Resolution::Dispatch(Intent::LecturerSchedule {
            dosen: "Sari Dewi".into()
        })
    );
    assert_eq!(
        machine.resolve(&pending, "Sari"),
        Resolution::InvalidFormat {
            intended: IntentKind::LecturerSchedule
        }
    );
}
