//! Intent tags and payload-carrying intents.
//!
//! `IntentKind` is the fieldless tag; its wire label (the string the
//! transport layer sees) is a separate, explicit mapping — the in-memory
//! tag is never conflated with its serialized form. `Intent` is the
//! tagged union the classifier and dialogue machine actually produce.

use serde::{Deserialize, Serialize};

use crate::models::ClarificationAsk;

/// Fieldless intent tag. One variant per routable intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntentKind {
    #[serde(rename = "jadwal_kuliah")]
    CourseSchedule,
    #[serde(rename = "jadwal_uas")]
    ExamSchedule,
    #[serde(rename = "jadwal_dosen")]
    LecturerSchedule,
    #[serde(rename = "wali_kelas")]
    Homeroom,
    #[serde(rename = "jadwal_loket")]
    ServiceCounterSchedule,
    #[serde(rename = "kalender_akademik")]
    AcademicCalendar,
    #[serde(rename = "daftar_mata_kuliah")]
    CourseCatalog,
    #[serde(rename = "info_jadwal_kuliah")]
    ScheduleDefinition,
    #[serde(rename = "cara_baca_jadwal")]
    ScheduleReadingGuide,
    #[serde(rename = "need_clarification")]
    NeedsClarification,
    #[serde(rename = "llm_fallback")]
    GeneralFallback,
}

impl IntentKind {
    /// Number of variants.
    pub const COUNT: usize = 11;

    /// All variants, in cascade order.
    pub const ALL: [IntentKind; Self::COUNT] = [
        IntentKind::CourseSchedule,
        IntentKind::ExamSchedule,
        IntentKind::LecturerSchedule,
        IntentKind::Homeroom,
        IntentKind::ServiceCounterSchedule,
        IntentKind::AcademicCalendar,
        IntentKind::CourseCatalog,
        IntentKind::ScheduleDefinition,
        IntentKind::ScheduleReadingGuide,
        IntentKind::NeedsClarification,
        IntentKind::GeneralFallback,
    ];

    /// Stable wire label for this intent.
    pub fn label(&self) -> &'static str {
        match self {
            IntentKind::CourseSchedule => "jadwal_kuliah",
            IntentKind::ExamSchedule => "jadwal_uas",
            IntentKind::LecturerSchedule => "jadwal_dosen",
            IntentKind::Homeroom => "wali_kelas",
            IntentKind::ServiceCounterSchedule => "jadwal_loket",
            IntentKind::AcademicCalendar => "kalender_akademik",
            IntentKind::CourseCatalog => "daftar_mata_kuliah",
            IntentKind::ScheduleDefinition => "info_jadwal_kuliah",
            IntentKind::ScheduleReadingGuide => "cara_baca_jadwal",
            IntentKind::NeedsClarification => "need_clarification",
            IntentKind::GeneralFallback => "llm_fallback",
        }
    }

    /// Whether this intent is answered from the tabular store.
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            IntentKind::CourseSchedule
                | IntentKind::ExamSchedule
                | IntentKind::LecturerSchedule
                | IntentKind::Homeroom
                | IntentKind::ServiceCounterSchedule
                | IntentKind::AcademicCalendar
        )
    }
}

impl std::fmt::Display for IntentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a message fell through to the general fallback.
///
/// The distinction matters to the dialogue machine: a `Procedural` hit
/// (the user asked about leave forms, thesis supervision, ...) overrides
/// an open clarification, while an `Unmatched` default must fall through
/// so that a one-word answer like "uas" can still resolve the pending
/// question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// Matched the procedural knowledge-base vocabulary.
    Procedural,
    /// Matched nothing at all.
    Unmatched,
}

/// Academic-calendar term filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarTerm {
    #[serde(rename = "uts")]
    Uts,
    #[serde(rename = "uas")]
    Uas,
    #[serde(rename = "cuti")]
    Cuti,
    #[serde(rename = "krs")]
    Krs,
    #[serde(rename = "daftar_ulang")]
    DaftarUlang,
    #[serde(rename = "libur")]
    Libur,
    #[serde(rename = "uji_kompetensi")]
    UjiKompetensi,
}

impl CalendarTerm {
    pub fn label(&self) -> &'static str {
        match self {
            CalendarTerm::Uts => "uts",
            CalendarTerm::Uas => "uas",
            CalendarTerm::Cuti => "cuti",
            CalendarTerm::Krs => "krs",
            CalendarTerm::DaftarUlang => "daftar_ulang",
            CalendarTerm::Libur => "libur",
            CalendarTerm::UjiKompetensi => "uji_kompetensi",
        }
    }
}

/// Lecture-period grouping relative to the midterm exams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarGroup {
    #[serde(rename = "sebelum_uts")]
    BeforeMidterm,
    #[serde(rename = "setelah_uts")]
    AfterMidterm,
}

impl CalendarGroup {
    pub fn label(&self) -> &'static str {
        match self {
            CalendarGroup::BeforeMidterm => "sebelum_uts",
            CalendarGroup::AfterMidterm => "setelah_uts",
        }
    }
}

/// Which parameter a clarification is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingParam {
    Kelas,
    Dosen,
}

impl MissingParam {
    pub fn label(&self) -> &'static str {
        match self {
            MissingParam::Kelas => "kelas",
            MissingParam::Dosen => "dosen",
        }
    }
}

/// A classified intent with its extracted parameters.
///
/// Serialized as a tagged enum so the intent survives a roundtrip into
/// the session store's exchange log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Course schedule for a class. Carries the full code: course
    /// schedules can differ by section suffix.
    CourseSchedule { kelas: String },
    /// Exam schedule for a class. Carries the base code: exam schedules
    /// are shared across sections.
    ExamSchedule { kelas: String },
    /// Teaching schedule for a lecturer.
    LecturerSchedule { dosen: String },
    /// Homeroom teacher for a class (base code).
    Homeroom { kelas: String },
    /// Service-counter opening hours.
    ServiceCounterSchedule,
    /// Academic calendar, optionally filtered by term or grouped around
    /// the midterm period.
    AcademicCalendar {
        term: Option<CalendarTerm>,
        group: Option<CalendarGroup>,
    },
    /// Course catalog listing, answered from the knowledge base.
    CourseCatalog,
    /// "What is a course schedule" style question.
    ScheduleDefinition,
    /// "How to read a schedule" style question.
    ScheduleReadingGuide,
    /// A disambiguation question must be asked first.
    NeedsClarification(ClarificationAsk),
    /// Anything else: routed to retrieval + generation.
    GeneralFallback { reason: FallbackReason },
}

impl Intent {
    /// The fieldless tag for this intent.
    pub fn kind(&self) -> IntentKind {
        match self {
            Intent::CourseSchedule { .. } => IntentKind::CourseSchedule,
            Intent::ExamSchedule { .. } => IntentKind::ExamSchedule,
            Intent::LecturerSchedule { .. } => IntentKind::LecturerSchedule,
            Intent::Homeroom { .. } => IntentKind::Homeroom,
            Intent::ServiceCounterSchedule => IntentKind::ServiceCounterSchedule,
            Intent::AcademicCalendar { .. } => IntentKind::AcademicCalendar,
            Intent::CourseCatalog => IntentKind::CourseCatalog,
            Intent::ScheduleDefinition => IntentKind::ScheduleDefinition,
            Intent::ScheduleReadingGuide => IntentKind::ScheduleReadingGuide,
            Intent::NeedsClarification(_) => IntentKind::NeedsClarification,
            Intent::GeneralFallback { .. } => IntentKind::GeneralFallback,
        }
    }

    /// Whether this intent can be dispatched as-is: a concrete lookup or
    /// knowledge intent with every required parameter present.
    pub fn is_complete(&self) -> bool {
        !matches!(self, Intent::NeedsClarification(_))
    }
}
