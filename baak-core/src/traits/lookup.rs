use serde_json::Value;

use crate::errors::BaakResult;
use crate::intent::{CalendarGroup, CalendarTerm};
use crate::models::{ClassPrefix, PrefixStats};

/// Deterministic tabular lookups, keyed by normalized class code,
/// lecturer name, or calendar term.
///
/// Rows are opaque to the engine: it counts them for the `has_data` flag
/// and forwards them in the response plan, nothing more. Implementations
/// normalize casing themselves (class codes arrive uppercase).
pub trait ScheduleLookup: Send + Sync {
    /// Course schedule entries for a full class code (suffix included).
    fn course_schedule(&self, kelas: &str) -> BaakResult<Vec<Value>>;

    /// Final-exam schedule entries for a base class code.
    fn exam_schedule(&self, kelas: &str) -> BaakResult<Vec<Value>>;

    /// Teaching schedule entries for a lecturer name.
    fn lecturer_schedule(&self, dosen: &str) -> BaakResult<Vec<Value>>;

    /// Homeroom-teacher pairing for a base class code.
    fn homeroom(&self, kelas: &str) -> BaakResult<Vec<Value>>;

    /// Service-counter opening hours.
    fn service_counter_hours(&self) -> BaakResult<Vec<Value>>;

    /// Academic calendar entries, optionally filtered by term or grouped
    /// around the midterm period.
    fn academic_calendar(
        &self,
        term: Option<CalendarTerm>,
        group: Option<CalendarGroup>,
    ) -> BaakResult<Vec<Value>>;

    /// Known numeric range of class numbers under a prefix.
    fn class_prefix_stats(&self, prefix: &ClassPrefix) -> BaakResult<PrefixStats>;
}
