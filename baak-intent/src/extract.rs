//! Parameter extraction helpers.
//!
//! Pure functions over the message text; the classifier decides when to
//! call them, they only pull values out.

use regex::Regex;

use baak_core::intent::{CalendarGroup, CalendarTerm};

/// Compiled extraction patterns. Construct once and share.
pub struct Extractors {
    lecturer_trigger: Regex,
    name_run: Regex,
    whitespace: Regex,
    before_words: Regex,
    after_words: Regex,
}

impl Extractors {
    pub fn new() -> Self {
        Self {
            lecturer_trigger: Regex::new(r"(?i)\b(jadwal\s+dosen|dosen|pak|bu|bapak|ibu)\b")
                .expect("lecturer trigger"),
            name_run: Regex::new(r"^[A-Za-zÀ-ÿ.'\- ]{2,}").expect("name run"),
            whitespace: Regex::new(r"\s+").expect("whitespace"),
            before_words: Regex::new(r"(?i)\b(sebelum|pra)\b").expect("before words"),
            after_words: Regex::new(r"(?i)\b(setelah|sesudah|pasca)\b").expect("after words"),
        }
    }

    /// Lecturer name: the run of name characters immediately after a
    /// trigger word (`dosen budi santoso` → `budi santoso`), whitespace
    /// collapsed. At least two characters, otherwise nothing.
    pub fn lecturer_name(&self, text: &str) -> Option<String> {
        let trigger = self.lecturer_trigger.find(text)?;
        let after = text[trigger.end()..].trim_start();
        let run = self.name_run.find(after)?;
        let name = self
            .whitespace
            .replace_all(run.as_str().trim(), " ")
            .into_owned();
        if name.len() >= 2 {
            Some(name)
        } else {
            None
        }
    }

    /// Before/after-midterm grouping. Only meaningful when the message
    /// talks about the lecture period relative to the midterms; a bare
    /// "sebelum" elsewhere does not group.
    pub fn calendar_group(&self, text: &str) -> Option<CalendarGroup> {
        let q = text.to_lowercase();
        if !(q.contains("perkuliahan") && q.contains("uts")) {
            return None;
        }
        if self.before_words.is_match(&q) {
            return Some(CalendarGroup::BeforeMidterm);
        }
        if self.after_words.is_match(&q) {
            return Some(CalendarGroup::AfterMidterm);
        }
        None
    }

    /// Calendar term filter, first hit in a fixed order. `uts` is probed
    /// before `uas` so a message naming both filters on the midterms.
    pub fn calendar_term(&self, text: &str) -> Option<CalendarTerm> {
        let q = text.to_lowercase();
        if q.contains("uts") {
            Some(CalendarTerm::Uts)
        } else if q.contains("uas") {
            Some(CalendarTerm::Uas)
        } else if q.contains("cuti") {
            Some(CalendarTerm::Cuti)
        } else if q.contains("krs") || q.contains("frs") {
            Some(CalendarTerm::Krs)
        } else if q.contains("daftar ulang") {
            Some(CalendarTerm::DaftarUlang)
        } else if q.contains("libur") {
            Some(CalendarTerm::Libur)
        } else if q.contains("uji kompetensi") {
            Some(CalendarTerm::UjiKompetensi)
        } else {
            None
        }
    }
}

impl Default for Extractors {
    fn default() -> Self {
        Self::new()
    }
}
