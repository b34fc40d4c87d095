//! Keyword rule sets for the classifier cascade.
//!
//! One compiled pattern list per rule family, first match wins inside a
//! family. The calendar family needs a conjunction (direction word AND
//! term word AND not the word "kelas") which regex alone cannot express
//! here, so it is split into three patterns combined in code.

use regex::Regex;

pub(crate) struct Vocabulary {
    pub schedule_definition: Vec<Regex>,
    pub reading_guide: Vec<Regex>,
    pub course_schedule: Vec<Regex>,
    pub exam_schedule: Vec<Regex>,
    pub lecturer_schedule: Vec<Regex>,
    pub homeroom: Vec<Regex>,
    pub service_counter: Vec<Regex>,
    pub calendar_explicit: Regex,
    pub calendar_direction: Regex,
    pub calendar_term_word: Regex,
    pub kelas_word: Regex,
    pub procedural_keywords: &'static [&'static str],
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("vocabulary pattern"))
        .collect()
}

impl Vocabulary {
    pub fn new() -> Self {
        Self {
            schedule_definition: compile(&[
                r"(?i)\bjadwal\s+kuliah\s*(adalah|apa\s+itu|pengertian|definisi)\b",
                r"(?i)\b(kapan|bagaimana)\s+jadwal\s+kuliah\b",
            ]),
            reading_guide: compile(&[
                r"(?i)\b(cara|bagaimana)\s+(membaca|baca)\s+jadwal\s+kuliah\b",
                r"(?i)\bjadwal\s+kuliah\b.*\b(cara\s+membaca|cara\s+baca)\b",
            ]),
            course_schedule: compile(&[
                r"(?i)\bjadwal\s+(kuliah|perkuliahan)\b",
                r"(?i)\b(kuliah|perkuliahan)\b.*\bkelas\b",
                r"(?i)\bkelas\b.*\bjadwal\b",
            ]),
            exam_schedule: compile(&[
                r"(?i)\bjadwal\s+(uas|ujian)\b",
                r"(?i)\b(uas|ujian)\b.*\bkelas\b",
                r"(?i)\bujian\s+akhir\b",
            ]),
            lecturer_schedule: compile(&[
                r"(?i)\bjadwal\s+dosen\b",
                r"(?i)\bdosen\b.*\bjadwal\b",
                r"(?i)\bmengajar\b.*\bdosen\b",
            ]),
            homeroom: compile(&[
                r"(?i)\bwali\s+kelas\b",
                r"(?i)\bdosen\s+wali\b",
                r"(?i)\bpembimbing\s+kelas\b",
            ]),
            service_counter: compile(&[
                r"(?i)\bloket\s+baak\b",
                r"(?i)\blayanan\s+baak\b",
                r"(?i)\bjam\s+buka\s+baak\b",
                r"(?i)\boperasional\s+baak\b",
            ]),
            calendar_explicit: Regex::new(r"(?i)\bkalender\s+akademik\b").expect("calendar"),
            calendar_direction: Regex::new(r"(?i)\b(kapan|tanggal|periode|rentang)\b")
                .expect("calendar direction"),
            calendar_term_word: Regex::new(
                r"(?i)\b(uts|uas|libur|daftar ulang|cuti|krs|frs|uji kompetensi|perkuliahan)\b",
            )
            .expect("calendar term"),
            kelas_word: Regex::new(r"(?i)\bkelas\b").expect("kelas word"),
            procedural_keywords: &[
                "prosedur",
                "cara",
                "syarat",
                "cuti",
                "bimbingan",
                "skripsi",
                "krs",
                "khs",
                "registrasi",
                "wisuda",
                "magang",
                "pindah",
                "alih",
                "tugas akhir",
            ],
        }
    }

    pub fn matches_any(patterns: &[Regex], text: &str) -> bool {
        patterns.iter().any(|p| p.is_match(text))
    }
}
