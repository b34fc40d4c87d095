//! Class-code recognition.
//!
//! Three shapes matter: a full code somewhere inside longer text
//! (`jadwal kuliah 3KA11A`), a message that is exactly a bare full code
//! (`3KA11`), and a message that is exactly a level+program prefix
//! (`4KB`). The program part must belong to the allow-list; a shape-valid
//! token with an unknown program is not a class code at all.

use regex::Regex;

use baak_core::constants::PROGRAM_ALLOW_LIST;
use baak_core::models::{ClassCode, ClassPrefix};

/// Compiled class-code patterns. Construct once and share.
pub struct ClassCodeParser {
    full: Regex,
    bare_full: Regex,
    prefix_only: Regex,
}

impl ClassCodeParser {
    pub fn new() -> Self {
        Self {
            full: Regex::new(
                r"(?i)\b(?P<lvl>[1-4])(?P<prog>[A-Za-z]{2})(?P<num>[0-9]{2})(?P<suffix>[A-Ea-e])?\b",
            )
            .expect("class-code pattern"),
            bare_full: Regex::new(r"(?i)^\s*[1-4][A-Za-z]{2}[0-9]{2}[A-Ea-e]?\s*$")
                .expect("bare-code pattern"),
            prefix_only: Regex::new(r"(?i)^\s*(?P<lvl>[1-4])(?P<prog>[A-Za-z]{2})\s*$")
                .expect("prefix pattern"),
        }
    }

    /// First full class code in the text, validated against the program
    /// allow-list. Later matches are ignored: multiple class codes in one
    /// message are not supported.
    pub fn parse_full(&self, text: &str) -> Option<ClassCode> {
        let caps = self.full.captures(text)?;
        let program = caps["prog"].to_uppercase();
        if !PROGRAM_ALLOW_LIST.contains(&program.as_str()) {
            return None;
        }
        Some(ClassCode {
            level: caps["lvl"].parse().ok()?,
            program,
            number: caps["num"].parse().ok()?,
            suffix: caps
                .name("suffix")
                .and_then(|m| m.as_str().chars().next())
                .map(|c| c.to_ascii_uppercase()),
        })
    }

    /// The entire trimmed text is exactly `[1-4][A-Za-z]{2}`. Stricter
    /// than substring search: a bare prefix is only meaningful as a
    /// complete utterance. The allow-list is not consulted here; an
    /// unknown prefix surfaces as an empty range from the lookup side.
    pub fn parse_prefix_only(&self, text: &str) -> Option<ClassPrefix> {
        let caps = self.prefix_only.captures(text)?;
        Some(ClassPrefix {
            level: caps["lvl"].parse().ok()?,
            program: caps["prog"].to_uppercase(),
        })
    }

    /// The entire trimmed text is exactly a full class code with an
    /// allow-listed program.
    pub fn is_bare_full_code(&self, text: &str) -> bool {
        self.bare_full.is_match(text) && self.parse_full(text).is_some()
    }

    /// Whether the text contains a class-code-shaped substring anywhere,
    /// allow-listed or not. Used to suppress rules that only make sense
    /// for messages without any concrete class reference.
    pub fn contains_code_shape(&self, text: &str) -> bool {
        self.full.is_match(text)
    }
}

impl Default for ClassCodeParser {
    fn default() -> Self {
        Self::new()
    }
}
