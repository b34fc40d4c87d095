//! Class-code value types.
//!
//! A class code identifies a course section: level digit, 2-letter
//! program, 2-digit number, optional section suffix (`3KA11A`). The
//! parser lives in `baak-intent`; these types only hold validated parts.

use serde::{Deserialize, Serialize};

/// A validated class code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassCode {
    /// Level digit, 1-4.
    pub level: u8,
    /// Program code, uppercase, member of the allow-list.
    pub program: String,
    /// Class number, rendered zero-padded to 2 digits.
    pub number: u8,
    /// Optional section suffix, A-E.
    pub suffix: Option<char>,
}

impl ClassCode {
    /// Code without the section suffix. Exam schedules are keyed on this.
    pub fn base(&self) -> String {
        format!("{}{}{:02}", self.level, self.program, self.number)
    }

    /// Code with the section suffix when present. Course schedules are
    /// keyed on this.
    pub fn full(&self) -> String {
        match self.suffix {
            Some(s) => format!("{}{}{:02}{}", self.level, self.program, self.number, s),
            None => self.base(),
        }
    }

    /// The level+program prefix of this code.
    pub fn prefix(&self) -> ClassPrefix {
        ClassPrefix {
            level: self.level,
            program: self.program.clone(),
        }
    }
}

impl std::fmt::Display for ClassCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full())
    }
}

/// A class code without the numeric/suffix part (`4KB`). Only meaningful
/// as a complete utterance; the classifier turns it into a range request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassPrefix {
    pub level: u8,
    pub program: String,
}

impl std::fmt::Display for ClassPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.level, self.program)
    }
}
