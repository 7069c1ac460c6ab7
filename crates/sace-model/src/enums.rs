//! Type-safe enumerations for SACE import fields.
//!
//! The timetable export encodes these as characters inside class codes or
//! as plain integers; the import files render them back as text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Substring marking a class as belonging to the Students With Disabilities cohort.
pub const SWD_MARKER: &str = "SWD";

/// SACE stage of a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    One,
    Two,
}

impl Stage {
    /// Parses the leading stage character of an encoded class code.
    ///
    /// Only stages 1 and 2 are imported; anything else is `None`.
    pub fn from_code_char(ch: char) -> Option<Self> {
        match ch {
            '1' => Some(Self::One),
            '2' => Some(Self::Two),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semester a timetable export belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Semester {
    First,
    Second,
}

impl Semester {
    pub const ALL: [Semester; 2] = [Semester::First, Semester::Second];

    pub fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Reporting period in which results are due to the certifying body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultsDue {
    /// Mid-year ("J").
    MidYear,
    /// End of year ("D").
    EndOfYear,
}

impl ResultsDue {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MidYear => "J",
            Self::EndOfYear => "D",
        }
    }
}

impl fmt::Display for ResultsDue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Student cohort, decided by the SACE classification of a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Cohort {
    Mainstream,
    Swd,
}

impl Cohort {
    pub const ALL: [Cohort; 2] = [Cohort::Mainstream, Cohort::Swd];

    /// Classifies a BOS class code by the SWD marker substring.
    pub fn of_bos_class_code(bos_class_code: &str) -> Self {
        if bos_class_code.contains(SWD_MARKER) {
            Self::Swd
        } else {
            Self::Mainstream
        }
    }

    pub fn is_swd(self) -> bool {
        matches!(self, Self::Swd)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Mainstream => "mainstream",
            Self::Swd => "SWD",
        }
    }
}

impl fmt::Display for Cohort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A pair of row sets, one per cohort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cohorts<T> {
    pub mainstream: Vec<T>,
    pub swd: Vec<T>,
}

impl<T> Default for Cohorts<T> {
    fn default() -> Self {
        Self {
            mainstream: Vec::new(),
            swd: Vec::new(),
        }
    }
}

impl<T> Cohorts<T> {
    pub fn get(&self, cohort: Cohort) -> &[T] {
        match cohort {
            Cohort::Mainstream => &self.mainstream,
            Cohort::Swd => &self.swd,
        }
    }

    pub fn get_mut(&mut self, cohort: Cohort) -> &mut Vec<T> {
        match cohort {
            Cohort::Mainstream => &mut self.mainstream,
            Cohort::Swd => &mut self.swd,
        }
    }

    pub fn len(&self) -> usize {
        self.mainstream.len() + self.swd.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates mainstream rows first, then SWD rows.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.mainstream.iter().chain(self.swd.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_parses_only_one_and_two() {
        assert_eq!(Stage::from_code_char('1'), Some(Stage::One));
        assert_eq!(Stage::from_code_char('2'), Some(Stage::Two));
        assert_eq!(Stage::from_code_char('3'), None);
        assert_eq!(Stage::from_code_char('X'), None);
    }

    #[test]
    fn cohort_uses_swd_substring() {
        assert_eq!(Cohort::of_bos_class_code("1ENG10"), Cohort::Mainstream);
        assert_eq!(Cohort::of_bos_class_code("1ENG10SWD"), Cohort::Swd);
        assert_eq!(Cohort::of_bos_class_code("swd"), Cohort::Mainstream);
    }

    #[test]
    fn results_due_renders_letters() {
        assert_eq!(ResultsDue::MidYear.to_string(), "J");
        assert_eq!(ResultsDue::EndOfYear.to_string(), "D");
    }
}
