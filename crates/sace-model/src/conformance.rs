//! Diagnostics raised while building import files.
//!
//! None of these block output; they are reported so the timetable can be
//! corrected before the files are uploaded.

use serde::{Deserialize, Serialize};

/// Longest school class code the import system accepts.
pub const MAX_SCHOOL_CLASS_CODE_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Upload will be rejected until fixed.
    Error,
    /// Should review.
    Warning,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }
}

/// Diagnostic issue - each variant carries only its needed data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Issue {
    /// More than one teacher claims the same school class code.
    DuplicateTeacher {
        school_class_code: String,
        teacher_codes: Vec<String>,
    },
    /// School class code exceeds the import field width.
    CodeTooLong {
        school_class_code: String,
        length: usize,
        max: usize,
    },
    /// Encoded classification too short to decode; rows using it were dropped.
    MalformedClassCode { class_code: String, encoded: String },
}

impl Issue {
    pub fn code(&self) -> &'static str {
        match self {
            Issue::DuplicateTeacher { .. } => "DUPLICATE_TEACHER",
            Issue::CodeTooLong { .. } => "CODE_TOO_LONG",
            Issue::MalformedClassCode { .. } => "MALFORMED_CLASS_CODE",
        }
    }

    /// School class code the issue is about.
    pub fn school_class_code(&self) -> &str {
        match self {
            Issue::DuplicateTeacher {
                school_class_code, ..
            } => school_class_code,
            Issue::CodeTooLong {
                school_class_code, ..
            } => school_class_code,
            Issue::MalformedClassCode { class_code, .. } => class_code,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Issue::CodeTooLong { .. } => Severity::Error,
            Issue::DuplicateTeacher { .. } | Issue::MalformedClassCode { .. } => {
                Severity::Warning
            }
        }
    }

    pub fn message(&self) -> String {
        match self {
            Issue::DuplicateTeacher {
                school_class_code,
                teacher_codes,
            } => format!(
                "class {school_class_code} has {} teachers: {}",
                teacher_codes.len(),
                teacher_codes.join(", ")
            ),
            Issue::CodeTooLong {
                school_class_code,
                length,
                max,
            } => format!("class code {school_class_code} is {length} characters (max {max})"),
            Issue::MalformedClassCode {
                class_code,
                encoded,
            } => format!("class {class_code} has undecodable classification '{encoded}'"),
        }
    }
}

/// All diagnostics of one import run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity() == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity() == Severity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// True when no class code would be rejected by the import system.
    pub fn is_clear_to_upload(&self) -> bool {
        !self
            .issues
            .iter()
            .any(|issue| matches!(issue, Issue::CodeTooLong { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts_by_severity() {
        let report = ValidationReport {
            issues: vec![
                Issue::CodeTooLong {
                    school_class_code: "12ENGLISH01".to_string(),
                    length: 11,
                    max: MAX_SCHOOL_CLASS_CODE_LEN,
                },
                Issue::DuplicateTeacher {
                    school_class_code: "11MAT1".to_string(),
                    teacher_codes: vec!["JaneD".to_string(), "JohnS".to_string()],
                },
            ],
        };
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert!(report.has_errors());
        assert!(!report.is_clear_to_upload());
    }

    #[test]
    fn duplicate_message_lists_teachers() {
        let issue = Issue::DuplicateTeacher {
            school_class_code: "11MAT1".to_string(),
            teacher_codes: vec!["JaneD".to_string(), "JohnS".to_string()],
        };
        assert_eq!(issue.message(), "class 11MAT1 has 2 teachers: JaneD, JohnS");
        assert_eq!(issue.school_class_code(), "11MAT1");
    }
}
