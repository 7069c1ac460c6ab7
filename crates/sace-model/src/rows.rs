//! Denormalized rows of the SACE import files.

use serde::{Deserialize, Serialize};

use crate::enums::{ResultsDue, Semester, Stage};

/// One student enrolled in one SACE class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentRow {
    pub school_number: u32,
    pub registration_number: String,
    pub student_code: String,
    pub year: i32,
    pub semester: Semester,
    pub stage: Stage,
    pub sace_code: String,
    pub credits: String,
    pub results_due: ResultsDue,
    pub class_number: u32,
    pub school_class_code: String,
}

/// One teacher teaching one SACE class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRow {
    pub school_number: u32,
    pub year: i32,
    pub stage: Stage,
    pub sace_code: String,
    pub credits: String,
    pub class_number: u32,
    pub semester: Semester,
    pub teacher_code: String,
    pub school_class_code: String,
    pub results_due: ResultsDue,
}

/// One teacher of at least one SACE class.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeacherRow {
    pub school_number: u32,
    pub teacher_code: String,
    pub family_name: String,
    pub initials: String,
    pub title: String,
    pub given_names: String,
}
