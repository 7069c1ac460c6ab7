//! Column layouts of the import file formats.
//!
//! Constant columns ("T", "E", "N") and columns the school never fills are
//! written here so the row types only carry derived data.

use sace_model::{ClassRow, EnrollmentRow, TeacherRow};

/// A row type that serializes to one line of an import file.
pub trait ImportRecord {
    /// Header line, in file order.
    const HEADERS: &'static [&'static str];

    /// Field values aligned with [`Self::HEADERS`].
    fn fields(&self) -> Vec<String>;
}

pub const TEACHER_TYPE: &str = "T";
pub const ENROLMENT_STATUS: &str = "E";
pub const REPEAT_INDICATOR: &str = "N";

impl ImportRecord for TeacherRow {
    const HEADERS: &'static [&'static str] = &[
        "Contact School Number",
        "Teacher Code",
        "Family Name",
        "Initials",
        "Title",
        "Type",
        "Teachers Registration Number",
        "Email Address",
        "Given Names",
        "Date of Birth",
        "Gender",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.school_number.to_string(),
            self.teacher_code.clone(),
            self.family_name.clone(),
            self.initials.clone(),
            self.title.clone(),
            TEACHER_TYPE.to_string(),
            String::new(),
            String::new(),
            self.given_names.clone(),
            String::new(),
            String::new(),
        ]
    }
}

impl ImportRecord for ClassRow {
    const HEADERS: &'static [&'static str] = &[
        "Contact School Number",
        "Year",
        "Stage",
        "SACE Code",
        "Credits",
        "Class Number",
        "Program Variant",
        "Semester",
        "Teacher Code",
        "School Class Code",
        "Results Due",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.school_number.to_string(),
            self.year.to_string(),
            self.stage.to_string(),
            self.sace_code.clone(),
            self.credits.clone(),
            self.class_number.to_string(),
            String::new(),
            self.semester.to_string(),
            self.teacher_code.clone(),
            self.school_class_code.clone(),
            self.results_due.to_string(),
        ]
    }
}

impl ImportRecord for EnrollmentRow {
    const HEADERS: &'static [&'static str] = &[
        "Contact School Number",
        "Registration Number",
        "Student Code",
        "Year",
        "Semester",
        "Stage",
        "SACE Code",
        "Credits",
        "Results Due",
        "Enrolment Number",
        "Program Variant",
        "Teaching School Number",
        "Assessment School Number",
        "Enrolment Status",
        "Repeat Indicator",
        "Class Number",
        "School Class Code",
        "Stage 1 Grade",
        "Partial Credits",
        "ED ID",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.school_number.to_string(),
            self.registration_number.clone(),
            self.student_code.clone(),
            self.year.to_string(),
            self.semester.to_string(),
            self.stage.to_string(),
            self.sace_code.clone(),
            self.credits.clone(),
            self.results_due.to_string(),
            String::new(),
            String::new(),
            self.school_number.to_string(),
            self.school_number.to_string(),
            ENROLMENT_STATUS.to_string(),
            REPEAT_INDICATOR.to_string(),
            self.class_number.to_string(),
            self.school_class_code.clone(),
            String::new(),
            String::new(),
            self.student_code.clone(),
        ]
    }
}
