//! Cohort partitioning and stage/semester slicing.

use sace_model::{ClassRow, Cohort, Cohorts, EnrollmentRow, Semester, Stage};

use crate::join::{ClassJoinRow, EnrollmentJoinRow};

/// Rows carrying an encoded SACE classification.
pub trait Classified {
    fn bos_class_code(&self) -> Option<&str>;

    /// Cohort of the row; an absent classification counts as mainstream.
    fn cohort(&self) -> Cohort {
        Cohort::of_bos_class_code(self.bos_class_code().unwrap_or_default())
    }
}

impl Classified for EnrollmentJoinRow {
    fn bos_class_code(&self) -> Option<&str> {
        self.bos_class_code.as_deref()
    }
}

impl Classified for ClassJoinRow {
    fn bos_class_code(&self) -> Option<&str> {
        self.bos_class_code.as_deref()
    }
}

/// Splits rows into mainstream and SWD by the SWD marker.
///
/// Every row lands in exactly one side; order within a side is kept.
pub fn split_by_cohort<T: Classified>(rows: Vec<T>) -> Cohorts<T> {
    let mut cohorts = Cohorts::default();
    for row in rows {
        let cohort = row.cohort();
        cohorts.get_mut(cohort).push(row);
    }
    cohorts
}

/// Class rows of one stage, optionally limited to one semester.
pub fn select_classes(rows: &[ClassRow], stage: Stage, semester: Option<Semester>) -> Vec<ClassRow> {
    rows.iter()
        .filter(|row| row.stage == stage)
        .filter(|row| semester.is_none_or(|semester| row.semester == semester))
        .cloned()
        .collect()
}

/// Enrollment rows of one stage and semester.
pub fn select_enrollments(
    rows: &[EnrollmentRow],
    stage: Stage,
    semester: Semester,
) -> Vec<EnrollmentRow> {
    rows.iter()
        .filter(|row| row.stage == stage && row.semester == semester)
        .cloned()
        .collect()
}
