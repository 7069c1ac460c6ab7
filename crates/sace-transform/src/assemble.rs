//! Merging of both semesters' row sets.

use sace_model::{ClassRow, Cohort, Cohorts, EnrollmentRow};

use crate::dedupe::dedupe_by_key;

/// Semester 1 classes then semester 2 classes, unique on
/// (teacher code, school class code). A class running all year keeps its
/// semester 1 row.
pub fn assemble_classes(semester1: &[ClassRow], semester2: &[ClassRow]) -> Vec<ClassRow> {
    let combined: Vec<ClassRow> = semester1.iter().chain(semester2).cloned().collect();
    dedupe_by_key(combined, |row| {
        (row.teacher_code.clone(), row.school_class_code.clone())
    })
}

/// Semester 1 enrollments then semester 2 enrollments.
///
/// Not deduplicated: a student in a class in both semesters has one row per
/// semester.
pub fn assemble_enrollments(
    semester1: &[EnrollmentRow],
    semester2: &[EnrollmentRow],
) -> Vec<EnrollmentRow> {
    semester1.iter().chain(semester2).cloned().collect()
}

/// Applies `assemble` to each cohort of two semesters.
pub fn assemble_cohorts<T, F>(semester1: &Cohorts<T>, semester2: &Cohorts<T>, assemble: F) -> Cohorts<T>
where
    F: Fn(&[T], &[T]) -> Vec<T>,
{
    let mut assembled = Cohorts::default();
    for cohort in Cohort::ALL {
        *assembled.get_mut(cohort) = assemble(semester1.get(cohort), semester2.get(cohort));
    }
    assembled
}
