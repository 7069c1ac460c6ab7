//! Teacher list and teacher import rows.

use std::collections::BTreeSet;

use sace_model::{ClassRow, ImportConfig, Teacher, TeacherRow};

use crate::codes::derive_teacher_code;
use crate::dedupe::dedupe_by_key;

/// Combines both semesters' teachers, semester 1 first, without duplicates.
pub fn combine_teachers(semester1: &[Teacher], semester2: &[Teacher]) -> Vec<Teacher> {
    let combined: Vec<Teacher> = semester1.iter().chain(semester2).cloned().collect();
    dedupe_by_key(combined, |teacher| {
        (
            teacher.teacher_id.clone(),
            teacher.code.clone(),
            teacher.family_name.clone(),
            teacher.given_names.clone(),
            teacher.salutation.clone(),
        )
    })
}

/// Import row for a teacher.
pub fn teacher_row(teacher: &Teacher, config: &ImportConfig) -> TeacherRow {
    TeacherRow {
        school_number: config.school_number,
        teacher_code: derive_teacher_code(&teacher.given_names, &teacher.family_name),
        family_name: teacher.family_name.clone(),
        initials: teacher.given_names.chars().take(1).collect(),
        title: teacher.salutation.clone().unwrap_or_default(),
        given_names: teacher.given_names.clone(),
    }
}

/// Teachers whose code appears on at least one class row, in teacher order.
pub fn sace_teacher_rows<'a, I>(
    teachers: &[Teacher],
    classes: I,
    config: &ImportConfig,
) -> Vec<TeacherRow>
where
    I: IntoIterator<Item = &'a ClassRow>,
{
    let teaching: BTreeSet<&str> = classes
        .into_iter()
        .map(|row| row.teacher_code.as_str())
        .collect();
    let rows: Vec<TeacherRow> = teachers
        .iter()
        .map(|teacher| teacher_row(teacher, config))
        .filter(|row| teaching.contains(row.teacher_code.as_str()))
        .collect();
    dedupe_by_key(rows, Clone::clone)
}
