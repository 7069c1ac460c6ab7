//! Classes claimed by more than one teacher.

use std::collections::BTreeMap;

use sace_model::{ClassRow, Issue};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateTeachers {
    /// Every row whose school class code appears on more than one row, in
    /// input order.
    pub rows: Vec<ClassRow>,
    /// One issue per shared code, in order of first appearance.
    pub issues: Vec<Issue>,
}

/// Finds school class codes shared by several class rows.
///
/// Rows are expected to be assembled already (unique per teacher and code),
/// so a repeated code means several teachers.
pub fn find_duplicate_teachers<'a, I>(rows: I) -> DuplicateTeachers
where
    I: IntoIterator<Item = &'a ClassRow>,
{
    let rows: Vec<&ClassRow> = rows.into_iter().collect();
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for row in &rows {
        *counts.entry(row.school_class_code.as_str()).or_default() += 1;
    }

    let mut duplicates = DuplicateTeachers::default();
    let mut teachers_by_code: Vec<(&str, Vec<String>)> = Vec::new();
    for row in rows {
        let code = row.school_class_code.as_str();
        if counts.get(code).copied().unwrap_or_default() < 2 {
            continue;
        }
        duplicates.rows.push(row.clone());
        match teachers_by_code.iter_mut().find(|(seen, _)| *seen == code) {
            Some((_, teachers)) => {
                if !teachers.contains(&row.teacher_code) {
                    teachers.push(row.teacher_code.clone());
                }
            }
            None => teachers_by_code.push((code, vec![row.teacher_code.clone()])),
        }
    }
    duplicates.issues = teachers_by_code
        .into_iter()
        .map(|(code, teacher_codes)| Issue::DuplicateTeacher {
            school_class_code: code.to_string(),
            teacher_codes,
        })
        .collect();
    duplicates
}
