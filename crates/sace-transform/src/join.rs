//! Relational joins over one semester's records.
//!
//! Joins are equality joins that keep multiplicity: a key matching several
//! right-hand rows emits one output row per match. Output order follows the
//! left-hand side, then the right-hand side's insertion order within a key.

use std::collections::BTreeMap;

use sace_model::{ClassNameId, SemesterRecords, Student, Teacher, TeacherId};
use tracing::debug;

use crate::dedupe::{dedupe_by_key, dedupe_rows};

/// Student lesson joined through class, timetable and teacher.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct EnrollmentJoinRow {
    pub student_code: String,
    pub registration_number: Option<String>,
    pub class_code: String,
    pub class_name_id: ClassNameId,
    pub bos_class_code: Option<String>,
    pub teacher_id: TeacherId,
    /// Timetabler short code of the teacher.
    pub teacher_code: Option<String>,
}

/// Teacher left-joined to timetable slots and class names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassJoinRow {
    pub teacher: Teacher,
    pub class_name_id: Option<ClassNameId>,
    pub class_code: Option<String>,
    pub subject_code: Option<String>,
    pub bos_class_code: Option<String>,
}

/// Groups items by key; each group keeps insertion order.
fn index_by<'a, T, K, F>(items: &'a [T], key: F) -> BTreeMap<K, Vec<&'a T>>
where
    K: Ord,
    F: Fn(&'a T) -> K,
{
    let mut index: BTreeMap<K, Vec<&'a T>> = BTreeMap::new();
    for item in items {
        index.entry(key(item)).or_default().push(item);
    }
    index
}

/// Explodes student lessons and inner-joins them on
/// `class code → class name id → teacher id`.
///
/// Timetables hold one slot per period, so exact duplicate rows are
/// collapsed, keeping the first.
pub fn join_enrollments(records: &SemesterRecords) -> Vec<EnrollmentJoinRow> {
    let classes_by_code = index_by(&records.class_names, |class| class.class_code.as_str());
    let slots_by_class = index_by(&records.timetable, |slot| &slot.class_name_id);
    let teachers_by_id = index_by(&records.teachers, |teacher| &teacher.teacher_id);

    let mut rows = Vec::new();
    for link in records.students.iter().flat_map(Student::lesson_links) {
        let Some(classes) = classes_by_code.get(link.class_code.as_str()) else {
            continue;
        };
        for class in classes {
            let Some(slots) = slots_by_class.get(&class.class_name_id) else {
                continue;
            };
            for slot in slots {
                let Some(teachers) = teachers_by_id.get(&slot.teacher_id) else {
                    continue;
                };
                for teacher in teachers {
                    rows.push(EnrollmentJoinRow {
                        student_code: link.student_code.clone(),
                        registration_number: link.registration_number.clone(),
                        class_code: link.class_code.clone(),
                        class_name_id: class.class_name_id.clone(),
                        bos_class_code: class.bos_class_code.clone(),
                        teacher_id: teacher.teacher_id.clone(),
                        teacher_code: teacher.code.clone(),
                    });
                }
            }
        }
    }
    let joined = rows.len();
    let rows = dedupe_rows(rows);
    debug!(joined, kept = rows.len(), "joined enrollments");
    rows
}

/// Left-joins `teachers` to the semester's timetable on teacher id, then to
/// class names on class name id, one row per (teacher, class name).
///
/// Teachers without slots and slots without a class name survive with
/// absent class fields.
pub fn join_classes(teachers: &[Teacher], records: &SemesterRecords) -> Vec<ClassJoinRow> {
    let slots_by_teacher = index_by(&records.timetable, |slot| &slot.teacher_id);
    let classes_by_id = index_by(&records.class_names, |class| &class.class_name_id);

    let mut rows = Vec::new();
    for teacher in teachers {
        let Some(slots) = slots_by_teacher.get(&teacher.teacher_id) else {
            rows.push(ClassJoinRow {
                teacher: teacher.clone(),
                class_name_id: None,
                class_code: None,
                subject_code: None,
                bos_class_code: None,
            });
            continue;
        };
        for slot in slots {
            match classes_by_id.get(&slot.class_name_id) {
                Some(classes) => {
                    for class in classes {
                        rows.push(ClassJoinRow {
                            teacher: teacher.clone(),
                            class_name_id: Some(class.class_name_id.clone()),
                            class_code: Some(class.class_code.clone()),
                            subject_code: class.subject_code.clone(),
                            bos_class_code: class.bos_class_code.clone(),
                        });
                    }
                }
                None => rows.push(ClassJoinRow {
                    teacher: teacher.clone(),
                    class_name_id: Some(slot.class_name_id.clone()),
                    class_code: None,
                    subject_code: None,
                    bos_class_code: None,
                }),
            }
        }
    }
    let joined = rows.len();
    let rows = dedupe_by_key(rows, |row| {
        (row.teacher.teacher_id.clone(), row.class_name_id.clone())
    });
    debug!(joined, kept = rows.len(), "joined classes");
    rows
}
