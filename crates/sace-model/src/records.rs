//! Typed records of one semester's timetable export.

use serde::{Deserialize, Serialize};

use crate::ids::{ClassNameId, TeacherId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub teacher_id: TeacherId,
    /// Timetabler's own short code for the teacher (not used for import).
    pub code: Option<String>,
    pub family_name: String,
    pub given_names: String,
    pub salutation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassName {
    pub class_name_id: ClassNameId,
    /// School class code, e.g. `11ENG1A`.
    pub class_code: String,
    /// Encoded stage/subject/credits, used for class rows.
    pub subject_code: Option<String>,
    /// Encoded SACE classification; absent for non-SACE classes.
    pub bos_class_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableSlot {
    pub class_name_id: ClassNameId,
    pub teacher_id: TeacherId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub code: String,
    /// SACE registration number.
    pub registration_number: Option<String>,
    /// School class codes in the order the export lists them.
    pub lessons: Vec<String>,
}

/// One student enrolled in one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentLessonLink {
    pub student_code: String,
    pub registration_number: Option<String>,
    pub class_code: String,
}

/// All records of one semester's timetable export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemesterRecords {
    pub class_names: Vec<ClassName>,
    pub timetable: Vec<TimetableSlot>,
    pub teachers: Vec<Teacher>,
    pub students: Vec<Student>,
}

impl Student {
    /// Explodes the student's lessons into one link per class, in lesson order.
    pub fn lesson_links(&self) -> impl Iterator<Item = StudentLessonLink> + '_ {
        self.lessons.iter().map(|class_code| StudentLessonLink {
            student_code: self.code.clone(),
            registration_number: self.registration_number.clone(),
            class_code: class_code.clone(),
        })
    }
}
