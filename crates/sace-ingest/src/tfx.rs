//! Timetable Development (tfx) export loading.
//!
//! A tfx file is a JSON document with `ClassNames`, `Timetable`, `Teachers`
//! and `Students` collections. Only the fields used for SACE imports are
//! read; everything else in the export is ignored.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use sace_model::{
    ClassName, ClassNameId, SaceError, SemesterRecords, Student, Teacher, TeacherId,
    TimetableSlot,
};

use crate::error::{IngestError, Result};

/// A JSON scalar the timetabler writes either quoted or bare.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Text(value) => value,
            Scalar::Integer(value) => value.to_string(),
            Scalar::Float(value) => value.to_string(),
            Scalar::Bool(value) => value.to_string(),
        }
    }
}

/// Null, missing and blank values all mean "absent".
fn optional_text(value: Option<Scalar>) -> Option<String> {
    value
        .map(Scalar::into_text)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

#[derive(Debug, Deserialize)]
struct TfxFile {
    #[serde(rename = "ClassNames")]
    class_names: Vec<RawClassName>,
    #[serde(rename = "Timetable")]
    timetable: Vec<RawTimetableSlot>,
    #[serde(rename = "Teachers")]
    teachers: Vec<RawTeacher>,
    #[serde(rename = "Students")]
    students: Vec<RawStudent>,
}

// Required fields are read as optional so a missing or null value is
// reported by name instead of as an untagged-enum mismatch.

#[derive(Debug, Deserialize)]
struct RawClassName {
    #[serde(rename = "ClassNameID", default)]
    class_name_id: Option<Scalar>,
    #[serde(rename = "Code", default)]
    code: Option<Scalar>,
    #[serde(rename = "SubjectCode", default)]
    subject_code: Option<Scalar>,
    #[serde(rename = "BOSClassCode1", default)]
    bos_class_code: Option<Scalar>,
}

#[derive(Debug, Deserialize)]
struct RawTimetableSlot {
    #[serde(rename = "ClassNameID", default)]
    class_name_id: Option<Scalar>,
    #[serde(rename = "TeacherID", default)]
    teacher_id: Option<Scalar>,
}

#[derive(Debug, Deserialize)]
struct RawTeacher {
    #[serde(rename = "TeacherID", default)]
    teacher_id: Option<Scalar>,
    #[serde(rename = "Code", default)]
    code: Option<Scalar>,
    #[serde(rename = "LastName", default)]
    last_name: Option<Scalar>,
    #[serde(rename = "FirstName", default)]
    first_name: Option<Scalar>,
    #[serde(rename = "Salutation", default)]
    salutation: Option<Scalar>,
}

#[derive(Debug, Deserialize)]
struct RawStudent {
    #[serde(rename = "Code", default)]
    code: Option<Scalar>,
    #[serde(rename = "BOSCode", default)]
    bos_code: Option<Scalar>,
    /// Null and missing both mean the student has no lessons.
    #[serde(rename = "StudentLessons", default)]
    student_lessons: Option<Vec<RawLesson>>,
}

#[derive(Debug, Deserialize)]
struct RawLesson {
    #[serde(rename = "ClassCode", default)]
    class_code: Option<Scalar>,
}

/// Text of a field that must be present; may still be blank.
fn required(value: Option<Scalar>, field: &'static str) -> std::result::Result<String, SaceError> {
    value
        .map(Scalar::into_text)
        .ok_or(SaceError::MissingField { field })
}

fn invalid(collection: &'static str, index: usize) -> impl FnOnce(SaceError) -> IngestError {
    move |source| IngestError::InvalidRecord {
        collection,
        index,
        source,
    }
}

/// Parses a tfx document into typed semester records.
///
/// `origin` names the document in error messages.
pub fn parse_semester(origin: &str, json: &str) -> Result<SemesterRecords> {
    let file: TfxFile =
        serde_json::from_str(json.trim_start_matches('\u{feff}')).map_err(|source| {
            IngestError::Json {
                origin: origin.to_string(),
                source,
            }
        })?;

    let mut class_names = Vec::with_capacity(file.class_names.len());
    for (index, raw) in file.class_names.into_iter().enumerate() {
        let class_name_id = required(raw.class_name_id, "ClassNameID")
            .and_then(ClassNameId::new)
            .map_err(invalid("ClassNames", index))?;
        let class_code = required(raw.code, "Code").map_err(invalid("ClassNames", index))?;
        class_names.push(ClassName {
            class_name_id,
            class_code: class_code.trim().to_string(),
            subject_code: optional_text(raw.subject_code),
            bos_class_code: optional_text(raw.bos_class_code),
        });
    }

    let mut timetable = Vec::with_capacity(file.timetable.len());
    for (index, raw) in file.timetable.into_iter().enumerate() {
        timetable.push(TimetableSlot {
            class_name_id: required(raw.class_name_id, "ClassNameID")
                .and_then(ClassNameId::new)
                .map_err(invalid("Timetable", index))?,
            teacher_id: required(raw.teacher_id, "TeacherID")
                .and_then(TeacherId::new)
                .map_err(invalid("Timetable", index))?,
        });
    }

    let mut teachers = Vec::with_capacity(file.teachers.len());
    for (index, raw) in file.teachers.into_iter().enumerate() {
        teachers.push(Teacher {
            teacher_id: required(raw.teacher_id, "TeacherID")
                .and_then(TeacherId::new)
                .map_err(invalid("Teachers", index))?,
            code: optional_text(raw.code),
            family_name: required(raw.last_name, "LastName").map_err(invalid("Teachers", index))?,
            given_names: required(raw.first_name, "FirstName")
                .map_err(invalid("Teachers", index))?,
            salutation: optional_text(raw.salutation),
        });
    }

    let mut students = Vec::with_capacity(file.students.len());
    for (index, raw) in file.students.into_iter().enumerate() {
        let code = required(raw.code, "Code").map_err(invalid("Students", index))?;
        students.push(Student {
            code: code.trim().to_string(),
            registration_number: optional_text(raw.bos_code),
            lessons: raw
                .student_lessons
                .unwrap_or_default()
                .into_iter()
                .filter_map(|lesson| optional_text(lesson.class_code))
                .collect(),
        });
    }

    debug!(
        origin,
        class_names = class_names.len(),
        timetable_slots = timetable.len(),
        teachers = teachers.len(),
        students = students.len(),
        "parsed timetable"
    );

    Ok(SemesterRecords {
        class_names,
        timetable,
        teachers,
        students,
    })
}

/// Reads and parses one semester's tfx file.
pub fn load_semester(path: &Path) -> Result<SemesterRecords> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let json = std::fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_semester(&path.display().to_string(), &json)?;
    info!(
        path = %path.display(),
        students = records.students.len(),
        "loaded timetable"
    );
    Ok(records)
}
