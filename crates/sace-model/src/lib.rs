pub mod config;
pub mod conformance;
pub mod enums;
pub mod error;
pub mod ids;
pub mod records;
pub mod rows;

pub use config::ImportConfig;
pub use conformance::{Issue, MAX_SCHOOL_CLASS_CODE_LEN, Severity, ValidationReport};
pub use enums::{Cohort, Cohorts, ResultsDue, SWD_MARKER, Semester, Stage};
pub use error::{Result, SaceError};
pub use ids::{ClassNameId, TeacherId};
pub use records::{ClassName, SemesterRecords, Student, StudentLessonLink, Teacher, TimetableSlot};
pub use rows::{ClassRow, EnrollmentRow, TeacherRow};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cohorts_iterate_mainstream_first() {
        let cohorts = Cohorts {
            mainstream: vec![1, 2],
            swd: vec![3],
        };
        assert_eq!(cohorts.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(cohorts.get(Cohort::Swd), &[3]);
        assert_eq!(cohorts.len(), 3);
    }

    #[test]
    fn class_row_serializes() {
        let row = ClassRow {
            school_number: 245,
            year: 2025,
            stage: Stage::One,
            sace_code: "ENG".to_string(),
            credits: "10".to_string(),
            class_number: 1,
            semester: Semester::First,
            teacher_code: "JaneD".to_string(),
            school_class_code: "11ENG1".to_string(),
            results_due: ResultsDue::MidYear,
        };
        let json = serde_json::to_string(&row).expect("serialize row");
        let round: ClassRow = serde_json::from_str(&json).expect("deserialize row");
        assert_eq!(round, row);
    }
}
