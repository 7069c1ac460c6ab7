//! Class import rows for one semester and cohort.

use std::collections::BTreeMap;

use sace_model::{ClassRow, Cohort, EnrollmentRow, ImportConfig, Semester};
use tracing::{debug, trace, warn};

use crate::codes::{decode_class_code, derive_teacher_code};
use crate::dedupe::dedupe_by_key;
use crate::filters::is_pastoral_care;
use crate::join::ClassJoinRow;
use crate::pipeline::MalformedCode;
use crate::rules::class_results_due;

/// First Class Number seen for each school class code.
pub fn class_numbers_by_code(enrollments: &[EnrollmentRow]) -> BTreeMap<&str, u32> {
    let mut numbers = BTreeMap::new();
    for row in enrollments {
        numbers
            .entry(row.school_class_code.as_str())
            .or_insert(row.class_number);
    }
    numbers
}

/// Builds class rows from joined rows of a single cohort.
///
/// `joined` is expected to hold only rows passing
/// [`is_sace_class`](crate::filters::is_sace_class); rows missing a code are
/// skipped regardless. Stage, SACE code and credits come from the subject code. Classes outside
/// stages 1 and 2, pastoral care groups and classes without enrolled
/// students (no Class Number to borrow from `enrollments`) are dropped.
/// Rows are unique on (teacher code, school class code), first wins.
pub fn build_class_rows(
    joined: &[ClassJoinRow],
    semester: Semester,
    cohort: Cohort,
    config: &ImportConfig,
    enrollments: &[EnrollmentRow],
    malformed: &mut Vec<MalformedCode>,
) -> Vec<ClassRow> {
    let class_numbers = class_numbers_by_code(enrollments);
    let mut rows = Vec::with_capacity(joined.len());
    let mut unnumbered = 0usize;
    for row in joined {
        let (Some(encoded), Some(class_code)) = (row.subject_code.as_deref(), row.class_code.as_deref())
        else {
            continue;
        };
        let decoded = match decode_class_code(encoded) {
            Ok(decoded) => decoded,
            Err(error) => {
                warn!(class_code, %error, "dropping class");
                malformed.push(MalformedCode::new(class_code, encoded));
                continue;
            }
        };
        let Some(stage) = decoded.stage() else {
            trace!(class_code, "class stage not imported");
            continue;
        };
        if is_pastoral_care(class_code) {
            trace!(class_code, "skipping pastoral care group");
            continue;
        }
        let Some(&class_number) = class_numbers.get(class_code) else {
            unnumbered += 1;
            continue;
        };
        let results_due = class_results_due(
            &decoded.credits,
            stage,
            semester,
            &decoded.sace_code,
            cohort.is_swd(),
        );
        rows.push(ClassRow {
            school_number: config.school_number,
            year: config.year,
            stage,
            sace_code: decoded.sace_code,
            credits: decoded.credits,
            class_number,
            semester,
            teacher_code: derive_teacher_code(&row.teacher.given_names, &row.teacher.family_name),
            school_class_code: class_code.to_string(),
            results_due,
        });
    }
    if unnumbered > 0 {
        debug!(
            %cohort,
            %semester,
            unnumbered,
            "classes without enrollments dropped"
        );
    }
    dedupe_by_key(rows, |row| {
        (row.teacher_code.clone(), row.school_class_code.clone())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sace_model::{ClassNameId, ResultsDue, Stage, Teacher, TeacherId};

    fn joined(class_code: &str, subject_code: Option<&str>) -> ClassJoinRow {
        ClassJoinRow {
            teacher: Teacher {
                teacher_id: TeacherId::new("1").unwrap(),
                code: None,
                family_name: "Doe".to_string(),
                given_names: "Jane".to_string(),
                salutation: Some("Ms".to_string()),
            },
            class_name_id: Some(ClassNameId::new("1").unwrap()),
            class_code: Some(class_code.to_string()),
            subject_code: subject_code.map(str::to_string),
            bos_class_code: subject_code.map(str::to_string),
        }
    }

    fn enrolled(class_code: &str, class_number: u32) -> EnrollmentRow {
        EnrollmentRow {
            school_number: 245,
            registration_number: "123456A".to_string(),
            student_code: "S001".to_string(),
            year: 2025,
            semester: Semester::First,
            stage: Stage::One,
            sace_code: "ENG".to_string(),
            credits: "10".to_string(),
            results_due: ResultsDue::MidYear,
            class_number,
            school_class_code: class_code.to_string(),
        }
    }

    fn build(joined: &[ClassJoinRow], enrollments: &[EnrollmentRow]) -> (Vec<ClassRow>, Vec<MalformedCode>) {
        let mut malformed = Vec::new();
        let rows = build_class_rows(
            joined,
            Semester::First,
            Cohort::Mainstream,
            &ImportConfig::new(2025, 245),
            enrollments,
            &mut malformed,
        );
        (rows, malformed)
    }

    #[test]
    fn class_borrows_number_from_enrollments() {
        let (rows, malformed) = build(&[joined("11ENG1", Some("1ENG10"))], &[enrolled("11ENG1", 3)]);
        assert!(malformed.is_empty());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].class_number, 3);
        assert_eq!(rows[0].teacher_code, "JaneD");
        assert_eq!(rows[0].results_due, ResultsDue::MidYear);
    }

    #[test]
    fn rows_without_subject_or_enrollments_are_dropped() {
        let rows = [
            joined("11ENG1", None),
            joined("11ENG2", Some("1ENG10")),
            joined("11Care1", Some("1PCG10")),
        ];
        let enrollments = [enrolled("11ENG1", 1), enrolled("11Care1", 1)];
        let (rows, malformed) = build(&rows, &enrollments);
        assert!(rows.is_empty());
        assert!(malformed.is_empty());
    }

    #[test]
    fn undecodable_subject_is_reported() {
        let (rows, malformed) = build(&[joined("11XX1", Some("1X"))], &[enrolled("11XX1", 1)]);
        assert!(rows.is_empty());
        assert_eq!(malformed, vec![MalformedCode::new("11XX1", "1X")]);
    }
}
