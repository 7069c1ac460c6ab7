//! Enrollment import rows for one semester and cohort.

use sace_model::{EnrollmentRow, ImportConfig, Semester};
use tracing::{trace, warn};

use crate::codes::decode_class_code;
use crate::join::EnrollmentJoinRow;
use crate::pipeline::MalformedCode;
use crate::rules::{ClassGroup, enrollment_results_due, sequence_class_numbers};

/// Builds enrollment rows from joined rows of a single cohort.
///
/// Stage, SACE code and credits come from the BOS class code. Rows whose
/// stage is not 1 or 2 are dropped; rows with an undecodable BOS class code
/// are dropped and recorded in `malformed`. Class Numbers are sequenced over
/// the surviving rows in join order.
pub fn build_enrollment_rows(
    joined: &[EnrollmentJoinRow],
    semester: Semester,
    config: &ImportConfig,
    malformed: &mut Vec<MalformedCode>,
) -> Vec<EnrollmentRow> {
    let mut rows = Vec::with_capacity(joined.len());
    for row in joined {
        let Some(encoded) = row.bos_class_code.as_deref() else {
            continue;
        };
        let decoded = match decode_class_code(encoded) {
            Ok(decoded) => decoded,
            Err(error) => {
                warn!(class_code = %row.class_code, %error, "dropping enrollment");
                malformed.push(MalformedCode::new(&row.class_code, encoded));
                continue;
            }
        };
        let Some(stage) = decoded.stage() else {
            trace!(class_code = %row.class_code, "enrollment stage not imported");
            continue;
        };
        rows.push(EnrollmentRow {
            school_number: config.school_number,
            registration_number: row.registration_number.clone().unwrap_or_default(),
            student_code: row.student_code.clone(),
            year: config.year,
            semester,
            stage,
            sace_code: decoded.sace_code,
            credits: decoded.credits,
            results_due: enrollment_results_due(&row.class_code, semester),
            class_number: 0,
            school_class_code: row.class_code.clone(),
        });
    }

    let numbers = sequence_class_numbers(rows.iter().map(|row| {
        (
            ClassGroup {
                stage: row.stage,
                sace_code: &row.sace_code,
                credits: &row.credits,
            },
            row.school_class_code.as_str(),
        )
    }));
    for (row, number) in rows.iter_mut().zip(numbers) {
        row.class_number = number;
    }
    rows
}
