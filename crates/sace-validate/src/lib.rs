//! Diagnostics over assembled import rows.
//!
//! Checks never block output. They collect [`Issue`]s into a
//! [`ValidationReport`] and, for classes claimed by several teachers, the
//! offending rows so they can be written out for review.

mod checks;

pub use checks::{
    DuplicateTeachers, check_code_lengths, find_duplicate_teachers, malformed_issues,
};

use sace_model::{ClassRow, Issue, ValidationReport};
use sace_transform::ImportOutput;
use tracing::{info, warn};

/// Outcome of validating one import run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub report: ValidationReport,
    /// Class rows sharing a school class code with another teacher's row.
    pub duplicate_classes: Vec<ClassRow>,
}

/// Runs every check over the assembled output.
pub fn validate_import(output: &ImportOutput) -> ValidationOutcome {
    let classes: Vec<&ClassRow> = output.classes.iter().collect();

    let duplicates = find_duplicate_teachers(classes.iter().copied());
    let mut issues: Vec<Issue> = duplicates.issues;
    issues.extend(check_code_lengths(
        classes.iter().map(|row| row.school_class_code.as_str()),
    ));
    issues.extend(malformed_issues(&output.malformed));

    for issue in &issues {
        warn!(code = issue.code(), class = issue.school_class_code(), "{}", issue.message());
    }
    let report = ValidationReport { issues };
    info!(
        errors = report.error_count(),
        warnings = report.warning_count(),
        duplicate_rows = duplicates.rows.len(),
        "validation complete"
    );

    ValidationOutcome {
        report,
        duplicate_classes: duplicates.rows,
    }
}
