//! Import pipeline: both semesters' records in, assembled import rows out.
//!
//! Each semester is joined and ruled on its own; the assembler then merges
//! the two. The run is deterministic: identical records give identical rows.

use sace_model::{
    ClassRow, Cohort, Cohorts, EnrollmentRow, ImportConfig, Semester, SemesterRecords, Teacher,
    TeacherRow,
};
use tracing::{info, info_span};

use crate::assemble::{assemble_classes, assemble_cohorts, assemble_enrollments};
use crate::classes::build_class_rows;
use crate::enrollments::build_enrollment_rows;
use crate::filters::{is_sace_class, is_sace_enrollment};
use crate::join::{join_classes, join_enrollments};
use crate::partition::split_by_cohort;
use crate::teachers::{combine_teachers, sace_teacher_rows};

/// A class whose encoded classification could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MalformedCode {
    pub class_code: String,
    pub encoded: String,
}

impl MalformedCode {
    pub fn new(class_code: &str, encoded: &str) -> Self {
        Self {
            class_code: class_code.to_string(),
            encoded: encoded.to_string(),
        }
    }
}

/// Rows derived from one semester's timetable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemesterOutput {
    pub semester: Semester,
    pub enrollments: Cohorts<EnrollmentRow>,
    /// Class rows before cross-semester deduplication.
    pub classes: Cohorts<ClassRow>,
    pub malformed: Vec<MalformedCode>,
}

/// Everything the file writer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutput {
    pub teachers: Vec<TeacherRow>,
    /// Both semesters, unique per (teacher code, school class code).
    pub classes: Cohorts<ClassRow>,
    /// Both semesters, semester 1 first.
    pub enrollments: Cohorts<EnrollmentRow>,
    /// Undecodable classifications, first occurrence of each.
    pub malformed: Vec<MalformedCode>,
}

/// Joins and rules one semester's records.
///
/// `teachers` is the combined teacher list of both semesters.
pub fn process_semester(
    records: &SemesterRecords,
    semester: Semester,
    teachers: &[Teacher],
    config: &ImportConfig,
) -> SemesterOutput {
    let span = info_span!("semester", semester = semester.number());
    let _guard = span.enter();
    let mut malformed = Vec::new();

    let mut joined_enrollments = join_enrollments(records);
    joined_enrollments.retain(is_sace_enrollment);
    let enrollment_cohorts = split_by_cohort(joined_enrollments);

    let mut joined_classes = join_classes(teachers, records);
    joined_classes.retain(is_sace_class);
    let class_cohorts = split_by_cohort(joined_classes);

    let mut enrollments = Cohorts::default();
    let mut classes = Cohorts::default();
    for cohort in Cohort::ALL {
        let cohort_enrollments = build_enrollment_rows(
            enrollment_cohorts.get(cohort),
            semester,
            config,
            &mut malformed,
        );
        let cohort_classes = build_class_rows(
            class_cohorts.get(cohort),
            semester,
            cohort,
            config,
            &cohort_enrollments,
            &mut malformed,
        );
        info!(
            %cohort,
            enrollments = cohort_enrollments.len(),
            classes = cohort_classes.len(),
            "semester rows built"
        );
        *enrollments.get_mut(cohort) = cohort_enrollments;
        *classes.get_mut(cohort) = cohort_classes;
    }

    SemesterOutput {
        semester,
        enrollments,
        classes,
        malformed,
    }
}

/// Runs the full import over both semesters.
pub fn run_import(
    config: &ImportConfig,
    semester1: &SemesterRecords,
    semester2: &SemesterRecords,
) -> ImportOutput {
    let teachers = combine_teachers(&semester1.teachers, &semester2.teachers);
    let first = process_semester(semester1, Semester::First, &teachers, config);
    let second = process_semester(semester2, Semester::Second, &teachers, config);

    let teacher_rows = sace_teacher_rows(
        &teachers,
        first.classes.iter().chain(second.classes.iter()),
        config,
    );
    let classes = assemble_cohorts(&first.classes, &second.classes, assemble_classes);
    let enrollments = assemble_cohorts(&first.enrollments, &second.enrollments, assemble_enrollments);

    let mut malformed = first.malformed;
    malformed.extend(second.malformed);
    let malformed = crate::dedupe::dedupe_rows(malformed);

    info!(
        teachers = teacher_rows.len(),
        classes = classes.len(),
        enrollments = enrollments.len(),
        malformed = malformed.len(),
        "import assembled"
    );

    ImportOutput {
        teachers: teacher_rows,
        classes,
        enrollments,
        malformed,
    }
}
