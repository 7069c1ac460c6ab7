//! The set of files an import run produces.

use sace_model::{ClassRow, Cohort, EnrollmentRow, Semester, Stage, TeacherRow};
use sace_transform::{ImportOutput, select_classes, select_enrollments};

use crate::records::ImportRecord;

use Cohort::{Mainstream, Swd};
use Semester::{First, Second};
use Stage::{One, Two};
use TableKind::{Class, DuplicateClass, Enrollment, Teacher};

/// Entity a table holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Teacher,
    Class,
    Enrollment,
    /// Class rows sharing a school class code across teachers.
    DuplicateClass,
}

impl TableKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Teacher => "teacher",
            Self::Class => "class",
            Self::Enrollment => "enrollment",
            Self::DuplicateClass => "duplicate classes",
        }
    }
}

/// One output file and the slice of rows it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
    pub file_name: &'static str,
    pub kind: TableKind,
    /// `None` for tables spanning both cohorts.
    pub cohort: Option<Cohort>,
    pub stage: Option<Stage>,
    /// `None` for classes running all year.
    pub semester: Option<Semester>,
}

impl TableSpec {
    const fn new(
        file_name: &'static str,
        kind: TableKind,
        cohort: Option<Cohort>,
        stage: Option<Stage>,
        semester: Option<Semester>,
    ) -> Self {
        Self {
            file_name,
            kind,
            cohort,
            stage,
            semester,
        }
    }

    /// File stem without the `.csv` extension.
    pub fn name(&self) -> &'static str {
        self.file_name
            .strip_suffix(".csv")
            .unwrap_or(self.file_name)
    }
}

/// Every table, in write order.
///
/// Stage 2 subjects run all year, so their enrollments come from the
/// semester 1 timetable only. SWD enrollments likewise.
pub const CATALOGUE: &[TableSpec] = &[
    TableSpec::new("TCHRIMP.csv", Teacher, None, None, None),
    TableSpec::new("Stage1_S1_CLASSIMP.csv", Class, Some(Mainstream), Some(One), Some(First)),
    TableSpec::new("Stage1_S2_CLASSIMP.csv", Class, Some(Mainstream), Some(One), Some(Second)),
    TableSpec::new("Stage2_CLASSIMP.csv", Class, Some(Mainstream), Some(Two), None),
    TableSpec::new("SWD_Stage1_S1_CLASSIMP.csv", Class, Some(Swd), Some(One), Some(First)),
    TableSpec::new("SWD_Stage1_S2_CLASSIMP.csv", Class, Some(Swd), Some(One), Some(Second)),
    TableSpec::new("SWD_Stage2_CLASSIMP.csv", Class, Some(Swd), Some(Two), None),
    TableSpec::new("Stage1_S1_ENRLIMP.csv", Enrollment, Some(Mainstream), Some(One), Some(First)),
    TableSpec::new("Stage1_S2_ENRLIMP.csv", Enrollment, Some(Mainstream), Some(One), Some(Second)),
    TableSpec::new("Stage2_ENRLIMP.csv", Enrollment, Some(Mainstream), Some(Two), Some(First)),
    TableSpec::new("SWD_Stage1_ENRLIMP.csv", Enrollment, Some(Swd), Some(One), Some(First)),
    TableSpec::new("SWD_Stage2_ENRLIMP.csv", Enrollment, Some(Swd), Some(Two), Some(First)),
    TableSpec::new("Duplicate_Classes.csv", DuplicateClass, None, None, None),
];

/// Rows of one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRows {
    Teachers(Vec<TeacherRow>),
    Classes(Vec<ClassRow>),
    Enrollments(Vec<EnrollmentRow>),
}

impl TableRows {
    pub fn len(&self) -> usize {
        match self {
            Self::Teachers(rows) => rows.len(),
            Self::Classes(rows) => rows.len(),
            Self::Enrollments(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            Self::Teachers(_) => TeacherRow::HEADERS,
            Self::Classes(_) => ClassRow::HEADERS,
            Self::Enrollments(_) => EnrollmentRow::HEADERS,
        }
    }

    /// Field values of every row.
    pub fn records(&self) -> Vec<Vec<String>> {
        match self {
            Self::Teachers(rows) => rows.iter().map(ImportRecord::fields).collect(),
            Self::Classes(rows) => rows.iter().map(ImportRecord::fields).collect(),
            Self::Enrollments(rows) => rows.iter().map(ImportRecord::fields).collect(),
        }
    }
}

/// A catalogue entry filled with rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTable {
    pub spec: TableSpec,
    pub rows: TableRows,
}

/// Fills the catalogue from an import run.
///
/// Data tables are always produced, even when empty. The duplicate classes
/// table is produced only when `duplicates` is non-empty.
pub fn build_tables(output: &ImportOutput, duplicates: &[ClassRow]) -> Vec<OutputTable> {
    CATALOGUE
        .iter()
        .filter_map(|spec| {
            let rows = table_rows(spec, output, duplicates)?;
            Some(OutputTable { spec: *spec, rows })
        })
        .collect()
}

fn table_rows(spec: &TableSpec, output: &ImportOutput, duplicates: &[ClassRow]) -> Option<TableRows> {
    let rows = match (spec.kind, spec.cohort, spec.stage, spec.semester) {
        (Teacher, ..) => TableRows::Teachers(output.teachers.clone()),
        (Class, Some(cohort), Some(stage), semester) => {
            TableRows::Classes(select_classes(output.classes.get(cohort), stage, semester))
        }
        (Enrollment, Some(cohort), Some(stage), Some(semester)) => TableRows::Enrollments(
            select_enrollments(output.enrollments.get(cohort), stage, semester),
        ),
        (DuplicateClass, ..) if !duplicates.is_empty() => TableRows::Classes(duplicates.to_vec()),
        _ => return None,
    };
    Some(rows)
}
