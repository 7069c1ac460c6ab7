//! Row placement across the catalogue for a year spanning both semesters.

use std::collections::BTreeMap;

use sace_model::{ClassRow, Cohort, Cohorts, EnrollmentRow, ResultsDue, Semester, Stage};
use sace_output::{OutputTable, TableKind, TableRows, build_tables};
use sace_transform::ImportOutput;

fn class(stage: Stage, semester: Semester, code: &str) -> ClassRow {
    ClassRow {
        school_number: 245,
        year: 2025,
        stage,
        sace_code: "ENG".to_string(),
        credits: "10".to_string(),
        class_number: 1,
        semester,
        teacher_code: "JaneD".to_string(),
        school_class_code: code.to_string(),
        results_due: ResultsDue::EndOfYear,
    }
}

fn enrollment(stage: Stage, semester: Semester, student: &str) -> EnrollmentRow {
    EnrollmentRow {
        school_number: 245,
        registration_number: format!("{student}R"),
        student_code: student.to_string(),
        year: 2025,
        semester,
        stage,
        sace_code: "ENG".to_string(),
        credits: "10".to_string(),
        results_due: ResultsDue::EndOfYear,
        class_number: 1,
        school_class_code: "11ENG1".to_string(),
    }
}

/// One row per stage and semester in each cohort, tagged by cohort prefix.
fn full_year() -> ImportOutput {
    let mut classes = Cohorts::default();
    let mut enrollments = Cohorts::default();
    for (cohort, prefix) in [(Cohort::Mainstream, "M"), (Cohort::Swd, "W")] {
        for (stage, stage_tag) in [(Stage::One, "1"), (Stage::Two, "2")] {
            for (semester, semester_tag) in [(Semester::First, "S1"), (Semester::Second, "S2")] {
                let tag = format!("{prefix}{stage_tag}{semester_tag}");
                classes.get_mut(cohort).push(class(stage, semester, &tag));
                enrollments.get_mut(cohort).push(enrollment(stage, semester, &tag));
            }
        }
    }
    ImportOutput {
        teachers: Vec::new(),
        classes,
        enrollments,
        malformed: Vec::new(),
    }
}

fn row_tags(table: &OutputTable) -> Vec<String> {
    match &table.rows {
        TableRows::Teachers(rows) => rows.iter().map(|row| row.teacher_code.clone()).collect(),
        TableRows::Classes(rows) => rows.iter().map(|row| row.school_class_code.clone()).collect(),
        TableRows::Enrollments(rows) => rows.iter().map(|row| row.student_code.clone()).collect(),
    }
}

/// Row tags of each table, keyed by file stem.
fn tags_by_table(tables: &[OutputTable]) -> BTreeMap<&'static str, Vec<String>> {
    tables
        .iter()
        .map(|table| (table.spec.name(), row_tags(table)))
        .collect()
}

#[test]
fn rows_land_in_their_stage_and_semester_tables() {
    let tables = build_tables(&full_year(), &[]);
    let tags = tags_by_table(&tables);
    let expect = |name: &str, expected: &[&str]| {
        assert_eq!(tags[name], expected, "contents of {name}");
    };

    expect("TCHRIMP", &[]);
    expect("Stage1_S1_CLASSIMP", &["M1S1"]);
    expect("Stage1_S2_CLASSIMP", &["M1S2"]);
    expect("Stage2_CLASSIMP", &["M2S1", "M2S2"]);
    expect("SWD_Stage1_S1_CLASSIMP", &["W1S1"]);
    expect("SWD_Stage1_S2_CLASSIMP", &["W1S2"]);
    expect("SWD_Stage2_CLASSIMP", &["W2S1", "W2S2"]);
    expect("Stage1_S1_ENRLIMP", &["M1S1"]);
    expect("Stage1_S2_ENRLIMP", &["M1S2"]);
    expect("Stage2_ENRLIMP", &["M2S1"]);
    expect("SWD_Stage1_ENRLIMP", &["W1S1"]);
    expect("SWD_Stage2_ENRLIMP", &["W2S1"]);
    assert!(!tags.contains_key("Duplicate_Classes"));
}

#[test]
fn cohort_tables_do_not_share_rows() {
    let tables = build_tables(&full_year(), &[]);
    for kind in [TableKind::Class, TableKind::Enrollment] {
        for cohort in [Cohort::Mainstream, Cohort::Swd] {
            let mut seen: BTreeMap<String, &str> = BTreeMap::new();
            for table in tables
                .iter()
                .filter(|table| table.spec.kind == kind && table.spec.cohort == Some(cohort))
            {
                for tag in row_tags(table) {
                    if let Some(first) = seen.insert(tag.clone(), table.spec.name()) {
                        panic!("{tag} in both {first} and {}", table.spec.name());
                    }
                }
            }
        }
    }
}

#[test]
fn semester_two_rows_reach_only_semester_two_and_year_long_tables() {
    let tables = build_tables(&full_year(), &[]);
    let holders: Vec<&str> = tables
        .iter()
        .filter(|table| match &table.rows {
            TableRows::Classes(rows) => rows.iter().any(|row| row.semester == Semester::Second),
            TableRows::Enrollments(rows) => rows.iter().any(|row| row.semester == Semester::Second),
            TableRows::Teachers(_) => false,
        })
        .map(|table| table.spec.name())
        .collect();
    assert_eq!(
        holders,
        [
            "Stage1_S2_CLASSIMP",
            "Stage2_CLASSIMP",
            "SWD_Stage1_S2_CLASSIMP",
            "SWD_Stage2_CLASSIMP",
            "Stage1_S2_ENRLIMP",
        ]
    );
}
