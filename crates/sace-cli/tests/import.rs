//! End-to-end import runs over timetable files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use sace_cli::{ImportRequest, execute_import};
use sace_model::ImportConfig;

const SEMESTER_1: &str = r#"{
    "ClassNames": [
        {"ClassNameID": 1, "Code": "11ENG1", "SubjectCode": "1ENG10", "BOSClassCode1": "1ENG10"},
        {"ClassNameID": 2, "Code": "12MAT1", "SubjectCode": "2MAT20", "BOSClassCode1": "2MAT20"},
        {"ClassNameID": 3, "Code": "12MATHEMATICS", "SubjectCode": "2MAT20", "BOSClassCode1": "2MAT20"}
    ],
    "Timetable": [
        {"ClassNameID": 1, "TeacherID": 1},
        {"ClassNameID": 2, "TeacherID": 2},
        {"ClassNameID": 2, "TeacherID": 1},
        {"ClassNameID": 3, "TeacherID": 2}
    ],
    "Teachers": [
        {"TeacherID": 1, "Code": "DOE", "LastName": "Doe", "FirstName": "Jane", "Salutation": "Ms"},
        {"TeacherID": 2, "Code": "SMI", "LastName": "Smith", "FirstName": "Jonathan", "Salutation": "Mr"}
    ],
    "Students": [
        {"Code": "S001", "BOSCode": "123456A", "StudentLessons": [{"ClassCode": "11ENG1"}, {"ClassCode": "12MAT1"}]},
        {"Code": "S002", "BOSCode": "234567B", "StudentLessons": [{"ClassCode": "12MATHEMATICS"}]}
    ]
}"#;

const SEMESTER_2: &str = r#"{
    "ClassNames": [],
    "Timetable": [],
    "Teachers": [],
    "Students": []
}"#;

fn timetable_dir(root: &Path) -> PathBuf {
    let dir = root.join("2025");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("TTD_2025_S1.tfx"), SEMESTER_1).unwrap();
    fs::write(dir.join("TTD_2025_S2.tfx"), SEMESTER_2).unwrap();
    dir
}

fn request(timetable_dir: Option<PathBuf>, search_dirs: Vec<PathBuf>, output_dir: PathBuf) -> ImportRequest {
    ImportRequest {
        config: ImportConfig::new(2025, 245),
        timetable_dir,
        env_timetable_dir: None,
        search_dirs,
        output_dir,
        dry_run: false,
    }
}

#[test]
fn writes_import_files_and_reports_issues() {
    let temp = tempfile::tempdir().unwrap();
    let dir = timetable_dir(temp.path());
    let output_dir = temp.path().join("out");

    let result = execute_import(&request(Some(dir), Vec::new(), output_dir.clone())).unwrap();

    assert!(output_dir.join("TCHRIMP.csv").is_file());
    assert!(output_dir.join("Duplicate_Classes.csv").is_file());
    let stage2 = result
        .tables
        .iter()
        .find(|table| table.file_name == "Stage2_CLASSIMP.csv")
        .unwrap();
    assert_eq!(stage2.rows, 3);

    let codes: Vec<&str> = result.report.issues.iter().map(|issue| issue.code()).collect();
    assert_eq!(codes, vec!["DUPLICATE_TEACHER", "CODE_TOO_LONG"]);
    assert!(!result.report.is_clear_to_upload());
}

#[test]
fn search_dirs_resolve_year_folder() {
    let temp = tempfile::tempdir().unwrap();
    timetable_dir(temp.path());
    let missing = temp.path().join("missing");
    let mut run = request(
        None,
        vec![missing, temp.path().to_path_buf()],
        temp.path().join("out"),
    );
    run.dry_run = true;

    let result = execute_import(&run).unwrap();
    assert_eq!(result.timetable_dir, temp.path().join("2025"));
    assert!(result.tables.iter().all(|table| table.path.is_none()));
    assert!(!temp.path().join("out").exists());
}

#[test]
fn missing_semester_file_is_fatal() {
    let temp = tempfile::tempdir().unwrap();
    let dir = timetable_dir(temp.path());
    fs::remove_file(dir.join("TTD_2025_S2.tfx")).unwrap();

    let error = execute_import(&request(Some(dir), Vec::new(), temp.path().join("out")))
        .unwrap_err();
    assert!(format!("{error:#}").contains("TTD_2025_S2.tfx"));
}

#[test]
fn env_folder_is_used_before_search_roots() {
    let temp = tempfile::tempdir().unwrap();
    let env_root = temp.path().join("env");
    let search_root = temp.path().join("search");
    let env_dir = timetable_dir(&env_root);
    timetable_dir(&search_root);
    let mut run = request(None, vec![search_root], temp.path().join("out"));
    run.env_timetable_dir = Some(env_dir.clone());
    run.dry_run = true;

    let result = execute_import(&run).unwrap();
    assert_eq!(result.timetable_dir, env_dir);
}
