//! Timetable ingestion: locating the semester exports and reading them
//! into typed records.

pub mod discovery;
pub mod error;
pub mod tfx;

pub use discovery::{
    TIMETABLE_DIR_ENV_VAR, TimetableFiles, discover_timetable_files, resolve_timetable_dir,
    timetable_dir_from_env, timetable_file_name,
};
pub use error::{IngestError, Result};
pub use tfx::{load_semester, parse_semester};
