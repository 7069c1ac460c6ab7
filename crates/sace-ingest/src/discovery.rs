//! Timetable folder and file discovery.

use std::path::{Path, PathBuf};

use sace_model::Semester;
use tracing::{debug, info};

use crate::error::{IngestError, Result};

/// Environment variable for overriding the timetable folder.
pub const TIMETABLE_DIR_ENV_VAR: &str = "SACE_TIMETABLE_DIR";

/// Both semester exports of one year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableFiles {
    pub semester1: PathBuf,
    pub semester2: PathBuf,
}

impl TimetableFiles {
    pub fn path(&self, semester: Semester) -> &Path {
        match semester {
            Semester::First => &self.semester1,
            Semester::Second => &self.semester2,
        }
    }
}

/// File name of a semester's Timetable Development export, e.g. `TTD_2025_S1.tfx`.
pub fn timetable_file_name(year: i32, semester: Semester) -> String {
    format!("TTD_{year}_S{}.tfx", semester.number())
}

/// Folder named by the `SACE_TIMETABLE_DIR` environment variable, if set.
pub fn timetable_dir_from_env() -> Option<PathBuf> {
    std::env::var_os(TIMETABLE_DIR_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Picks the timetable folder.
///
/// An explicit folder wins and must exist. Otherwise `from_env` (see
/// [`timetable_dir_from_env`]) is tried, then the first candidate that
/// exists.
pub fn resolve_timetable_dir(
    explicit: Option<&Path>,
    from_env: Option<&Path>,
    candidates: &[PathBuf],
) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        if !dir.is_dir() {
            return Err(IngestError::DirectoryNotFound {
                path: dir.to_path_buf(),
            });
        }
        return Ok(dir.to_path_buf());
    }
    let mut searched = Vec::new();
    let from_env = from_env.map(Path::to_path_buf);
    for candidate in from_env.iter().chain(candidates) {
        debug!(path = %candidate.display(), "checking timetable folder");
        if candidate.is_dir() {
            info!(path = %candidate.display(), "using timetable folder");
            return Ok(candidate.clone());
        }
        searched.push(candidate.clone());
    }
    Err(IngestError::NoTimetableDir { searched })
}

/// Locates both semester exports for `year` inside `dir`.
pub fn discover_timetable_files(dir: &Path, year: i32) -> Result<TimetableFiles> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }
    let locate = |semester: Semester| -> Result<PathBuf> {
        let path = dir.join(timetable_file_name(year, semester));
        if path.is_file() {
            Ok(path)
        } else {
            Err(IngestError::FileNotFound { path })
        }
    };
    Ok(TimetableFiles {
        semester1: locate(Semester::First)?,
        semester2: locate(Semester::Second)?,
    })
}
