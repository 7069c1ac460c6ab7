use std::path::PathBuf;

use sace_model::{ImportConfig, ValidationReport};

/// Everything needed to run one import.
#[derive(Debug, Clone)]
pub struct ImportRequest {
    pub config: ImportConfig,
    pub timetable_dir: Option<PathBuf>,
    /// Value of `SACE_TIMETABLE_DIR`, tried before the search roots.
    pub env_timetable_dir: Option<PathBuf>,
    /// Timetabling roots; each is searched for a folder named after the year.
    pub search_dirs: Vec<PathBuf>,
    pub output_dir: PathBuf,
    pub dry_run: bool,
}

/// Per-table outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSummary {
    pub file_name: &'static str,
    pub kind: &'static str,
    pub rows: usize,
    /// `None` on a dry run.
    pub path: Option<PathBuf>,
}

#[derive(Debug)]
pub struct ImportResult {
    pub config: ImportConfig,
    pub timetable_dir: PathBuf,
    pub output_dir: PathBuf,
    pub tables: Vec<TableSummary>,
    pub report: ValidationReport,
    pub dry_run: bool,
}
