//! Import run: locate, load, transform, validate, write.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use sace_ingest::{discover_timetable_files, load_semester, resolve_timetable_dir};
use sace_model::Semester;
use sace_output::{build_tables, write_tables};
use sace_transform::run_import;
use sace_validate::validate_import;

use crate::logging::redact_value;
use crate::types::{ImportRequest, ImportResult, TableSummary};

/// Timetable folder candidates for `year`: each search root's year folder,
/// or `./<year>` when no roots are given.
pub fn timetable_candidates(search_dirs: &[PathBuf], year: i32) -> Vec<PathBuf> {
    if search_dirs.is_empty() {
        return vec![PathBuf::from(year.to_string())];
    }
    search_dirs
        .iter()
        .map(|root| root.join(year.to_string()))
        .collect()
}

pub fn execute_import(request: &ImportRequest) -> Result<ImportResult> {
    let config = request.config;
    let span = info_span!("import", year = config.year, school = config.school_number);
    let _guard = span.enter();

    let candidates = timetable_candidates(&request.search_dirs, config.year);
    let timetable_dir = resolve_timetable_dir(
        request.timetable_dir.as_deref(),
        request.env_timetable_dir.as_deref(),
        &candidates,
    )
        .context("locate timetable folder")?;
    let files = discover_timetable_files(&timetable_dir, config.year)
        .with_context(|| format!("find timetables in {}", timetable_dir.display()))?;

    let semester1 = load_semester(files.path(Semester::First))
        .context("load semester 1 timetable")?;
    let semester2 = load_semester(files.path(Semester::Second))
        .context("load semester 2 timetable")?;

    let output = run_import(&config, &semester1, &semester2);
    let validation = validate_import(&output);
    for row in &validation.duplicate_classes {
        debug!(
            class = %row.school_class_code,
            teacher = redact_value(&row.teacher_code),
            "class shared between teachers"
        );
    }

    let tables = build_tables(&output, &validation.duplicate_classes);
    let summaries = if request.dry_run {
        info!("dry run, no files written");
        tables
            .iter()
            .map(|table| TableSummary {
                file_name: table.spec.file_name,
                kind: table.spec.kind.label(),
                rows: table.rows.len(),
                path: None,
            })
            .collect()
    } else {
        let written = write_tables(&request.output_dir, &tables).with_context(|| {
            format!("write import files to {}", request.output_dir.display())
        })?;
        tables
            .iter()
            .zip(written)
            .map(|(table, file)| TableSummary {
                file_name: file.file_name,
                kind: table.spec.kind.label(),
                rows: file.rows,
                path: Some(file.path),
            })
            .collect()
    };

    Ok(ImportResult {
        config,
        timetable_dir,
        output_dir: request.output_dir.clone(),
        tables: summaries,
        report: validation.report,
        dry_run: request.dry_run,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_use_year_folders() {
        let roots = vec![PathBuf::from("/srv/timetabling"), PathBuf::from("/home/t")];
        assert_eq!(
            timetable_candidates(&roots, 2025),
            vec![
                PathBuf::from("/srv/timetabling/2025"),
                PathBuf::from("/home/t/2025")
            ]
        );
        assert_eq!(timetable_candidates(&[], 2025), vec![PathBuf::from("2025")]);
    }
}
