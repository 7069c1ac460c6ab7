use anyhow::Result;
use chrono::{Datelike, Local};

use sace_cli::{ImportRequest, ImportResult, execute_import};
use sace_ingest::timetable_dir_from_env;
use sace_model::ImportConfig;
use sace_output::CATALOGUE;

use crate::cli::ImportArgs;
use crate::summary::print_catalogue;

pub fn run_import_command(args: &ImportArgs) -> Result<ImportResult> {
    let year = args.year.unwrap_or_else(|| Local::now().year());
    let request = ImportRequest {
        config: ImportConfig::new(year, args.school_number),
        timetable_dir: args.timetable_dir.clone(),
        env_timetable_dir: timetable_dir_from_env(),
        search_dirs: args.search_dirs.clone(),
        output_dir: args.output_dir.clone(),
        dry_run: args.dry_run,
    };
    execute_import(&request)
}

pub fn run_tables() -> Result<()> {
    print_catalogue(CATALOGUE);
    Ok(())
}
