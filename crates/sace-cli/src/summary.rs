use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sace_cli::ImportResult;
use sace_model::{Issue, Severity};
use sace_output::TableSpec;

pub fn print_summary(result: &ImportResult) {
    println!(
        "Year: {}  School: {}",
        result.config.year, result.config.school_number
    );
    println!("Timetables: {}", result.timetable_dir.display());
    if result.dry_run {
        println!("Output: (dry run, nothing written)");
    } else {
        println!("Output: {}", result.output_dir.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Type"),
        header_cell("Rows"),
        header_cell("Written"),
    ]);
    apply_table_style(&mut table, 100);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    let mut total_rows = 0usize;
    for summary in &result.tables {
        total_rows += summary.rows;
        table.add_row(vec![
            Cell::new(summary.file_name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(summary.kind),
            count_cell(summary.rows),
            match summary.path {
                Some(_) => Cell::new("✓")
                    .fg(Color::Green)
                    .add_attribute(Attribute::Bold),
                None => dim_cell("-"),
            },
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
    print_issue_table(&result.report.issues);
    if !result.report.is_clear_to_upload() {
        eprintln!("Some class codes are too long for Schools Online; fix them before uploading.");
    }
}

fn print_issue_table(issues: &[Issue]) {
    if issues.is_empty() {
        return;
    }
    let mut ordered: Vec<&Issue> = issues.iter().collect();
    ordered.sort_by_key(|issue| {
        (
            severity_rank(issue.severity()),
            issue.code(),
            issue.school_class_code().to_string(),
        )
    });
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Code"),
        header_cell("Class"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table, 140);
    align_column(&mut table, 0, CellAlignment::Center);
    for issue in ordered {
        table.add_row(vec![
            severity_cell(issue.severity()),
            Cell::new(issue.code()),
            Cell::new(issue.school_class_code()),
            Cell::new(issue.message()),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

pub fn print_catalogue(catalogue: &[TableSpec]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Type"),
        header_cell("Cohort"),
        header_cell("Stage"),
        header_cell("Semester"),
    ]);
    apply_table_style(&mut table, 100);
    align_column(&mut table, 3, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Center);
    for spec in catalogue {
        table.add_row(vec![
            Cell::new(spec.file_name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(spec.kind.label()),
            optional_cell(spec.cohort.map(|cohort| cohort.label().to_string()), "all"),
            optional_cell(spec.stage.map(|stage| stage.to_string()), "-"),
            optional_cell(spec.semester.map(|semester| semester.to_string()), "both"),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table, width: u16) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(width);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn severity_cell(severity: Severity) -> Cell {
    let cell = Cell::new(severity.label());
    match severity {
        Severity::Error => cell.fg(Color::Red).add_attribute(Attribute::Bold),
        Severity::Warning => cell.fg(Color::Yellow),
    }
}

fn severity_rank(severity: Severity) -> u8 {
    match severity {
        Severity::Error => 0,
        Severity::Warning => 1,
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn optional_cell(value: Option<String>, absent: &str) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell(absent),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
