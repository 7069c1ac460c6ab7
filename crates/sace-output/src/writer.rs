//! CSV writers for the import tables.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::catalogue::{OutputTable, TableRows};
use crate::error::{OutputError, Result};

/// A table written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenTable {
    pub file_name: &'static str,
    pub path: PathBuf,
    pub rows: usize,
}

fn write_rows<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    rows: &TableRows,
) -> csv::Result<()> {
    writer.write_record(rows.headers())?;
    for record in rows.records() {
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Renders a table to CSV text, header first.
pub fn render_csv(table: &OutputTable) -> Result<String> {
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());
    write_rows(&mut writer, &table.rows).map_err(|source| OutputError::Render {
        table: table.spec.file_name,
        source,
    })?;
    let bytes = writer.into_inner().map_err(|error| OutputError::Render {
        table: table.spec.file_name,
        source: error.into_error().into(),
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Writes one table into `dir`, replacing any previous file.
pub fn write_table(dir: &Path, table: &OutputTable) -> Result<WrittenTable> {
    let path = dir.join(table.spec.file_name);
    let csv_error = |source| OutputError::CsvWrite {
        path: path.clone(),
        source,
    };
    let mut writer = csv::WriterBuilder::new()
        .from_path(&path)
        .map_err(csv_error)?;
    write_rows(&mut writer, &table.rows).map_err(csv_error)?;
    debug!(file = table.spec.file_name, rows = table.rows.len(), "table written");
    Ok(WrittenTable {
        file_name: table.spec.file_name,
        path,
        rows: table.rows.len(),
    })
}

/// Writes every table into `dir`, creating it when missing.
pub fn write_tables(dir: &Path, tables: &[OutputTable]) -> Result<Vec<WrittenTable>> {
    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let written = tables
        .iter()
        .map(|table| write_table(dir, table))
        .collect::<Result<Vec<_>>>()?;
    info!(
        dir = %dir.display(),
        files = written.len(),
        "import files written"
    );
    Ok(written)
}
