//! SACE import file generation.
//!
//! - **records**: column layout of each import file format
//! - **catalogue**: which rows go to which file
//! - **writer**: CSV rendering and file output

pub mod catalogue;
pub mod error;
pub mod records;
pub mod writer;

pub use catalogue::{CATALOGUE, OutputTable, TableKind, TableRows, TableSpec, build_tables};
pub use error::{OutputError, Result};
pub use records::ImportRecord;
pub use writer::{WrittenTable, render_csv, write_table, write_tables};
