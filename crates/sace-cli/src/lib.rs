//! Library side of the `sace-import` binary.

pub mod logging;
pub mod run;
pub mod types;

pub use run::{execute_import, timetable_candidates};
pub use types::{ImportRequest, ImportResult, TableSummary};
