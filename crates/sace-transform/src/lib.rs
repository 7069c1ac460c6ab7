//! SACE import transformation.
//!
//! This crate turns typed timetable records into import rows:
//!
//! - **codes**: teacher codes and encoded class identifier decoding
//! - **join**: enrollment and class joins over one semester
//! - **filters**: predicates deciding which joined rows are imported
//! - **rules**: Results Due and Class Number derivation
//! - **partition**: mainstream/SWD split and stage/semester slicing
//! - **assemble**: merging both semesters
//! - **pipeline**: the end-to-end run

pub mod assemble;
pub mod classes;
pub mod codes;
mod dedupe;
pub mod enrollments;
pub mod filters;
pub mod join;
pub mod partition;
pub mod pipeline;
pub mod rules;
pub mod teachers;

pub use codes::{DecodedClassCode, decode_class_code, derive_teacher_code};
pub use dedupe::{dedupe_by_key, dedupe_rows};
pub use partition::{Classified, select_classes, select_enrollments, split_by_cohort};
pub use pipeline::{ImportOutput, MalformedCode, SemesterOutput, process_semester, run_import};
pub use rules::{ClassGroup, class_results_due, enrollment_results_due, sequence_class_numbers};
