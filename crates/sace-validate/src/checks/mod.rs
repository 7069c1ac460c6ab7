mod duplicates;
mod length;

pub use duplicates::{DuplicateTeachers, find_duplicate_teachers};
pub use length::check_code_lengths;

use sace_model::Issue;
use sace_transform::MalformedCode;

/// One issue per undecodable classification.
pub fn malformed_issues(malformed: &[MalformedCode]) -> Vec<Issue> {
    malformed
        .iter()
        .map(|code| Issue::MalformedClassCode {
            class_code: code.class_code.clone(),
            encoded: code.encoded.clone(),
        })
        .collect()
}
