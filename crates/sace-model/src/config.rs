use serde::{Deserialize, Serialize};

/// Static values stamped onto every import row.
///
/// Built once by the caller and passed into the pipeline entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Academic year the timetable belongs to.
    pub year: i32,
    /// Contact, teaching and assessment school number.
    pub school_number: u32,
}

impl ImportConfig {
    pub fn new(year: i32, school_number: u32) -> Self {
        Self {
            year,
            school_number,
        }
    }
}
