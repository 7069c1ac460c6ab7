//! Row predicates applied after the joins.
//!
//! Each predicate names one reason a joined row is left out of the import.

use crate::join::{ClassJoinRow, EnrollmentJoinRow};
use crate::partition::Classified;

/// Marker of pastoral care groups, matched case-insensitively.
pub const PASTORAL_CARE_MARKER: &str = "care";

/// The class carries a SACE classification.
pub fn has_bos_class_code<T: Classified>(row: &T) -> bool {
    row.bos_class_code().is_some()
}

/// The class carries an encoded subject code.
pub fn has_subject_code(row: &ClassJoinRow) -> bool {
    row.subject_code.is_some()
}

/// The class row can become an import class: both codes present.
pub fn is_sace_class(row: &ClassJoinRow) -> bool {
    has_subject_code(row) && has_bos_class_code(row)
}

/// The enrollment row can become an import enrollment.
pub fn is_sace_enrollment(row: &EnrollmentJoinRow) -> bool {
    has_bos_class_code(row)
}

/// School class code belongs to a pastoral care group.
pub fn is_pastoral_care(school_class_code: &str) -> bool {
    school_class_code
        .to_lowercase()
        .contains(PASTORAL_CARE_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sace_model::{ClassNameId, Teacher, TeacherId};

    fn class_row(subject: Option<&str>, bos: Option<&str>) -> ClassJoinRow {
        ClassJoinRow {
            teacher: Teacher {
                teacher_id: TeacherId::new("1").unwrap(),
                code: None,
                family_name: "Doe".to_string(),
                given_names: "Jane".to_string(),
                salutation: None,
            },
            class_name_id: Some(ClassNameId::new("1").unwrap()),
            class_code: Some("11ENG1".to_string()),
            subject_code: subject.map(str::to_string),
            bos_class_code: bos.map(str::to_string),
        }
    }

    #[test]
    fn sace_class_needs_both_codes() {
        assert!(is_sace_class(&class_row(Some("1ENG10"), Some("1ENG10"))));
        assert!(!is_sace_class(&class_row(None, Some("1ENG10"))));
        assert!(!is_sace_class(&class_row(Some("1ENG10"), None)));
    }

    #[test]
    fn pastoral_care_is_case_insensitive() {
        assert!(is_pastoral_care("11CARE1"));
        assert!(is_pastoral_care("PastoralCare"));
        assert!(!is_pastoral_care("11CHE1"));
    }
}
