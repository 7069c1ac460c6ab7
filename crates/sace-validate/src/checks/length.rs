use std::collections::BTreeSet;

use sace_model::{Issue, MAX_SCHOOL_CLASS_CODE_LEN};

/// Flags school class codes longer than the import field allows, once per
/// distinct code.
pub fn check_code_lengths<'a, I>(codes: I) -> Vec<Issue>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = BTreeSet::new();
    codes
        .into_iter()
        .filter(|code| code.chars().count() > MAX_SCHOOL_CLASS_CODE_LEN)
        .filter(|code| seen.insert(*code))
        .map(|code| Issue::CodeTooLong {
            school_class_code: code.to_string(),
            length: code.chars().count(),
            max: MAX_SCHOOL_CLASS_CODE_LEN,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_codes_reported_once() {
        let issues = check_code_lengths(["12ENGLISH01", "11ENG1", "12ENGLISH01", "1234567890"]);
        assert_eq!(
            issues,
            vec![Issue::CodeTooLong {
                school_class_code: "12ENGLISH01".to_string(),
                length: 11,
                max: MAX_SCHOOL_CLASS_CODE_LEN,
            }]
        );
    }
}
