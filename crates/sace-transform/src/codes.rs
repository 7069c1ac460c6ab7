//! Code classification: teacher short-codes and encoded class identifiers.

use sace_model::{Result, SaceError, Stage};

/// Characters of the given names kept in a teacher code.
pub const TEACHER_CODE_GIVEN_CHARS: usize = 7;

/// Length of an encoded class identifier: stage, 3-letter subject, 2-digit credits.
pub const ENCODED_CLASS_CODE_LEN: usize = 6;

/// Builds the import teacher code: up to seven characters of the given names
/// followed by the first character of the family name.
///
/// Case and whitespace are kept as they are. Empty names give a short or
/// empty code; codes are not guaranteed unique.
pub fn derive_teacher_code(given_names: &str, family_name: &str) -> String {
    given_names
        .chars()
        .take(TEACHER_CODE_GIVEN_CHARS)
        .chain(family_name.chars().take(1))
        .collect()
}

/// Positional decomposition of an encoded class identifier such as `1ENG10`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedClassCode {
    /// Character 0, the SACE stage as written.
    pub stage: char,
    /// Characters 1 to 3.
    pub sace_code: String,
    /// Characters 4 and 5.
    pub credits: String,
}

impl DecodedClassCode {
    /// Stage when it is one of the imported stages.
    pub fn stage(&self) -> Option<Stage> {
        Stage::from_code_char(self.stage)
    }
}

/// Slices an encoded class identifier into stage, subject code and credits.
///
/// Characters beyond the sixth (such as an `SWD` suffix) are ignored.
///
/// # Errors
///
/// Returns [`SaceError::MalformedClassCode`] when the code has fewer than
/// six characters.
pub fn decode_class_code(code: &str) -> Result<DecodedClassCode> {
    let chars: Vec<char> = code.chars().take(ENCODED_CLASS_CODE_LEN).collect();
    if chars.len() < ENCODED_CLASS_CODE_LEN {
        return Err(SaceError::MalformedClassCode {
            code: code.to_string(),
        });
    }
    Ok(DecodedClassCode {
        stage: chars[0],
        sace_code: chars[1..4].iter().collect(),
        credits: chars[4..6].iter().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teacher_code_truncates_given_names() {
        assert_eq!(derive_teacher_code("Jonathan", "Smith"), "JonathaS");
        assert_eq!(derive_teacher_code("Al", "Jones"), "AlJ");
        assert_eq!(derive_teacher_code("Jane", "Doe"), "JaneD");
    }

    #[test]
    fn teacher_code_keeps_case_and_spaces() {
        assert_eq!(derive_teacher_code("mary ann", "o'Neil"), "mary ano");
    }

    #[test]
    fn teacher_code_with_empty_names() {
        assert_eq!(derive_teacher_code("", "Smith"), "S");
        assert_eq!(derive_teacher_code("Jane", ""), "Jane");
        assert_eq!(derive_teacher_code("", ""), "");
    }

    #[test]
    fn decodes_positional_fields() {
        let decoded = decode_class_code("2RPA10").expect("decode");
        assert_eq!(decoded.stage, '2');
        assert_eq!(decoded.stage(), Some(Stage::Two));
        assert_eq!(decoded.sace_code, "RPA");
        assert_eq!(decoded.credits, "10");
    }

    #[test]
    fn ignores_suffix() {
        let decoded = decode_class_code("1ENG20SWD").expect("decode");
        assert_eq!(decoded.sace_code, "ENG");
        assert_eq!(decoded.credits, "20");
    }

    #[test]
    fn short_code_is_malformed() {
        assert_eq!(
            decode_class_code("1ENG1"),
            Err(SaceError::MalformedClassCode {
                code: "1ENG1".to_string()
            })
        );
        assert!(decode_class_code("").is_err());
    }

    #[test]
    fn unknown_stage_decodes_but_is_not_imported() {
        let decoded = decode_class_code("XHGR00").expect("decode");
        assert_eq!(decoded.stage(), None);
    }
}
