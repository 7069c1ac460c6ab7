//! Business rules deriving Results Due and Class Number.

use std::collections::BTreeMap;

use sace_model::{ResultsDue, SWD_MARKER, Semester, Stage};

/// Stage 2 subjects whose results are due mid-year when taught in semester 1.
pub const MID_YEAR_SUBJECTS: [&str; 4] = ["RPA", "RPM", "AIF", "AIM"];

/// Results Due for a class row. The first matching rule wins.
///
/// Twenty-credit and SWD classes always report at year end. Stage 1 and the
/// mid-year Stage 2 subjects follow their semester; every other Stage 2
/// subject reports at year end.
pub fn class_results_due(
    credits: &str,
    stage: Stage,
    semester: Semester,
    sace_code: &str,
    is_swd: bool,
) -> ResultsDue {
    let mid_year_subject = MID_YEAR_SUBJECTS.contains(&sace_code);
    match (stage, semester) {
        _ if credits == "20" => ResultsDue::EndOfYear,
        _ if is_swd => ResultsDue::EndOfYear,
        (Stage::One, Semester::First) => ResultsDue::MidYear,
        (Stage::One, Semester::Second) => ResultsDue::EndOfYear,
        (_, Semester::First) if mid_year_subject => ResultsDue::MidYear,
        (_, Semester::Second) if mid_year_subject => ResultsDue::EndOfYear,
        _ => ResultsDue::EndOfYear,
    }
}

/// Results Due for an enrollment row.
///
/// Keyed off the school class code rather than stage or credits: SWD
/// classes report at year end, everything else follows the semester.
pub fn enrollment_results_due(school_class_code: &str, semester: Semester) -> ResultsDue {
    if school_class_code.contains(SWD_MARKER) {
        return ResultsDue::EndOfYear;
    }
    match semester {
        Semester::First => ResultsDue::MidYear,
        Semester::Second => ResultsDue::EndOfYear,
    }
}

/// Classes sharing a Class Number sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClassGroup<'a> {
    pub stage: Stage,
    pub sace_code: &'a str,
    pub credits: &'a str,
}

/// Assigns Class Numbers to `(group, school class code)` pairs in input order.
///
/// Within a group the first distinct school class code gets 1, the next new
/// one 2, and so on; repeated codes reuse their number. The result has one
/// number per input pair.
pub fn sequence_class_numbers<'a, I>(rows: I) -> Vec<u32>
where
    I: IntoIterator<Item = (ClassGroup<'a>, &'a str)>,
{
    let mut groups: BTreeMap<ClassGroup<'a>, BTreeMap<&'a str, u32>> = BTreeMap::new();
    rows.into_iter()
        .map(|(group, code)| {
            let numbers = groups.entry(group).or_default();
            let next = numbers.len() as u32 + 1;
            *numbers.entry(code).or_insert(next)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_credits_always_end_of_year() {
        for stage in [Stage::One, Stage::Two] {
            for semester in Semester::ALL {
                assert_eq!(
                    class_results_due("20", stage, semester, "ENG", false),
                    ResultsDue::EndOfYear
                );
            }
        }
    }

    #[test]
    fn stage_one_follows_semester() {
        assert_eq!(
            class_results_due("10", Stage::One, Semester::First, "ENG", false),
            ResultsDue::MidYear
        );
        assert_eq!(
            class_results_due("10", Stage::One, Semester::Second, "ENG", false),
            ResultsDue::EndOfYear
        );
    }

    #[test]
    fn swd_classes_end_of_year() {
        assert_eq!(
            class_results_due("10", Stage::One, Semester::First, "ENG", true),
            ResultsDue::EndOfYear
        );
    }

    #[test]
    fn mid_year_stage_two_subjects() {
        assert_eq!(
            class_results_due("10", Stage::Two, Semester::First, "RPA", false),
            ResultsDue::MidYear
        );
        assert_eq!(
            class_results_due("10", Stage::Two, Semester::Second, "AIF", false),
            ResultsDue::EndOfYear
        );
        assert_eq!(
            class_results_due("10", Stage::Two, Semester::First, "ENG", false),
            ResultsDue::EndOfYear
        );
    }

    #[test]
    fn enrollment_rule_ignores_stage() {
        assert_eq!(
            enrollment_results_due("12ENG1", Semester::First),
            ResultsDue::MidYear
        );
        assert_eq!(
            enrollment_results_due("12ENG1", Semester::Second),
            ResultsDue::EndOfYear
        );
        assert_eq!(
            enrollment_results_due("11ENGSWD", Semester::First),
            ResultsDue::EndOfYear
        );
    }

    #[test]
    fn class_numbers_follow_first_appearance() {
        let group = ClassGroup {
            stage: Stage::One,
            sace_code: "ENG",
            credits: "10",
        };
        let numbers =
            sequence_class_numbers(["B", "A", "B", "C"].into_iter().map(|code| (group, code)));
        assert_eq!(numbers, vec![1, 2, 1, 3]);
    }

    #[test]
    fn class_numbers_restart_per_group() {
        let eng = ClassGroup {
            stage: Stage::One,
            sace_code: "ENG",
            credits: "10",
        };
        let eng20 = ClassGroup {
            credits: "20",
            ..eng
        };
        let numbers = sequence_class_numbers([
            (eng, "11ENG1"),
            (eng20, "11ENG2"),
            (eng, "11ENG3"),
            (eng20, "11ENG2"),
        ]);
        assert_eq!(numbers, vec![1, 1, 2, 1]);
    }
}
