//! Domain-specific assertion macros for liftlog harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* parse rule was violated and *where*.

/// Assert that parsing failed with the given kind at the given line index.
///
/// ```rust
/// assert_parse_error!(result, ErrorKind::MissingData, 1);
/// ```
#[macro_export]
macro_rules! assert_parse_error {
    ($result:expr, $kind:expr, $line_no:expr) => {{
        let result: Result<Vec<liftlog_core::Workout>, liftlog_core::ParseError> = $result;
        let expected_kind: liftlog_core::ErrorKind = $kind;
        let expected_line: usize = $line_no;
        match result {
            Ok(workouts) => panic!(
                "assert_parse_error! failed: parse succeeded with {} workouts, expected {:?} at line {}",
                workouts.len(),
                expected_kind,
                expected_line
            ),
            Err(err) => {
                if err.kind() != expected_kind || err.line_no() != expected_line {
                    panic!(
                        "assert_parse_error! failed:\n  expected: {:?} at line {}\n  actual:   {:?} at line {}\n  line: {:?}",
                        expected_kind,
                        expected_line,
                        err.kind(),
                        err.line_no(),
                        err.line()
                    );
                }
                err
            }
        }
    }};
}

/// Assert that two workout lists are equal, with a structural diff on failure.
#[macro_export]
macro_rules! assert_workouts_eq {
    ($actual:expr, $expected:expr) => {{
        let actual: &[liftlog_core::Workout] = &$actual;
        let expected: &[liftlog_core::Workout] = &$expected;
        pretty_assertions::assert_eq!(actual, expected);
    }};
}

/// Assert the invariants every parse result must satisfy: each entry has
/// non-empty trimmed data, and its normalized code is a fixed point.
pub fn assert_well_formed(workouts: &[liftlog_core::Workout]) {
    for workout in workouts {
        assert!(
            !workout.date.trim().is_empty() && workout.date == workout.date.trim(),
            "workout date must be the bare matched text: {:?}",
            workout.date
        );
        for entry in &workout.entries {
            assert!(!entry.data.is_empty(), "entry data must not be empty: {entry:?}");
            assert_eq!(entry.data, entry.data.trim(), "entry data must be trimmed");
            assert_eq!(
                liftlog_core::normalize(&entry.normalized_code).as_deref(),
                Ok(entry.normalized_code.as_str()),
                "normalized code must normalize to itself"
            );
        }
    }
}
