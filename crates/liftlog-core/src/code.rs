//! Exercise code normalizer.
//!
//! An exercise code has the shape `EEEvvv$$$`: one or more uppercase letters
//! naming the exercise, one or more lowercase variation flags, then zero or
//! more symbols (anything that is neither a letter nor a digit). Variation
//! flags and symbols are unordered sets in practice, so [`normalize`] sorts
//! each of them to give equivalent codes one spelling:
//!
//! ```
//! use liftlog_core::code::normalize;
//!
//! assert_eq!(normalize("SPsd").unwrap(), "SPds");
//! assert_eq!(normalize("TEd_>").unwrap(), "TEd>_");
//! ```

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static EXERCISE_CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<upper>[A-Z]+)(?P<lower>[a-z]+)(?P<symbols>[^A-Za-z0-9]*)$")
        .expect("built-in exercise code pattern must compile")
});

/// The code did not have the `EEEvvv$$$` shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "exercise code '{code}' does not match expected format EEEvvv$$$ \
     (EEE: exercise in uppercase, vvv: variations in lowercase, \
     $$$: optional symbols further distinguishing the variation)"
)]
pub struct InvalidExerciseCode {
    pub code: String,
}

/// The three segments of a valid exercise code, borrowed from the input and
/// in their original order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeParts<'a> {
    pub exercise: &'a str,
    pub variations: &'a str,
    pub symbols: &'a str,
}

/// Split `code` into its exercise, variation and symbol segments.
pub fn unpack(code: &str) -> Result<CodeParts<'_>, InvalidExerciseCode> {
    let caps = EXERCISE_CODE_PATTERN
        .captures(code)
        .ok_or_else(|| InvalidExerciseCode {
            code: code.to_string(),
        })?;
    let segment = |name: &str| caps.name(name).map_or("", |m| m.as_str());
    Ok(CodeParts {
        exercise: segment("upper"),
        variations: segment("lower"),
        symbols: segment("symbols"),
    })
}

/// Canonicalize `code`: exercise segment untouched, variation and symbol
/// segments each sorted by code point.
pub fn normalize(code: &str) -> Result<String, InvalidExerciseCode> {
    let parts = unpack(code)?;
    let mut out = String::with_capacity(code.len());
    out.push_str(parts.exercise);
    out.extend(sorted_chars(parts.variations));
    out.extend(sorted_chars(parts.symbols));
    Ok(out)
}

fn sorted_chars(segment: &str) -> Vec<char> {
    let mut chars: Vec<char> = segment.chars().collect();
    chars.sort_unstable();
    chars
}
