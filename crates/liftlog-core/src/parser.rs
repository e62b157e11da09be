//! Log parser: turns raw log lines into dated [`Workout`]s.
//!
//! The log is read line by line through a two-state machine:
//!
//! ```text
//!            date                      date (current has entries)
//! Start ──────────────► InWorkout ◄──────────────┐
//!   │ blank/comment         │ entry / blank / comment
//!   └──► Start              └───────────────────────┘
//! ```
//!
//! Comment lines start with `...` after leading whitespace; blank lines are
//! whitespace only. Both are ignored in either state. An entry line is
//! `CODE...DATA`, split on the first `...`.
//!
//! A trailing workout with no entries at end of input is accepted. Only a new
//! date arriving while the current workout is still empty is rejected.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace, warn};

use crate::error::ParseError;
use crate::types::{Workout, WorkoutEntry};

/// Separates the exercise code from the sets/reps data, and opens comments.
pub const SEPARATOR: &str = "...";

static DATE_PREFIX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d{1,2}/\d{1,2}/\d{2,4})").expect("built-in date pattern must compile")
});

// ---------------------------------------------------------------------------
// Line classification
// ---------------------------------------------------------------------------

/// What a single raw line is, independent of parser state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Comment or whitespace-only line.
    Blank,
    /// Date line; holds the matched date text only.
    Date(&'a str),
    /// Anything else, expected to be `CODE...DATA`.
    Entry,
}

/// Classify `line`. Comments and blanks win over dates, dates over entries.
pub fn classify(line: &str) -> LineKind<'_> {
    if line.trim_start().starts_with(SEPARATOR) || line.trim().is_empty() {
        return LineKind::Blank;
    }
    match DATE_PREFIX_PATTERN.captures(line).and_then(|c| c.get(1)) {
        Some(date) => LineKind::Date(date.as_str()),
        None => LineKind::Entry,
    }
}

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    #[default]
    Start,
    InWorkout,
}

/// What a transition does to the result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Effect<'a> {
    None,
    OpenWorkout(&'a str),
    AppendEntry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    UnexpectedLine,
    EmptyWorkout,
    NoCurrentWorkout,
}

impl Rejection {
    fn at(self, line_no: usize, line: &str) -> ParseError {
        let line = line.to_string();
        match self {
            Rejection::UnexpectedLine => ParseError::UnexpectedLine { line_no, line },
            Rejection::EmptyWorkout => ParseError::EmptyWorkout { line_no, line },
            Rejection::NoCurrentWorkout => ParseError::InternalInconsistency { line_no, line },
        }
    }
}

/// `current` is the last workout opened so far, if any.
fn transition<'a>(
    state: State,
    kind: LineKind<'a>,
    current: Option<&Workout>,
) -> Result<(State, Effect<'a>), Rejection> {
    match state {
        State::Start => match kind {
            LineKind::Blank => Ok((State::Start, Effect::None)),
            LineKind::Date(date) => Ok((State::InWorkout, Effect::OpenWorkout(date))),
            LineKind::Entry => Err(Rejection::UnexpectedLine),
        },
        State::InWorkout => {
            let current = current.ok_or(Rejection::NoCurrentWorkout)?;
            match kind {
                LineKind::Blank => Ok((State::InWorkout, Effect::None)),
                LineKind::Date(_) if current.is_empty() => Err(Rejection::EmptyWorkout),
                LineKind::Date(date) => Ok((State::InWorkout, Effect::OpenWorkout(date))),
                LineKind::Entry => Ok((State::InWorkout, Effect::AppendEntry)),
            }
        }
    }
}

fn parse_entry(line_no: usize, line: &str) -> Result<WorkoutEntry, ParseError> {
    let missing_data = || ParseError::MissingData {
        line_no,
        line: line.to_string(),
    };
    let (code, data) = line.trim().split_once(SEPARATOR).ok_or_else(missing_data)?;
    let data = data.trim();
    if data.is_empty() {
        return Err(missing_data());
    }
    WorkoutEntry::new(code.trim(), data).map_err(|source| ParseError::InvalidExerciseCode {
        line_no,
        line: line.to_string(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Stateless exercise-log parser. Each [`LogParser::parse`] call starts from
/// scratch and owns nothing once it returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogParser;

impl LogParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse `lines` in order. Line terminators may be present or not.
    ///
    /// The first error aborts the run; no partial result is returned.
    pub fn parse<I, S>(&self, lines: I) -> Result<Vec<Workout>, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = State::default();
        let mut workouts: Vec<Workout> = Vec::new();

        for (line_no, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let kind = classify(line);
            let (next, effect) =
                transition(state, kind, workouts.last()).map_err(|r| r.at(line_no, line))?;

            match effect {
                Effect::None => trace!(line_no, "skipping comment or blank line"),
                Effect::OpenWorkout(date) => {
                    debug!(line_no, date, "opening workout");
                    workouts.push(Workout::new(date));
                }
                Effect::AppendEntry => {
                    let entry = parse_entry(line_no, line)?;
                    trace!(line_no, code = %entry.normalized_code, "entry accepted");
                    workouts
                        .last_mut()
                        .ok_or_else(|| Rejection::NoCurrentWorkout.at(line_no, line))?
                        .entries
                        .push(entry);
                }
            }
            state = next;
        }

        if let Some(last) = workouts.last().filter(|w| w.is_empty()) {
            warn!(date = %last.date, "log ends with a workout that has no entries");
        }
        debug!(
            workouts = workouts.len(),
            entries = workouts.iter().map(|w| w.entries.len()).sum::<usize>(),
            "parse complete"
        );
        Ok(workouts)
    }
}

/// Parse a whole log held in memory. Lines keep their `\n` terminators, so
/// line numbers in errors match the text's own lines (0-based).
pub fn parse_str(text: &str) -> Result<Vec<Workout>, ParseError> {
    LogParser::new().parse(text.split_inclusive('\n'))
}
