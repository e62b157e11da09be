//! Parse errors.
//!
//! Every variant carries the 0-based index of the offending line and its raw
//! text. `Display` renders only the message and location; showing the line
//! itself is left to the caller.

use thiserror::Error;

use crate::code::InvalidExerciseCode;

/// Why a parse run was aborted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A line before the first date was not blank, a comment, or a date.
    #[error("expected a date, comment, or whitespace (line {line_no})")]
    UnexpectedLine { line_no: usize, line: String },

    /// A date line arrived while the previous workout had no entries.
    #[error("previous date has no entries (line {line_no})")]
    EmptyWorkout { line_no: usize, line: String },

    /// An entry line had no `...` separator or nothing after it.
    #[error("sets/reps data must follow the exercise code (line {line_no})")]
    MissingData { line_no: usize, line: String },

    /// The entry's code did not have the `EEEvvv$$$` shape; see `source`.
    #[error("invalid exercise code (line {line_no})")]
    InvalidExerciseCode {
        line_no: usize,
        line: String,
        #[source]
        source: InvalidExerciseCode,
    },

    /// The parser was in a workout with no workout recorded.
    #[error("no workouts recorded while inside a workout (line {line_no})")]
    InternalInconsistency { line_no: usize, line: String },
}

/// Discriminant of [`ParseError`], for callers that branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnexpectedLine,
    EmptyWorkout,
    MissingData,
    InvalidExerciseCode,
    InternalInconsistency,
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::UnexpectedLine { .. } => ErrorKind::UnexpectedLine,
            ParseError::EmptyWorkout { .. } => ErrorKind::EmptyWorkout,
            ParseError::MissingData { .. } => ErrorKind::MissingData,
            ParseError::InvalidExerciseCode { .. } => ErrorKind::InvalidExerciseCode,
            ParseError::InternalInconsistency { .. } => ErrorKind::InternalInconsistency,
        }
    }

    /// 0-based index of the offending line.
    pub fn line_no(&self) -> usize {
        match self {
            ParseError::UnexpectedLine { line_no, .. }
            | ParseError::EmptyWorkout { line_no, .. }
            | ParseError::MissingData { line_no, .. }
            | ParseError::InvalidExerciseCode { line_no, .. }
            | ParseError::InternalInconsistency { line_no, .. } => *line_no,
        }
    }

    /// The offending line exactly as it was fed to the parser.
    pub fn line(&self) -> &str {
        match self {
            ParseError::UnexpectedLine { line, .. }
            | ParseError::EmptyWorkout { line, .. }
            | ParseError::MissingData { line, .. }
            | ParseError::InvalidExerciseCode { line, .. }
            | ParseError::InternalInconsistency { line, .. } => line,
        }
    }
}
