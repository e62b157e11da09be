//! Core types for liftlog-core.
//!
//! This module defines the records the parser produces and the renderers
//! consume: a dated [`Workout`] owning its ordered [`WorkoutEntry`] values.

use serde::Serialize;

use crate::code::{self, InvalidExerciseCode};

/// A dated collection of exercise entries logged together.
///
/// `date` is the raw matched date substring (e.g. `"1/28/26"`). It is never
/// parsed into a calendar type, so `"13/45/99"` is kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Workout {
    pub date: String,
    pub entries: Vec<WorkoutEntry>,
}

impl Workout {
    /// Open a workout with no entries yet.
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            entries: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One exercise within a [`Workout`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkoutEntry {
    /// Exercise code exactly as written (after trimming).
    pub raw_code: String,
    /// Canonical form of `raw_code`, see [`code::normalize`].
    pub normalized_code: String,
    /// Free-text sets/reps payload. Never empty; internal whitespace is kept.
    pub data: String,
}

impl WorkoutEntry {
    /// Build an entry from a trimmed code and payload, normalizing the code.
    pub fn new(
        raw_code: impl Into<String>,
        data: impl Into<String>,
    ) -> Result<Self, InvalidExerciseCode> {
        let raw_code = raw_code.into();
        let normalized_code = code::normalize(&raw_code)?;
        Ok(Self {
            raw_code,
            normalized_code,
            data: data.into(),
        })
    }
}
