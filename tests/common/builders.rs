//! Test builders — ergonomic constructors for `Workout` fixtures.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use liftlog_core::{Workout, WorkoutEntry};

/// Fluent builder for [`Workout`] test fixtures.
///
/// # Example
///
/// ```rust
/// let workout = WorkoutBuilder::new("1/28/26")
///     .entry("PUm", "80#13,6,5")
///     .entry("SPsd", "20#10,10")
///     .build();
/// ```
pub struct WorkoutBuilder {
    workout: Workout,
}

impl WorkoutBuilder {
    pub fn new(date: &str) -> Self {
        Self {
            workout: Workout::new(date),
        }
    }

    /// Add an entry; the normalized code is derived from `raw_code`.
    pub fn entry(mut self, raw_code: &str, data: &str) -> Self {
        let entry = WorkoutEntry::new(raw_code, data)
            .unwrap_or_else(|e| panic!("fixture code {raw_code:?} is invalid: {e}"));
        self.workout.entries.push(entry);
        self
    }

    pub fn build(self) -> Workout {
        self.workout
    }
}

/// The workouts [`crate::common::LOG_TWO_WORKOUTS`] and
/// [`crate::common::LOG_WHITESPACE`] parse to (modulo the last data field).
pub fn two_workouts(last_data: &str) -> Vec<Workout> {
    vec![
        WorkoutBuilder::new("1/28/26")
            .entry("PUm", "80#13,6,5...80#2")
            .entry("HAc", "5.5#11L,11R,8L,8R")
            .build(),
        WorkoutBuilder::new("1/31/26").entry("CPm", last_data).build(),
    ]
}
