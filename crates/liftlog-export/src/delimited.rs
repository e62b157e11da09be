//! Delimited-text renderer: `date;normalized_code;data`, one line per entry.
//!
//! Fields are not escaped. A delimiter inside `data` passes through as is.

use liftlog_core::Workout;

use crate::Renderer;

pub const DEFAULT_DELIMITER: &str = ";";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimitedRenderer {
    delimiter: String,
    header: bool,
}

impl Default for DelimitedRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER)
    }
}

impl DelimitedRenderer {
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
            header: false,
        }
    }

    /// Prefix the output with a `date;code;data` line when there is at least
    /// one workout.
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }
}

impl Renderer for DelimitedRenderer {
    fn render(&self, workouts: &[Workout]) -> Vec<String> {
        let d = self.delimiter.as_str();
        let mut lines = Vec::new();
        if self.header && !workouts.is_empty() {
            lines.push(["date", "code", "data"].join(d));
        }
        for workout in workouts {
            for entry in &workout.entries {
                lines.push(format!(
                    "{}{d}{}{d}{}",
                    workout.date, entry.normalized_code, entry.data
                ));
            }
        }
        lines
    }
}
