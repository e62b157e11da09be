//! JSON lines renderer: one object per entry, flattened with its date.

use liftlog_core::Workout;
use serde::Serialize;

use crate::Renderer;

#[derive(Serialize)]
struct Row<'a> {
    date: &'a str,
    raw_code: &'a str,
    normalized_code: &'a str,
    data: &'a str,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonLinesRenderer;

impl Renderer for JsonLinesRenderer {
    fn render(&self, workouts: &[Workout]) -> Vec<String> {
        workouts
            .iter()
            .flat_map(|w| {
                w.entries.iter().map(move |e| Row {
                    date: &w.date,
                    raw_code: &e.raw_code,
                    normalized_code: &e.normalized_code,
                    data: &e.data,
                })
            })
            .map(|row| {
                serde_json::to_string(&row).expect("a row of string fields always serializes")
            })
            .collect()
    }
}
