//! liftlog-export — renderers for parsed workouts.
//!
//! Each renderer walks a `&[Workout]` once and produces one output line per
//! [`WorkoutEntry`](liftlog_core::WorkoutEntry), in the order workouts and
//! entries were parsed.

pub mod delimited;
pub mod jsonl;

pub use delimited::DelimitedRenderer;
pub use jsonl::JsonLinesRenderer;

use liftlog_core::Workout;
use std::io::{self, Write};
use std::str::FromStr;

/// Trait implemented by each output format.
pub trait Renderer {
    /// Render `workouts` as output lines, without line terminators.
    fn render(&self, workouts: &[Workout]) -> Vec<String>;
}

/// Write every rendered line to `out`, trailing whitespace stripped, each
/// followed by `\n`. Returns the number of lines written.
pub fn write_lines<R, W>(renderer: &R, workouts: &[Workout], out: &mut W) -> io::Result<usize>
where
    R: Renderer + ?Sized,
    W: Write + ?Sized,
{
    let lines = renderer.render(workouts);
    for line in &lines {
        writeln!(out, "{}", line.trim_end())?;
    }
    tracing::debug!(lines = lines.len(), "rendered output");
    Ok(lines.len())
}

/// Which renderer to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Delimited,
    Jsonl,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Delimited => write!(f, "delimited"),
            OutputFormat::Jsonl => write!(f, "jsonl"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown output format '{0}' (expected 'delimited' or 'jsonl')")]
pub struct UnknownFormat(pub String);

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "delimited" | "csv" => Ok(OutputFormat::Delimited),
            "jsonl" | "json" => Ok(OutputFormat::Jsonl),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}
