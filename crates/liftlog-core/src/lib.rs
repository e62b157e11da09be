//! liftlog-core — exercise log parsing.
//!
//! This crate turns a free-text exercise log into dated workouts:
//!
//! ```text
//! 1/28/26
//! PUm...80#13,6,5
//! ... felt heavy
//! SPsd...20#10,10
//! ```
//!
//! becomes one [`Workout`] dated `1/28/26` with two [`WorkoutEntry`] values,
//! the second carrying the normalized code `SPds`.
//!
//! # Layers
//!
//! ```text
//! code (normalizer) ──► parser ──► Vec<Workout> ──► liftlog-export
//! ```

pub mod code;
pub mod config;
pub mod error;
pub mod parser;
pub mod types;

pub use code::{normalize, unpack, CodeParts, InvalidExerciseCode};
pub use error::{ErrorKind, ParseError};
pub use parser::{classify, parse_str, LineKind, LogParser};
pub use types::{Workout, WorkoutEntry};
