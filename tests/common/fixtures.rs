//! Static log corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of raw log lines, terminators
//! included where a file read would leave them.

/// One workout, comments between entries, a data payload containing `...`.
pub const LOG_SINGLE_WORKOUT: &[&str] = &[
    "1/28/26\n",
    "PUm...80#13,6,5...80#2\n",
    "... difficult\n",
    "HAc...5.5#11L,11R,8L,8R\n",
    "DLk...18#15,10\n",
    "... comment",
    "BRbt...35#17,11\n",
    "BCd...15#13,4\n",
    "... rushed\n",
];

/// Two consecutive workouts.
pub const LOG_TWO_WORKOUTS: &[&str] = &[
    "1/28/26\n",
    "PUm...80#13,6,5...80#2\n",
    "HAc...5.5#11L,11R,8L,8R\n",
    "1/31/26\n",
    "CPm...40#17,14,13,12\n",
];

/// Same content as [`LOG_TWO_WORKOUTS`] padded with insignificant whitespace
/// and a data payload with internal spaces.
pub const LOG_WHITESPACE: &[&str] = &[
    "   ",
    "1/28/26\n",
    "",
    "  ",
    "    PUm... 80#13,6,5...80#2\n",
    " HAc ...5.5#11L,11R,8L,8R \n",
    "",
    " 1/31/26 \n",
    "",
    "CPm...40#17, 14,1 3,12",
    "",
];

/// Codes written with unsorted variations and symbols.
pub const LOG_UNSORTED_CODES: &[&str] = &[
    "2/3/2026\n",
    "SPsd...20#10,10\n",
    "TEd_>...12#8,8\n",
    "   ... indented comment\n",
    "SPds...20#9\n",
];

/// A realistic multi-week log as it would sit in a file.
pub const LOG_FILE_TEXT: &str = "\
... January block
1/28/26
PUm...80#13,6,5
... difficult
HAc...5.5#11L,11R,8L,8R

1/31/26
CPm...40#17,14,13,12
SPsd...20#10;10

2/2/26
TEd_>...12#8,8
";

/// Generate a log of `workouts` dates with `entries` entries each.
pub fn log_high_volume(workouts: usize, entries: usize) -> Vec<String> {
    let codes = ["PUm", "HAc", "DLk", "BRbt", "SPsd", "TEd_>"];
    let mut lines = Vec::with_capacity(workouts * (entries + 2));
    for w in 0..workouts {
        lines.push(format!("{}/{}/26\n", w % 12 + 1, w % 28 + 1));
        for e in 0..entries {
            lines.push(format!("{}...{}#{},{}\n", codes[e % codes.len()], 20 + e, 10, 8));
        }
        lines.push("... rest\n".to_string());
    }
    lines
}
