//! Command-line arguments for the `liftlog` binary.

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "liftlog",
    version,
    about = "Convert an exercise log into one delimited line per exercise"
)]
pub struct Cli {
    /// Exercise log to read, or `-` for stdin.
    #[arg(value_name = "LOG_FILE")]
    pub log_file: PathBuf,

    /// Output format: `delimited` or `jsonl` (default from config).
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Field delimiter for delimited output (default from config, `;`).
    #[arg(long, short = 'd', value_name = "STR")]
    pub delimiter: Option<String>,

    /// Print a `date;code;data` header line first.
    #[arg(long)]
    pub header: bool,

    /// Read configuration from this file instead of ~/.config/liftlog/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write debug logs to stderr (filter with RUST_LOG).
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    pub fn reads_stdin(&self) -> bool {
        self.log_file.as_os_str() == "-"
    }
}
