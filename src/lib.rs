//! liftlog — exercise log to delimited text.
//!
//! Wires the layers together for the `liftlog` binary and exposes them so
//! integration tests can drive a full run without spawning a process.
//!
//! # Architecture
//!
//! ```text
//! read_log ──► liftlog_core::parse_str ──► liftlog_export::Renderer ──► stdout
//!                      │
//!                      └──► ParseError ──► report ──► stderr
//! ```

pub mod cli;

pub use cli::Cli;

use anyhow::Context;
use liftlog_core::config::Config;
use liftlog_core::ParseError;
use liftlog_export::{DelimitedRenderer, JsonLinesRenderer, OutputFormat, Renderer};
use std::io::{self, Read, Write};
use std::path::Path;

/// Read the whole log, from stdin when `path` is `-`.
pub fn read_log(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("reading log from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("reading log file '{}'", path.display()))
}

/// Resolve configuration from `--config` or the user config file. A missing
/// user file means defaults; a malformed one is an error.
pub fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config '{}'", path.display())),
        None => Config::load().context("loading user config"),
    }
}

/// Build the renderer selected by CLI flags, falling back to `config`.
pub fn renderer_for(cli: &Cli, config: &Config) -> anyhow::Result<Box<dyn Renderer>> {
    let format: OutputFormat = cli
        .format
        .as_deref()
        .unwrap_or(config.output.format.as_str())
        .parse()?;
    tracing::debug!(%format, "selected output format");
    let renderer: Box<dyn Renderer> = match format {
        OutputFormat::Delimited => {
            let delimiter = cli
                .delimiter
                .clone()
                .unwrap_or_else(|| config.output.delimiter.clone());
            let header = cli.header || config.output.header;
            Box::new(DelimitedRenderer::new(delimiter).with_header(header))
        }
        OutputFormat::Jsonl => Box::new(JsonLinesRenderer),
    };
    Ok(renderer)
}

/// Parse `text` and write the rendered lines to `out`.
pub fn convert<W: Write + ?Sized>(
    text: &str,
    renderer: &dyn Renderer,
    out: &mut W,
) -> anyhow::Result<usize> {
    let workouts = liftlog_core::parse_str(text)?;
    let written = liftlog_export::write_lines(renderer, &workouts, out)
        .context("writing output")?;
    Ok(written)
}

/// One full run: read, parse, render. Returns the number of lines written.
pub fn run<W: Write + ?Sized>(cli: &Cli, out: &mut W) -> anyhow::Result<usize> {
    let config = load_config(cli)?;
    let renderer = renderer_for(cli, &config)?;
    let text = read_log(&cli.log_file)?;
    convert(&text, renderer.as_ref(), out)
}

/// Format an error for the terminal. Parse errors also show the offending
/// line, trailing whitespace stripped.
pub fn report(err: &anyhow::Error) -> String {
    let mut msg = format!("error: {err:#}");
    if let Some(parse) = err.downcast_ref::<ParseError>() {
        msg.push_str("\n>> ");
        msg.push_str(parse.line().trim_end());
    }
    msg
}
