//! The `xo` command: read the input, match it and print one rendered line per match.

use anyhow::{bail, Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use xo_core::{decode_input, format_each, parse_spec_bytes, ArgError, ParsedSpec, XoError};

use crate::cli::{Cli, USAGE};
use crate::ui::output_format;

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No spec was given, so the usage line was printed.
    Usage,
    /// This many lines were rendered.
    Formatted(usize),
}

/// Runs `xo` against the given streams.
///
/// `stdin_is_terminal` is passed in rather than probed so callers can drive
/// the interactive-stdin path without a real terminal.
pub fn run_xo<R: Read, W: Write>(
    cli: &Cli,
    stdin_is_terminal: bool,
    stdin: R,
    stdout: &mut W,
) -> Result<Outcome> {
    let Some(raw_spec) = cli.spec.as_deref() else {
        writeln!(stdout, "{}", USAGE)?;
        return Ok(Outcome::Usage);
    };

    if cli.input.is_none() && stdin_is_terminal {
        bail!("Nothing passed to stdin");
    }

    let spec = parse_spec_bytes(raw_spec.as_encoded_bytes())?;
    debug!(
        "Parsed spec: pattern={:?} template={:?} flags={:?}",
        spec.pattern, spec.template, spec.flags
    );

    let input = read_input(cli.input.as_deref(), stdin)?;
    let count = format_input(&spec, &input, stdout)?;
    info!("Rendered {} line(s).", count);
    Ok(Outcome::Formatted(count))
}

/// Reads the whole input, from `path` when given, otherwise from `stdin`.
fn read_input<R: Read>(path: Option<&Path>, mut stdin: R) -> Result<String> {
    let bytes = match path {
        Some(path) => {
            info!("Reading input from file: {}", path.display());
            fs::read(path).with_context(|| format!("Failed to read input file: {}", path.display()))?
        }
        None => {
            info!("Reading input from stdin...");
            let mut buf = Vec::new();
            stdin.read_to_end(&mut buf).context("Failed to read from stdin")?;
            buf
        }
    };
    Ok(decode_input(&bytes))
}

/// Matches `input` against the spec and writes each rendered line as it is produced.
pub fn format_input<W: Write>(spec: &ParsedSpec, input: &str, out: &mut W) -> Result<usize> {
    let count = format_each(spec, input, |line| -> Result<()> {
        writeln!(out, "{}", line)?;
        Ok(())
    })?;
    out.flush()?;
    Ok(count)
}

/// Suggests a fix for errors the user can resolve by rewriting the spec.
pub fn hint_for(err: &anyhow::Error) -> Option<String> {
    match err.downcast_ref::<XoError>()? {
        XoError::Arg(ArgError::AmbiguousDelimiter { .. }) => Some(
            "The delimiter also appears inside the pattern or formatter. \
             Escape it with a backslash or pick another delimiter, e.g. '#a#b#'."
                .to_string(),
        ),
        XoError::Arg(ArgError::MissingPatternOrTemplate) => Some(USAGE.to_string()),
        _ => None,
    }
}

/// Prints `err` and any hint to stderr.
pub fn report_error(err: &anyhow::Error) {
    let stderr = io::stderr();
    let supports_color = stderr.is_terminal();
    let mut writer = stderr.lock();
    let _ = output_format::print_error_message(&mut writer, &format!("{:#}", err), supports_color);
    if let Some(hint) = hint_for(err) {
        let _ = output_format::print_hint_message(&mut writer, &hint, supports_color);
    }
}
