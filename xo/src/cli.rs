// xo/src/cli.rs
//! Command-line interface definition for `xo`.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Usage line printed when `xo` is run without a spec.
pub const USAGE: &str = "Usage: xo '/<pattern>/<formatter>/[flags]'";

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "xo",
    version = env!("CARGO_PKG_VERSION"),
    about = "Format regex matches from stdin through a capture template",
    long_about = "xo reads text from stdin, matches it against a single regular expression and prints one line per match, rendered through a template. The spec argument is framed by its first character: '/<pattern>/<formatter>/[flags]'. Inside the formatter, $N is capture group N and $N?:default supplies a default when the group is empty. Flags: i (case-insensitive), m (multi-line anchors), s (dot matches newline), U (swap greed). Escape the delimiter inside a part with a backslash.",
    override_usage = "xo [OPTIONS] '/<pattern>/<formatter>/[flags]'"
)]
pub struct Cli {
    /// The delimiter-framed spec: pattern, formatter and optional flags.
    #[arg(value_name = "SPEC", allow_hyphen_values = true, value_parser = clap::value_parser!(OsString))]
    pub spec: Option<OsString>,

    /// Read input from a file instead of stdin.
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input: Option<PathBuf>,

    /// Enable debug logging for xo (overrides RUST_LOG).
    #[arg(long, short = 'd', conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// Suppress all logging.
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,
}
