//! errors.rs - Custom error types for the xo-core library.
//!
//! Each pipeline stage has its own error enum so callers can tell a malformed
//! argument apart from a pattern the engine rejected or an input with no
//! matches. `XoError` wraps all of them for one-shot callers.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// Errors raised while splitting the raw spec argument into parts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Argument is not valid UTF-8 text")]
    InvalidEncoding,
}

/// Errors raised while turning parts into a compiled matcher.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    #[error("No pattern or formatter specified")]
    MissingPatternOrTemplate,

    /// More parts than pattern, template and flags; usually the delimiter
    /// also occurs unescaped inside the pattern or template.
    #[error("Found {parts} parts where at most 3 were expected")]
    AmbiguousDelimiter { parts: usize },

    #[error("Invalid regular expression: {0}")]
    InvalidPattern(String),
}

/// Errors raised while rendering matches.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("No matches found")]
    NoMatch,
}

/// Umbrella error for the whole split → resolve → compile → render pipeline.
///
/// New variants may be added as the pipeline grows, hence `#[non_exhaustive]`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum XoError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Arg(#[from] ArgError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
