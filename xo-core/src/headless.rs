// xo-core/src/headless.rs

//! `headless.rs`
//! Convenience wrapper running the whole pipeline in one call.
//!
//! split → resolve → compile → find_all → render, with every stage's error
//! lifted into [`XoError`].

use log::{debug, warn};

use crate::compiler::compile;
use crate::engine::Matcher;
use crate::errors::{RenderError, XoError};
use crate::renderer::render_each;
use crate::resolver::{resolve, ParsedSpec};
use crate::splitter::{split, split_bytes};

/// Parses a raw spec argument into its fields.
pub fn parse_spec(raw: &str) -> Result<ParsedSpec, XoError> {
    Ok(resolve(split(raw))?)
}

/// Parses a raw spec argument given as bytes, rejecting non-UTF-8 input.
pub fn parse_spec_bytes(raw: &[u8]) -> Result<ParsedSpec, XoError> {
    Ok(resolve(split_bytes(raw)?)?)
}

/// Decodes input bytes as UTF-8, replacing invalid sequences.
pub fn decode_input(input: &[u8]) -> String {
    match String::from_utf8_lossy(input) {
        std::borrow::Cow::Borrowed(text) => text.to_string(),
        std::borrow::Cow::Owned(text) => {
            warn!("Input is not valid UTF-8; invalid sequences were replaced.");
            text
        }
    }
}

/// Formats every match of the spec's pattern in `input` through its template.
///
/// # Arguments
///
/// * `raw_spec` - The delimiter-framed spec, e.g. `/(\w+)/<$1>/i`.
/// * `input` - The complete text to match against.
pub fn headless_format_string(raw_spec: &str, input: &str) -> Result<Vec<String>, XoError> {
    let spec = parse_spec(raw_spec)?;
    format_with_spec(&spec, input)
}

/// Same as [`headless_format_string`] for an already parsed spec.
pub fn format_with_spec(spec: &ParsedSpec, input: &str) -> Result<Vec<String>, XoError> {
    let mut lines = Vec::new();
    format_each(spec, input, |line| {
        lines.push(line);
        Ok::<(), XoError>(())
    })?;
    Ok(lines)
}

/// Compiles the spec's pattern, matches `input` in one pass and streams each
/// rendered line to `emit`. Returns the number of lines emitted.
pub fn format_each<E, F>(spec: &ParsedSpec, input: &str, emit: F) -> Result<usize, E>
where
    E: From<XoError> + From<RenderError>,
    F: FnMut(String) -> Result<(), E>,
{
    let matcher = compile(&spec.pattern, &spec.flags).map_err(XoError::from)?;
    let matches = matcher.find_all(input);
    debug!(
        "Pattern produced {} match(es) with {} capture slot(s) each.",
        matches.len(),
        matcher.group_count()
    );
    render_each(&spec.template, &matches, emit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ArgError, ParseError};

    #[test]
    fn formats_each_match() {
        let lines = headless_format_string(r"/(\w+)=(\d+)/$2:$1/", "a=1 b=2").unwrap();
        assert_eq!(lines, vec!["1:a", "2:b"]);
    }

    #[test]
    fn escaped_delimiter_survives_into_template() {
        let lines = headless_format_string(r"/(\d+)/$1\/100/", "42").unwrap();
        assert_eq!(lines, vec!["42/100"]);
    }

    #[test]
    fn stage_errors_are_lifted() {
        assert_eq!(
            headless_format_string("/1/", "1"),
            Err(XoError::Arg(ArgError::MissingPatternOrTemplate))
        );
        assert_eq!(
            headless_format_string(r"/^(\s)/$1/", "1\n"),
            Err(XoError::Render(RenderError::NoMatch))
        );
        assert_eq!(
            parse_spec_bytes(b"/a/\xc3/"),
            Err(XoError::Parse(ParseError::InvalidEncoding))
        );
        assert!(matches!(
            headless_format_string("/a/b/q", "a"),
            Err(XoError::Arg(ArgError::InvalidPattern(_)))
        ));
    }

    #[test]
    fn format_each_streams_lines() {
        let spec = parse_spec(r"/(\w)(\d)?/$1$2?:0/").unwrap();
        let mut seen = Vec::new();
        let count = format_each(&spec, "a1 b", |line| {
            seen.push(line);
            Ok::<(), XoError>(())
        })
        .unwrap();
        assert_eq!(count, 2);
        assert_eq!(seen, vec!["a1", "b0"]);

        let result = format_each(&spec, "!!", |_| Ok::<(), XoError>(()));
        assert_eq!(result, Err(XoError::Render(RenderError::NoMatch)));
    }

    #[test]
    fn lossy_input_decoding() {
        assert_eq!(decode_input(b"ok"), "ok");
        assert_eq!(decode_input(b"a\xffb"), "a\u{FFFD}b");
    }
}
