//! splitter.rs - Delimiter-aware splitting of the raw spec argument.
//!
//! The first character of the argument is the delimiter. The rest is cut on
//! every unescaped occurrence of it; `\<delimiter>` yields a literal delimiter
//! inside a part. Empty runs between delimiters produce no part.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::errors::ParseError;

const ESCAPE: char = '\\';

/// Splits raw argument bytes, rejecting anything that is not UTF-8.
pub fn split_bytes(raw: &[u8]) -> Result<Vec<String>, ParseError> {
    let text = std::str::from_utf8(raw).map_err(|_| ParseError::InvalidEncoding)?;
    Ok(split(text))
}

/// Splits `raw` into its non-empty parts using its first character as the delimiter.
///
/// An empty string, or one made only of delimiters, yields no parts.
/// Callers holding raw bytes that may not be UTF-8 should use [`split_bytes`].
pub fn split(raw: &str) -> Vec<String> {
    let mut chars = raw.chars().peekable();
    let Some(delimiter) = chars.next() else {
        return Vec::new();
    };

    let mut parts = Vec::new();
    let mut buffer = String::new();

    while let Some(c) = chars.next() {
        if c == ESCAPE && chars.peek() == Some(&delimiter) {
            chars.next();
            buffer.push(delimiter);
        } else if c == delimiter {
            if !buffer.is_empty() {
                parts.push(std::mem::take(&mut buffer));
            }
        } else {
            buffer.push(c);
        }
    }

    if !buffer.is_empty() {
        parts.push(buffer);
    }

    debug!("Split argument on {:?} into {} part(s).", delimiter, parts.len());
    parts
}
