//! fallback.rs - Detection and memoization of `$N?:default` expressions.
//!
//! A fallback is a `$`, the decimal digits of a group index, `?:`, and a
//! maximal run of non-whitespace characters (the default). Anything that does
//! not fit that shape, such as `4?:FOUR` without the `$`, is plain text.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashMap;
use std::ops::Range;

use log::debug;

const FALLBACK_MARKER: &str = "?:";

/// Location of one fallback expression inside a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackExpr {
    /// Byte range of the whole `$N?:default` expression.
    pub span: Range<usize>,
    /// Byte range of the `?:default` suffix.
    pub suffix: Range<usize>,
    /// Byte range of the default value.
    pub default: Range<usize>,
}

/// Finds the first fallback expression for group `index` in `text`.
pub fn find_fallback(text: &str, index: usize) -> Option<FallbackExpr> {
    let head = format!("${}{}", index, FALLBACK_MARKER);

    text.match_indices(&head).find_map(|(start, _)| {
        let default_start = start + head.len();
        let default_len = text[default_start..]
            .find(char::is_whitespace)
            .unwrap_or(text.len() - default_start);
        if default_len == 0 {
            return None;
        }
        let end = default_start + default_len;
        Some(FallbackExpr {
            span: start..end,
            suffix: default_start - FALLBACK_MARKER.len()..end,
            default: default_start..end,
        })
    })
}

/// Per-run memo of group index to default value.
///
/// Entries are only ever added; the first default found for an index wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FallbackTable {
    defaults: HashMap<usize, String>,
}

impl FallbackTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.defaults.get(&index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.defaults.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty()
    }

    /// Strips the first `?:default` suffix for `index` from `text`, leaving a
    /// bare `$index`, and records the default if none is known yet.
    ///
    /// Returns `false` and leaves `text` untouched when no fallback exists.
    pub fn strip(&mut self, index: usize, text: &mut String) -> bool {
        let Some(expr) = find_fallback(text, index) else {
            return false;
        };

        if !self.defaults.contains_key(&index) {
            let default = text[expr.default.clone()].to_string();
            debug!("Recorded fallback for group {}: {:?}", index, default);
            self.defaults.insert(index, default);
        }
        text.replace_range(expr.suffix, "");
        true
    }
}
