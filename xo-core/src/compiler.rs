//! compiler.rs - Translates mode flags and pattern text into a compiled matcher.
//!
//! Flag characters map onto `RegexBuilder` switches; compilation itself is left
//! to the `regex` crate and its diagnostics are surfaced unchanged.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::engine::Matcher;
use crate::errors::ArgError;
use crate::match_groups::MatchGroups;

/// Upper bound on the compiled program size.
pub const REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Engine-level matching options parsed from the flags field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeFlags {
    /// `i`: case-insensitive matching.
    pub case_insensitive: bool,
    /// `m`: `^` and `$` match at line boundaries.
    pub multi_line: bool,
    /// `s`: `.` also matches `\n`.
    pub dot_matches_new_line: bool,
    /// `U`: quantifiers are lazy by default and `?` makes them greedy.
    pub swap_greed: bool,
}

impl ModeFlags {
    /// Parses a flags string. Order does not matter and repeats are allowed.
    pub fn parse(flags: &str) -> Result<Self, ArgError> {
        let mut mode = Self::default();
        for c in flags.chars() {
            match c {
                'i' => mode.case_insensitive = true,
                'm' => mode.multi_line = true,
                's' => mode.dot_matches_new_line = true,
                'U' => mode.swap_greed = true,
                other => {
                    return Err(ArgError::InvalidPattern(format!(
                        "unrecognized flag '{}' (expected any of: i, m, s, U)",
                        other
                    )));
                }
            }
        }
        Ok(mode)
    }
}

/// A pattern compiled with its mode flags.
#[derive(Debug, Clone)]
pub struct CompiledMatcher {
    regex: Regex,
}

/// Compiles `pattern` under the modes named in `flags`.
pub fn compile(pattern: &str, flags: &str) -> Result<CompiledMatcher, ArgError> {
    let mode = ModeFlags::parse(flags)?;
    debug!("Compiling pattern {:?} with modes {:?}", pattern, mode);

    let regex = RegexBuilder::new(pattern)
        .case_insensitive(mode.case_insensitive)
        .multi_line(mode.multi_line)
        .dot_matches_new_line(mode.dot_matches_new_line)
        .swap_greed(mode.swap_greed)
        .size_limit(REGEX_SIZE_LIMIT)
        .build()
        .map_err(|e| ArgError::InvalidPattern(e.to_string()))?;

    debug!(
        "Pattern compiled successfully with {} capture slot(s).",
        regex.captures_len()
    );
    Ok(CompiledMatcher { regex })
}

impl Matcher for CompiledMatcher {
    fn find_all(&self, text: &str) -> Vec<MatchGroups> {
        self.regex
            .captures_iter(text)
            .map(|caps| caps.iter().map(|g| g.map(|m| m.as_str())).collect())
            .collect()
    }

    fn group_count(&self) -> usize {
        self.regex.captures_len()
    }
}
