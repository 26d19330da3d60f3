// xo-core/src/engine.rs
//! Defines the `Matcher` trait, the seam between the renderer and the regex engine.
//!
//! The renderer only needs an ordered list of capture groups per match, so any
//! engine that can produce them can drive it. `compiler::CompiledMatcher` is
//! the implementation backed by the `regex` crate.
//!
//! License: MIT OR APACHE 2.0

use crate::match_groups::MatchGroups;

/// A compiled pattern that can be run against a complete input.
pub trait Matcher {
    /// Returns every non-overlapping match, left to right.
    ///
    /// Each entry holds slot 0 (the whole match) followed by one slot per
    /// declared capture group.
    fn find_all(&self, text: &str) -> Vec<MatchGroups>;

    /// Number of capture slots each match carries, including slot 0.
    fn group_count(&self) -> usize;
}
