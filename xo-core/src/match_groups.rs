//! match_groups.rs - Capture values of a single match.
//!
//! License: MIT OR APACHE 2.0

/// The capture slots of one match, indexed by group number.
///
/// Slot 0 is the whole match. A group that did not participate is `None`,
/// which the renderer treats exactly like an empty capture.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchGroups {
    groups: Vec<Option<String>>,
}

impl MatchGroups {
    pub fn new(groups: Vec<Option<String>>) -> Self {
        Self { groups }
    }

    /// Number of slots, including slot 0.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Captured text at `index`, or `""` when absent or out of range.
    pub fn value(&self, index: usize) -> &str {
        self.groups
            .get(index)
            .and_then(|g| g.as_deref())
            .unwrap_or("")
    }
}

impl<S: Into<String>> FromIterator<Option<S>> for MatchGroups {
    fn from_iter<I: IntoIterator<Item = Option<S>>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|g| g.map(Into::into)).collect())
    }
}
