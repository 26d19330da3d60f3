//! renderer.rs - Expands the output template once per match.
//!
//! Rendering a match happens in two phases. First, for every group index in
//! increasing order, a `$N?:default` expression is stripped down to `$N` and
//! its default memoized in the run's [`FallbackTable`]. Then every `$N` token
//! is replaced by group N's value, or by its default when the capture is
//! absent or empty.
//!
//! Defaults may reference lower-numbered groups of the same match, which are
//! expanded; references to the same or a higher group expand to nothing.
//! Captured text is inserted verbatim and never re-scanned for placeholders.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::errors::RenderError;
use crate::fallback::FallbackTable;
use crate::match_groups::MatchGroups;

/// `$` followed by a maximal run of digits.
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$([0-9]+)").expect("placeholder pattern is valid"));

/// Replaces each `$N` token in `text` with `lookup(N)`, leaving tokens for
/// which `lookup` returns `None` untouched.
fn substitute<'v>(text: &str, lookup: impl Fn(usize) -> Option<&'v str>) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &Captures| {
            match caps[1].parse::<usize>().ok().and_then(&lookup) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Renders matches against one template, carrying the fallback memo across them.
#[derive(Debug, Clone)]
pub struct Renderer<'t> {
    template: &'t str,
    fallbacks: FallbackTable,
}

impl<'t> Renderer<'t> {
    pub fn new(template: &'t str) -> Self {
        Self {
            template,
            fallbacks: FallbackTable::new(),
        }
    }

    pub fn fallbacks(&self) -> &FallbackTable {
        &self.fallbacks
    }

    /// Produces the output line for a single match.
    pub fn render_match(&mut self, groups: &MatchGroups) -> String {
        let mut result = self.template.to_string();
        let mut values: Vec<String> = Vec::with_capacity(groups.len());

        for index in 0..groups.len() {
            self.fallbacks.strip(index, &mut result);

            let captured = groups.value(index);
            let value = match self.fallbacks.get(index) {
                Some(default) if captured.is_empty() => {
                    substitute(default, |n| Some(values.get(n).map_or("", String::as_str)))
                }
                _ => captured.to_string(),
            };
            values.push(value);
        }

        substitute(&result, |n| values.get(n).map(String::as_str))
    }
}

/// Renders every match in order, handing each line to `emit` as soon as it is
/// produced. Returns the number of lines emitted.
///
/// Zero matches is an error, not an empty success. An error from `emit` stops
/// rendering and is returned as is.
pub fn render_each<E, F>(template: &str, matches: &[MatchGroups], mut emit: F) -> Result<usize, E>
where
    E: From<RenderError>,
    F: FnMut(String) -> Result<(), E>,
{
    if matches.is_empty() {
        return Err(RenderError::NoMatch.into());
    }

    let mut renderer = Renderer::new(template);
    for groups in matches {
        emit(renderer.render_match(groups))?;
    }
    debug!(
        "Rendered {} line(s) with {} fallback default(s).",
        matches.len(),
        renderer.fallbacks().len()
    );
    Ok(matches.len())
}

/// Renders every match in order, one line per match.
pub fn render(template: &str, matches: &[MatchGroups]) -> Result<Vec<String>, RenderError> {
    let mut lines = Vec::with_capacity(matches.len());
    render_each(template, matches, |line| {
        lines.push(line);
        Ok::<(), RenderError>(())
    })?;
    Ok(lines)
}
