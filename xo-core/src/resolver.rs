//! resolver.rs - Maps split parts onto pattern, template and flags.
//!
//! Field order is fixed: `<d>pattern<d>template<d>[flags]`.
//!
//! License: MIT OR APACHE 2.0

use crate::errors::ArgError;

/// The three semantic fields of a spec argument.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedSpec {
    /// The regular expression source.
    pub pattern: String,
    /// The output template with `$N` placeholders and `$N?:default` fallbacks.
    pub template: String,
    /// Mode flag characters; empty when none were given.
    pub flags: String,
}

/// Resolves split parts into a [`ParsedSpec`], validating arity.
pub fn resolve(parts: Vec<String>) -> Result<ParsedSpec, ArgError> {
    let count = parts.len();
    let mut parts = parts.into_iter();

    match (parts.next(), parts.next(), parts.next()) {
        (Some(pattern), Some(template), flags) if count <= 3 => Ok(ParsedSpec {
            pattern,
            template,
            flags: flags.unwrap_or_default(),
        }),
        (Some(_), Some(_), Some(_)) => Err(ArgError::AmbiguousDelimiter { parts: count }),
        _ => Err(ArgError::MissingPatternOrTemplate),
    }
}
