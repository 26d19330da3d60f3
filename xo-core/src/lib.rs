// xo-core/src/lib.rs
//! # xo Core Library
//!
//! `xo-core` holds the platform-independent logic behind `xo`: it reads a
//! delimiter-framed spec such as `/(\w+):(\d+)?/$1 -> $2?:none/m`, compiles the
//! pattern, and renders one line per match through the template.
//!
//! ## Modules
//!
//! * `splitter`: Splits the raw spec on its first character, honoring `\<delimiter>` escapes.
//! * `resolver`: Maps the split parts onto pattern, template and flags.
//! * `compiler`: Turns flags and pattern into a [`CompiledMatcher`].
//! * `engine`: Defines the [`Matcher`] trait the renderer is driven by.
//! * `match_groups`: The capture values of a single match.
//! * `fallback`: Detects `$N?:default` expressions and memoizes their defaults.
//! * `renderer`: Expands the template for each match.
//! * `headless`: One-shot helpers running the whole pipeline.
//! * `errors`: Typed errors for each stage.
//!
//! ## Usage Example
//!
//! ```rust
//! use xo_core::headless_format_string;
//!
//! let lines = headless_format_string(r"/(\w+)@(\w+)?/$1 at $2?:home/", "bob@work ann@").unwrap();
//! assert_eq!(lines, vec!["bob at work", "ann at home"]);
//! ```
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod compiler;
pub mod engine;
pub mod errors;
pub mod fallback;
pub mod headless;
pub mod match_groups;
pub mod renderer;
pub mod resolver;
pub mod splitter;

pub use compiler::{compile, CompiledMatcher, ModeFlags};
pub use engine::Matcher;
pub use errors::{ArgError, ParseError, RenderError, XoError};
pub use fallback::FallbackTable;
pub use headless::{decode_input, format_each, format_with_spec, headless_format_string, parse_spec, parse_spec_bytes};
pub use match_groups::MatchGroups;
pub use renderer::{render, render_each, Renderer};
pub use resolver::{resolve, ParsedSpec};
pub use splitter::{split, split_bytes};
