// xo/src/logger.rs
//! Logging setup for the `xo` binary.
//!
//! Logs always go to stderr so they never interleave with rendered lines.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initializes `env_logger` from `RUST_LOG` (default `warn`).
///
/// `level_override` forces the level for the `xo` and `xo_core` targets.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level_override {
        builder.filter_module("xo", level);
        builder.filter_module("xo_core", level);
    }
    builder.format_timestamp(None).target(Target::Stderr);
    // A second initialization (e.g. from tests) is harmless.
    let _ = builder.try_init();
}

/// Maps the `--debug`/`--quiet` switches to a level override.
pub fn level_override(debug: bool, quiet: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_debug() {
        assert_eq!(level_override(true, true), Some(LevelFilter::Off));
        assert_eq!(level_override(true, false), Some(LevelFilter::Debug));
        assert_eq!(level_override(false, false), None);
    }
}
