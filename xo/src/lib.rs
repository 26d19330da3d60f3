// xo/src/lib.rs
//! # xo CLI Application
//!
//! The command-line front end for `xo-core`: argument parsing, logging setup,
//! input reading and diagnostics. The binary in `main.rs` is a thin wrapper
//! around [`commands::format::run_xo`].

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::format::{run_xo, Outcome};
