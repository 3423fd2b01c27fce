//! Command Line Interface (CLI) layer for alphamerge.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`). It wires the three positional
//! paths and the optional flags to `alphamerge::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
