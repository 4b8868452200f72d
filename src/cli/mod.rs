//! Command Line Interface (CLI) layer for iconset.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that turns the options into an
//! `IconSetParams` plan and hands it to `iconset::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
