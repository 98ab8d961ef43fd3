//! Li driver library.
//!
//! The `li` binary is a thin argument dispatcher over this crate:
//! - [`commands`] runs and parses source files
//! - [`report`] renders parse and runtime errors for the terminal
//! - [`options`] holds the flags shared by the commands

pub mod commands;
pub mod options;
pub mod report;
mod tracing_setup;

pub use options::Options;
pub use tracing_setup::init_tracing;
