//! Command-line interface
//!
//! Standard host startup arguments; each can also come from the environment.

pub mod types;

pub use types::Cli;
