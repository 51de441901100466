//! Runeclass CLI library
//!
//! This library provides the command-line interface for inspecting the
//! printable and graphic classification of Unicode code points.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
