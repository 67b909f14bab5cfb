//! CLI module for the Pomodoro Timer.
//!
//! This module provides the command-line interface:
//! - `commands`: Flag definitions using clap derive and variant selection
//! - `display`: Error output

pub mod commands;
pub mod display;

pub use commands::{Cli, Variant};
pub use display::Display;
