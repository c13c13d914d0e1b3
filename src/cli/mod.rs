//! Command-line interface module.

mod args;
pub mod build;
pub mod meta;
pub mod theme;

pub use args::{BuildArgs, Cli, Commands, ThemeAction};
