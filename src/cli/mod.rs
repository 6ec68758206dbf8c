//! Command-line interface module.

mod args;
pub mod check;
pub mod common;
pub mod resolve;
pub mod update;

pub use args::{Cli, Commands, DayArgs, UpdateArgs};
