//! Command-line interface

mod args;
mod commands;

pub use args::{Cli, Command, ScanArgs};
pub use commands::run;
