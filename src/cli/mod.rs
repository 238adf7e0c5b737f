//! Command-line interface module.

mod args;
pub mod common;
pub mod run;
pub mod scan;

pub use args::{Cli, Commands, DecorateArgs, RunArgs, ScanArgs};
