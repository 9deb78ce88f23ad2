//! Command-line interface definitions.

mod args;
pub mod help;

pub use args::{Cli, Command, ConfigAction, DbAction, IdentifyArgs};
