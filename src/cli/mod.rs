//! Command-line interface module.

mod args;
pub mod sync;

pub use args::{Cli, Commands, SyncArgs};
