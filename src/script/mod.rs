//! Line-oriented command scripts
//!
//! Drives a depth chart from text commands read from a file or stdin.

mod command;
mod processor;

pub use command::Command;
pub use processor::{
    process_commands, process_script_file, OutputFormat, ProcessingStats, StandardManager,
};
