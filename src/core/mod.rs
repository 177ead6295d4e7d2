//! Core utilities shared by both tools
//!
//! - `files`: output file creation
//! - `logging`: tracing subscriber setup

pub mod files;
pub mod logging;

pub use files::{create_output_file, write_string};
pub use logging::init_tracing;
