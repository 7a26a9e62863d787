//! Library components of the `cellax` command line tool.

pub mod config;
pub mod generate;
pub mod logging;
pub mod preview;
pub mod prompt;
pub mod render;
pub mod table;
