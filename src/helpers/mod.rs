//! Helpers shared by the content loader and the CLI commands

mod date;

pub use date::*;
