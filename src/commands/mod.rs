//! CLI commands

pub mod parse;
pub mod render;
