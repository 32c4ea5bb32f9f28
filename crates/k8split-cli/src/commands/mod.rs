//! CLI commands

pub mod split;
