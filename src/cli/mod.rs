//! Command line interface for the textcat binary.

pub mod args;
pub mod commands;
pub mod output;
