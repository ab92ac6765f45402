//! Command-line interface for the forge census.

pub mod commands;

pub use commands::run;
