//! Report sorting and rendering for the forge census.

pub mod table;

pub use table::{render_table, sort_rows};
