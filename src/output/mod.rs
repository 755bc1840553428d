//! Terminal output formatting
//!
//! Text shared by the front ends, and display helpers for the line modes.

pub mod display;
pub mod formatters;

pub use display::{print_check_result, write_history_entry, write_outcome};
