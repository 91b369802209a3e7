//! Presentation layer for CLI output formatting.

mod batch_display;
mod tables;

pub use batch_display::{batch_summary_lines, display_batch, item_row};
pub use tables::{format_optional, print_separator, truncate_string};
