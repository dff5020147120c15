//! Output formatting for allocation plans.
//!
//! This module handles presenting and persisting allocation results:
//! - [`terminal`] - summary, grid table and colored status lines
//! - [`csv`] - CSV and JSON file export

mod csv;
mod terminal;

pub use csv::{export_csv, export_json, render_csv, DEFAULT_EXPORT_FILE};
pub use terminal::{print_banner, print_plan, render_summary, render_table, render_unmet};
