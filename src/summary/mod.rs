//! Multi-run summary: loads prior snapshot files, prints a comparison table
//! and persists the loaded rows.
mod diagnostics;
mod label;
mod loader;
mod table;
mod writer;


pub use label::{is_summary_output, label_for};
pub use loader::{SummaryRow, load_row, load_rows};
pub use table::{NO_RESULTS, render_table};
pub use writer::{DEFAULT_SUMMARY_PATH, locate_unserializable_row, render_summary, write_summary};
