//! # Papers Formatter
//!
//! Output for the papers kept by [`papers_parser`]: a CSV file with a fixed
//! six-column header, or one console block per paper.

pub mod console;
pub mod csv_export;
pub mod error;
pub mod export;

// Re-export main types for convenience
pub use console::{DIVIDER, render_console};
pub use csv_export::{CSV_HEADERS, PaperRow, write_csv, write_csv_to};
pub use error::{FormatError, Result};
pub use export::{ExportOutcome, NO_RESULTS_MESSAGE, NOTHING_TO_SAVE_MESSAGE, export, export_to};
