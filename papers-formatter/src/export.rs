//! Choosing between CSV and console output
//!
//! Export never fails from the caller's point of view: write errors are
//! logged and reported through [`ExportOutcome::Failed`].

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use papers_parser::Paper;
use tracing::{error, info};

use crate::console::render_console;
use crate::csv_export::write_csv;

/// Printed instead of a report when no paper was kept
pub const NO_RESULTS_MESSAGE: &str =
    "No papers with pharmaceutical/biotech affiliations found for the given query.";

/// Printed instead of writing a CSV file when no paper was kept
pub const NOTHING_TO_SAVE_MESSAGE: &str = "No relevant papers found to save.";

/// Which output branch ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The paper list was empty and the "no results" message was shown
    NoResults,
    /// Console blocks were printed for this many papers
    Printed(usize),
    /// A CSV file with this many rows was written
    Saved { path: PathBuf, count: usize },
    /// Writing failed; the error has been logged
    Failed,
}

/// Export papers to `destination` as CSV, or to stdout when no path is given
pub fn export(papers: &[Paper], destination: Option<&Path>) -> ExportOutcome {
    let mut stdout = io::stdout().lock();
    export_to(papers, destination, &mut stdout)
}

/// Like [`export`], but console text and status messages go to `out`
pub fn export_to<W: Write>(
    papers: &[Paper],
    destination: Option<&Path>,
    out: &mut W,
) -> ExportOutcome {
    let result = match destination {
        Some(path) => save(papers, path, out),
        None => show(papers, out),
    };

    result.unwrap_or_else(|err| {
        error!(error = %err, "Error writing output");
        ExportOutcome::Failed
    })
}

fn save<W: Write>(papers: &[Paper], path: &Path, out: &mut W) -> io::Result<ExportOutcome> {
    if papers.is_empty() {
        writeln!(out, "{}", NOTHING_TO_SAVE_MESSAGE)?;
        return Ok(ExportOutcome::NoResults);
    }

    if let Err(err) = write_csv(papers, path) {
        error!(path = %path.display(), error = %err, "Error saving to CSV");
        return Ok(ExportOutcome::Failed);
    }

    writeln!(out, "Results saved to {}", path.display())?;
    info!(path = %path.display(), rows = papers.len(), "Exported papers");
    Ok(ExportOutcome::Saved {
        path: path.to_path_buf(),
        count: papers.len(),
    })
}

fn show<W: Write>(papers: &[Paper], out: &mut W) -> io::Result<ExportOutcome> {
    if papers.is_empty() {
        writeln!(out, "{}", NO_RESULTS_MESSAGE)?;
        return Ok(ExportOutcome::NoResults);
    }

    out.write_all(render_console(papers).as_bytes())?;
    out.flush()?;
    Ok(ExportOutcome::Printed(papers.len()))
}
