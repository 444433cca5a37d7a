//! CSV export of papers

use std::io::Write;
use std::path::Path;

use csv::{Writer, WriterBuilder};
use papers_parser::Paper;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Column names, in order, of the exported CSV
pub const CSV_HEADERS: [&str; 6] = [
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-academicAuthor(s)",
    "CompanyAffiliation(s)",
    "Corresponding Author Email",
];

/// One CSV row; list fields are joined with `", "` and missing values are empty
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PaperRow {
    #[serde(rename = "PubmedID")]
    pub pubmed_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Publication Date")]
    pub publication_date: String,
    #[serde(rename = "Non-academicAuthor(s)")]
    pub non_academic_authors: String,
    #[serde(rename = "CompanyAffiliation(s)")]
    pub company_affiliations: String,
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_author_email: String,
}

impl From<&Paper> for PaperRow {
    fn from(paper: &Paper) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        Self {
            pubmed_id: text(&paper.pubmed_id),
            title: text(&paper.title),
            publication_date: text(&paper.publication_date),
            non_academic_authors: paper.non_academic_authors_joined(),
            company_affiliations: paper.company_affiliations_joined(),
            corresponding_author_email: text(&paper.corresponding_author_email),
        }
    }
}

fn write_rows<W: Write>(writer: &mut Writer<W>, papers: &[Paper]) -> Result<()> {
    writer.write_record(CSV_HEADERS)?;
    for paper in papers {
        writer.serialize(PaperRow::from(paper))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the header and one row per paper into any writer
pub fn write_csv_to<W: Write>(papers: &[Paper], writer: W) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    write_rows(&mut writer, papers)
}

/// Write the header and one row per paper to `path`
///
/// The file is created or truncated in place. A failure part-way through
/// leaves whatever was already written.
pub fn write_csv(papers: &[Paper], path: &Path) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    write_rows(&mut writer, papers)?;
    debug!(path = %path.display(), rows = papers.len(), "Wrote CSV");
    Ok(())
}
