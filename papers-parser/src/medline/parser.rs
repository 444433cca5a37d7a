//! MEDLINE record parser
//!
//! Splits an EFetch MEDLINE blob into records, reads the handful of tags that
//! matter for affiliation filtering, and keeps only papers with at least one
//! extracted company name.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, instrument};

use super::models::Paper;
use crate::affiliation::{extract_company, is_non_academic};
use crate::date::normalize_publication_date;
use crate::error::{ParseError, Result};

const RECORD_SEPARATOR: &str = "\n\n";
const CORRESPONDING_AUTHOR_MARKER: &str = "Corresponding author";

/// A single MEDLINE line, classified by its tag prefix
#[derive(Debug, PartialEq, Eq)]
enum MedlineLine<'a> {
    Pmid(&'a str),
    Title(&'a str),
    PublicationDate(&'a str),
    Author(&'a str),
    Affiliation(&'a str),
    /// `FAU` full author name
    FullAuthor,
    /// `ADR` author address
    AuthorAddress,
    /// `CON` contribution line, kept whole for the corresponding-author check
    Contribution(&'a str),
    Other,
}

impl<'a> MedlineLine<'a> {
    fn classify(line: &'a str) -> Self {
        let value = |prefix: &str| line.strip_prefix(prefix).map(str::trim);

        if let Some(v) = value("PMID- ") {
            MedlineLine::Pmid(v)
        } else if let Some(v) = value("TI  - ") {
            MedlineLine::Title(v)
        } else if let Some(v) = value("DP  - ") {
            MedlineLine::PublicationDate(v)
        } else if let Some(v) = value("AU  - ") {
            MedlineLine::Author(v)
        } else if let Some(v) = value("AD  - ") {
            MedlineLine::Affiliation(v)
        } else if line.starts_with("FAU - ") {
            MedlineLine::FullAuthor
        } else if line.starts_with("ADR - ") {
            MedlineLine::AuthorAddress
        } else if line.starts_with("CON - ") {
            MedlineLine::Contribution(line)
        } else {
            MedlineLine::Other
        }
    }
}

/// Accumulates the fields of one record while its lines are read
#[derive(Debug, Default)]
struct RecordBuilder {
    pubmed_id: Option<String>,
    title: Option<String>,
    publication_date: Option<String>,
    /// Running author list; an `AD` line is attributed to its last entry
    authors: Vec<String>,
    non_academic_authors: Vec<String>,
    company_affiliations: BTreeSet<String>,
    corresponding_author_email: Option<String>,
}

impl RecordBuilder {
    fn apply(&mut self, line: &str) -> Result<()> {
        match MedlineLine::classify(line) {
            MedlineLine::Pmid(pmid) => self.pubmed_id = Some(pmid.to_string()),
            MedlineLine::Title(title) => self.title = Some(title.to_string()),
            MedlineLine::PublicationDate(raw) => {
                self.publication_date = Some(normalize_publication_date(raw))
            }
            MedlineLine::Author(name) => self.authors.push(name.to_string()),
            MedlineLine::Affiliation(affiliation) => self.apply_affiliation(affiliation, line)?,
            MedlineLine::Contribution(contribution) => {
                if contribution.contains(CORRESPONDING_AUTHOR_MARKER) {
                    if let Some(email) = extract_email(contribution) {
                        self.corresponding_author_email = Some(email);
                    }
                }
            }
            MedlineLine::FullAuthor | MedlineLine::AuthorAddress | MedlineLine::Other => {}
        }
        Ok(())
    }

    /// Attribute a non-academic affiliation to the most recently listed author.
    ///
    /// This is positional: it assumes each `AD` line directly follows the `AU`
    /// line of the same person. Records that group affiliations differently
    /// are attributed to whichever author came last.
    fn apply_affiliation(&mut self, affiliation: &str, line: &str) -> Result<()> {
        if !is_non_academic(affiliation) {
            return Ok(());
        }

        let author = self
            .authors
            .last()
            .ok_or_else(|| ParseError::AffiliationWithoutAuthor {
                line: line.to_string(),
            })?;
        self.non_academic_authors.push(author.clone());

        if let Some(company) = extract_company(affiliation) {
            self.company_affiliations.insert(company);
        }
        Ok(())
    }

    /// Finish the record; papers without any extracted company are dropped
    fn finish(self) -> Option<Paper> {
        if self.company_affiliations.is_empty() {
            if !self.non_academic_authors.is_empty() {
                debug!(
                    pmid = ?self.pubmed_id,
                    "Non-academic authors found but no company name extracted, dropping record"
                );
            }
            return None;
        }

        Some(Paper {
            pubmed_id: self.pubmed_id,
            title: self.title,
            publication_date: self.publication_date,
            non_academic_authors: self.non_academic_authors,
            company_affiliations: self.company_affiliations.into_iter().collect(),
            corresponding_author_email: self.corresponding_author_email,
        })
    }
}

fn extract_email(contribution: &str) -> Option<String> {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL_REGEX
        .get_or_init(|| Regex::new(r"Email: (\S+)").expect("Failed to compile email regex"));

    re.captures(contribution)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Parse a MEDLINE blob into the papers that have a company affiliation
///
/// Records are separated by blank lines and returned in source order. Only
/// records with at least one extracted company name are kept.
///
/// # Errors
///
/// Returns [`ParseError::AffiliationWithoutAuthor`] when a non-academic `AD`
/// line appears before any `AU` line of its record.
///
/// # Example
///
/// ```
/// use papers_parser::parse_medline;
///
/// let text = "\
/// PMID- 123
/// TI  - Sample
/// DP  - 2020/05/01 00:00
/// AU  - Smith J
/// AD  - Acme Pharmaceuticals Inc
///
/// PMID- 456
/// TI  - Academic only
/// AU  - Doe A
/// AD  - Dept of Biology, University of X
/// ";
///
/// let papers = parse_medline(text).unwrap();
/// assert_eq!(papers.len(), 1);
/// assert_eq!(papers[0].pubmed_id.as_deref(), Some("123"));
/// assert_eq!(papers[0].publication_date.as_deref(), Some("2020-05-01"));
/// ```
#[instrument(skip(text), fields(bytes = text.len()))]
pub fn parse_medline(text: &str) -> Result<Vec<Paper>> {
    let normalized = text.replace("\r\n", "\n");
    let mut papers = Vec::new();
    let mut record_count = 0usize;

    for record in normalized.trim().split(RECORD_SEPARATOR) {
        record_count += 1;
        let mut builder = RecordBuilder::default();
        for line in record.lines() {
            builder.apply(line)?;
        }
        if let Some(paper) = builder.finish() {
            papers.push(paper);
        }
    }

    debug!(
        records = record_count,
        retained = papers.len(),
        "Parsed MEDLINE records"
    );
    Ok(papers)
}
