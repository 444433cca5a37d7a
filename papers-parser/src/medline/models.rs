use serde::{Deserialize, Serialize};

/// A paper with at least one company-affiliated author
///
/// Built once per MEDLINE record by [`parse_medline`](super::parse_medline)
/// and never modified afterwards.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Paper {
    /// PubMed ID from the `PMID` line
    pub pubmed_id: Option<String>,
    /// Title from the `TI` line
    pub title: Option<String>,
    /// Publication date, `YYYY-MM-DD` when recognized, otherwise the raw `DP` value
    pub publication_date: Option<String>,
    /// Authors whose affiliation was classified as non-academic, in record order
    pub non_academic_authors: Vec<String>,
    /// Sorted, de-duplicated company names
    pub company_affiliations: Vec<String>,
    /// Email taken from a "Corresponding author" contribution line
    pub corresponding_author_email: Option<String>,
}

impl Paper {
    /// Non-academic authors joined with `", "`
    pub fn non_academic_authors_joined(&self) -> String {
        self.non_academic_authors.join(", ")
    }

    /// Company affiliations joined with `", "`
    pub fn company_affiliations_joined(&self) -> String {
        self.company_affiliations.join(", ")
    }
}
