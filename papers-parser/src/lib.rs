#![deny(
    clippy::panic,
    clippy::absolute_paths,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # Papers Parser
//!
//! MEDLINE record parsing and affiliation classification for PubMed papers.
//!
//! This crate provides pure, stateless functions for turning the flat-text
//! MEDLINE format returned by NCBI EFetch into [`Paper`] records, keeping only
//! papers with at least one author affiliated with a company. It has no
//! network dependencies and can be used independently of any HTTP client.
//!
//! ```
//! use papers_parser::parse_medline;
//!
//! let text = "PMID- 123\nTI  - Sample\nAU  - Smith J\nAD  - Acme Pharmaceuticals Inc\n";
//! let papers = parse_medline(text).unwrap();
//! assert_eq!(papers[0].company_affiliations, vec!["Acme Pharmaceuticals Inc"]);
//! ```

pub mod affiliation;
pub mod date;
pub mod error;
pub mod medline;

// Re-export main types for convenience
pub use affiliation::{extract_company, is_non_academic};
pub use date::normalize_publication_date;
pub use error::{ParseError, Result};
pub use medline::{Paper, parse_medline};
