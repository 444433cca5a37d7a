//! MEDLINE flat-text records
//!
//! MEDLINE is the line-oriented export format of PubMed EFetch
//! (`rettype=medline&retmode=text`). Each line starts with a tag padded to
//! four characters and a `- ` separator, and records are separated by a blank
//! line.

pub mod models;
pub mod parser;

pub use models::Paper;
pub use parser::parse_medline;
