//! # Papers Client
//!
//! Queries PubMed through NCBI E-utilities and returns the papers that have at
//! least one industry-affiliated author.
//!
//! The client runs two requests, one after the other: an ESearch for the
//! matching PMIDs and a single EFetch for their MEDLINE records. The records
//! are parsed and classified by [`papers_parser`].
//!
//! ```no_run
//! use papers_client::{ClientConfig, PubMedClient};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new().with_email("researcher@example.com");
//!     let client = PubMedClient::with_config(config)?;
//!
//!     for paper in client.fetch_papers("cancer immunotherapy").await {
//!         println!("{:?}: {}", paper.pubmed_id, paper.company_affiliations_joined());
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod pubmed;

// Re-export main types for convenience
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use papers_parser::Paper;
pub use pubmed::PubMedClient;
