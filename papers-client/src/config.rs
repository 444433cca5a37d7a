//! Client configuration for NCBI E-utilities
//!
//! NCBI asks every E-utilities caller to identify itself with a contact email
//! and a tool name. These values live here and are passed to the client at
//! construction instead of being set as process-wide state.

use std::time::Duration;

/// Default E-utilities endpoint
pub const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Default tool name reported to NCBI
pub const DEFAULT_TOOL: &str = "get-papers-list";

/// Upper bound on PMIDs requested from ESearch and sent to EFetch
pub const MAX_RESULTS: usize = 500;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`PubMedClient`](crate::PubMedClient)
///
/// # Example
///
/// ```
/// use papers_client::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_email("researcher@example.com")
///     .with_tool("my-tool")
///     .with_max_results(100);
///
/// assert_eq!(config.max_results, 100);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Contact email sent with every request
    pub email: Option<String>,
    /// Tool name sent with every request
    pub tool: Option<String>,
    /// Optional NCBI API key
    pub api_key: Option<String>,
    /// Override for the E-utilities base URL (used by tests)
    pub base_url: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
    /// Maximum number of PMIDs to search for and fetch
    pub max_results: usize,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self {
            email: None,
            tool: None,
            api_key: None,
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            max_results: MAX_RESULTS,
        }
    }

    /// Set the contact email NCBI uses to reach the caller
    pub fn with_email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_tool<S: Into<String>>(mut self, tool: S) -> Self {
        self.tool = Some(tool.into());
        self
    }

    pub fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the result cap, clamped to [`MAX_RESULTS`]
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results.min(MAX_RESULTS);
        self
    }

    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn effective_tool(&self) -> &str {
        self.tool.as_deref().unwrap_or(DEFAULT_TOOL)
    }

    pub fn effective_user_agent(&self) -> String {
        format!("{}/{}", DEFAULT_TOOL, env!("CARGO_PKG_VERSION"))
    }

    /// Identification parameters appended to every E-utilities request
    pub fn build_api_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(api_key) = &self.api_key {
            params.push(("api_key".to_string(), api_key.clone()));
        }
        if let Some(email) = &self.email {
            params.push(("email".to_string(), email.clone()));
        }
        params.push(("tool".to_string(), self.effective_tool().to_string()));

        params
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
