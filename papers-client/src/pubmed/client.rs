use papers_parser::{Paper, parse_medline};
use reqwest::{Client, Response};
use tracing::{debug, error, info, instrument, warn};

use super::responses::ESearchResult;
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// Client for the PubMed ESearch and EFetch endpoints
#[derive(Clone)]
pub struct PubMedClient {
    client: Client,
    config: ClientConfig,
}

impl PubMedClient {
    /// Create a new PubMed client with custom configuration
    ///
    /// # Errors
    ///
    /// Returns `ClientError::RequestError` if the underlying HTTP client
    /// cannot be built (for example when the TLS backend fails to initialize).
    ///
    /// # Example
    ///
    /// ```
    /// use papers_client::{ClientConfig, PubMedClient};
    ///
    /// let config = ClientConfig::new().with_email("researcher@example.com");
    /// let client = PubMedClient::with_config(config).unwrap();
    /// ```
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.effective_user_agent())
            .timeout(config.timeout)
            .build()?;

        Ok(Self::with_client(client, config))
    }

    /// Create a new PubMed client around an existing reqwest client
    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    /// Get a reference to the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Search PubMed and return the industry-affiliated papers
    ///
    /// Runs ESearch, EFetch and MEDLINE parsing in sequence. Every failure
    /// along the way is logged and turned into an empty result, so "nothing
    /// matched" and "something went wrong" look the same to the caller. Use
    /// [`try_fetch_papers`](Self::try_fetch_papers) to see the error.
    pub async fn fetch_papers(&self, query: &str) -> Vec<Paper> {
        match self.try_fetch_papers(query).await {
            Ok(papers) => papers,
            Err(err) if err.is_api_failure() => {
                error!(error = %err, "Error during API request");
                Vec::new()
            }
            Err(err) => {
                error!(error = %err, "An error occurred while fetching papers");
                Vec::new()
            }
        }
    }

    /// Search PubMed and return the industry-affiliated papers, propagating errors
    #[instrument(skip(self), fields(query = %query))]
    pub async fn try_fetch_papers(&self, query: &str) -> Result<Vec<Paper>> {
        let pmids = self.search_ids(query).await?;
        debug!("Found {} papers for the query.", pmids.len());

        if pmids.is_empty() {
            return Ok(Vec::new());
        }

        let medline = self.fetch_medline(pmids.as_slice()).await?;
        let papers = parse_medline(&medline)?;
        info!(
            fetched = pmids.len(),
            retained = papers.len(),
            "Filtered papers with company affiliations"
        );
        Ok(papers)
    }

    /// Search PubMed and return the matching PMIDs
    ///
    /// At most `max_results` PMIDs are returned, in the order ESearch lists
    /// them. A blank query returns an empty list without contacting the API.
    ///
    /// # Errors
    ///
    /// * `ClientError::RequestError` - If the HTTP request fails
    /// * `ClientError::ApiError` - On a non-success status or an `ERROR` field
    /// * `ClientError::JsonError` - If the response is not valid ESearch JSON
    #[instrument(skip(self), fields(query = %query))]
    pub async fn search_ids(&self, query: &str) -> Result<Vec<String>> {
        if query.trim().is_empty() {
            debug!("Empty query provided, returning empty results");
            return Ok(Vec::new());
        }

        let limit = self.config.max_results;
        let url = format!(
            "{}/esearch.fcgi?db=pubmed&term={}&retmax={}&retmode=json",
            self.config.effective_base_url(),
            urlencoding::encode(query),
            limit
        );

        debug!("Making ESearch API request");
        let response = self.make_request(&url).await?;
        let body = response.text().await?;
        let search_result: ESearchResult = serde_json::from_str(&body)?;

        // NCBI sometimes returns 200 OK with an ERROR field
        if let Some(error_msg) = search_result.esearchresult.error {
            return Err(ClientError::ApiError {
                status: 200,
                message: format!("NCBI ESearch API error: {}", error_msg),
            });
        }

        let mut ids = search_result.esearchresult.idlist;
        if ids.len() > limit {
            warn!(
                returned = ids.len(),
                limit, "ESearch returned more PMIDs than requested, truncating"
            );
            ids.truncate(limit);
        }

        Ok(ids)
    }

    /// Fetch the MEDLINE records for the given PMIDs as one text blob
    ///
    /// All PMIDs go out in a single EFetch request, sent as a POST form so a
    /// full page of 500 ids stays out of the URL. An empty slice returns an
    /// empty string without contacting the API.
    ///
    /// # Errors
    ///
    /// * `ClientError::InvalidPmid` - If any PMID is not a positive number
    /// * `ClientError::RequestError` - If the HTTP request fails
    /// * `ClientError::ApiError` - On a non-success status
    #[instrument(skip(self, pmids), fields(pmids_count = pmids.len()))]
    pub async fn fetch_medline<S: AsRef<str>>(&self, pmids: &[S]) -> Result<String> {
        if pmids.is_empty() {
            return Ok(String::new());
        }

        // Validate all PMIDs upfront
        let id_list = pmids
            .iter()
            .map(|pmid| validate_pmid(pmid.as_ref()))
            .collect::<Result<Vec<_>>>()?
            .join(",");

        // Build form data for POST request
        let mut params = vec![
            ("db".to_string(), "pubmed".to_string()),
            ("id".to_string(), id_list),
            ("rettype".to_string(), "medline".to_string()),
            ("retmode".to_string(), "text".to_string()),
        ];
        params.extend(self.config.build_api_params());

        let url = format!("{}/efetch.fcgi", self.config.effective_base_url());

        debug!("Making EFetch API request");
        let response = self.make_form_request(&url, &params).await?;
        let text = response.text().await?;
        debug!(bytes = text.len(), "EFetch completed");

        Ok(text)
    }

    /// Send a GET request with the identification parameters appended.
    async fn make_request(&self, url: &str) -> Result<Response> {
        let mut final_url = url.to_string();
        let api_params = self.config.build_api_params();

        if !api_params.is_empty() {
            let separator = if url.contains('?') { '&' } else { '?' };
            final_url.push(separator);

            let param_strings: Vec<String> = api_params
                .into_iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
                .collect();
            final_url.push_str(&param_strings.join("&"));
        }

        debug!("Making API request to: {}", final_url);
        let response = self.client.get(&final_url).send().await?;
        check_status(response)
    }

    /// Send a POST request with `params` as an urlencoded form body.
    async fn make_form_request(
        &self,
        url: &str,
        params: &[(String, String)],
    ) -> Result<Response> {
        debug!("Making POST request to: {}", url);
        let response = self.client.post(url).form(params).send().await?;
        check_status(response)
    }
}

/// Turn a non-success status into `ClientError::ApiError`
fn check_status(response: Response) -> Result<Response> {
    if !response.status().is_success() {
        warn!("API request failed with status: {}", response.status());
        return Err(ClientError::ApiError {
            status: response.status().as_u16(),
            message: response
                .status()
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
        });
    }

    Ok(response)
}

/// Trim a PMID and check that it is a positive integer
fn validate_pmid(pmid: &str) -> Result<&str> {
    let trimmed = pmid.trim();
    match trimmed.parse::<u32>() {
        Ok(value) if value > 0 => Ok(trimmed),
        _ => Err(ClientError::InvalidPmid {
            pmid: pmid.to_string(),
        }),
    }
}
