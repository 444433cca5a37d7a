//! Integration tests for the search-fetch-filter pipeline using mocked HTTP responses
//!
//! These tests verify the client without making real API calls. They use
//! wiremock to simulate NCBI ESearch and EFetch responses.

use papers_client::{ClientConfig, ClientError, PubMedClient};
use tracing_test::traced_test;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ESEARCH_TWO_IDS: &str = r#"{
    "header": {"type": "esearch", "version": "0.3"},
    "esearchresult": {
        "count": "2",
        "retmax": "2",
        "retstart": "0",
        "idlist": ["38001234", "38005678"]
    }
}"#;

const ESEARCH_EMPTY: &str = r#"{
    "esearchresult": {"count": "0", "retmax": "0", "retstart": "0", "idlist": []}
}"#;

const ESEARCH_ERROR: &str = r#"{"esearchresult": {"ERROR": "Invalid query syntax"}}"#;

const MEDLINE_TWO_RECORDS: &str = "
PMID- 38001234
DP  - 2023 Nov 15
TI  - Allosteric KRAS inhibitors.
AU  - Nguyen L
AD  - Discovery Oncology, Helix Therapeutics Inc, Cambridge, MA, USA.
CON - Corresponding author. Email: l.nguyen@helixtx.com

PMID- 38005678
DP  - 2023/10/02 00:00
TI  - Microbiome diversity in elderly cohorts.
AU  - Garcia M
AD  - School of Public Health, Harvard University, Boston, MA, USA.
";

const MEDLINE_ORPHAN_AFFILIATION: &str = "
PMID- 38001234
AD  - Helix Therapeutics Inc
AU  - Nguyen L
";

async fn mount_esearch(mock_server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body.to_string())
                .insert_header("content-type", "application/json"),
        )
        .mount(mock_server)
        .await;
}

async fn mount_efetch(mock_server: &MockServer, body: &str) {
    Mock::given(method("POST"))
        .and(path("/efetch.fcgi"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body.to_string())
                .insert_header("content-type", "text/plain"),
        )
        .mount(mock_server)
        .await;
}

/// Helper to create a client pointing at a mock server
fn create_mock_client(mock_server: &MockServer) -> PubMedClient {
    let config = ClientConfig::new()
        .with_base_url(mock_server.uri())
        .with_email("tester@example.com");

    PubMedClient::with_config(config).expect("client should build")
}

#[tokio::test]
#[traced_test]
async fn test_fetch_papers_filters_industry_records() {
    let mock_server = MockServer::start().await;
    mount_esearch(&mock_server, ESEARCH_TWO_IDS).await;
    mount_efetch(&mock_server, MEDLINE_TWO_RECORDS).await;
    let client = create_mock_client(&mock_server);

    let papers = client.fetch_papers("kras inhibitor").await;

    assert_eq!(papers.len(), 1);
    let paper = &papers[0];
    assert_eq!(paper.pubmed_id.as_deref(), Some("38001234"));
    assert_eq!(paper.publication_date.as_deref(), Some("2023-11-15"));
    assert_eq!(paper.non_academic_authors, vec!["Nguyen L"]);
    assert_eq!(paper.company_affiliations, vec!["Helix Therapeutics Inc"]);
    assert_eq!(
        paper.corresponding_author_email.as_deref(),
        Some("l.nguyen@helixtx.com")
    );
}

#[tokio::test]
#[traced_test]
async fn test_requests_carry_identification_and_medline_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("db", "pubmed"))
        .and(query_param("term", "kras inhibitor"))
        .and(query_param("retmax", "500"))
        .and(query_param("retmode", "json"))
        .and(query_param("email", "tester@example.com"))
        .and(query_param("tool", "get-papers-list"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ESEARCH_TWO_IDS))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/efetch.fcgi"))
        .and(body_string_contains("db=pubmed"))
        .and(body_string_contains("id=38001234%2C38005678"))
        .and(body_string_contains("rettype=medline"))
        .and(body_string_contains("retmode=text"))
        .and(body_string_contains("email=tester%40example.com"))
        .and(body_string_contains("tool=get-papers-list"))
        .respond_with(ResponseTemplate::new(200).set_body_string(MEDLINE_TWO_RECORDS))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let papers = client
        .try_fetch_papers("kras inhibitor")
        .await
        .expect("pipeline should succeed");

    assert_eq!(papers.len(), 1);
}

#[tokio::test]
#[traced_test]
async fn test_empty_search_skips_efetch() {
    let mock_server = MockServer::start().await;
    mount_esearch(&mock_server, ESEARCH_EMPTY).await;
    let client = create_mock_client(&mock_server);

    let papers = client.fetch_papers("no such topic").await;
    assert!(papers.is_empty());

    let received_requests = mock_server.received_requests().await.unwrap();
    assert_eq!(
        received_requests.len(),
        1,
        "Only the ESearch request should be made"
    );
    assert_eq!(received_requests[0].url.path(), "/esearch.fcgi");
}

#[tokio::test]
#[traced_test]
async fn test_server_error_degrades_to_empty() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    let client = create_mock_client(&mock_server);

    let result = client.try_fetch_papers("kras").await;
    assert!(matches!(
        result,
        Err(ClientError::ApiError { status: 500, .. })
    ));

    let papers = client.fetch_papers("kras").await;
    assert!(papers.is_empty());
    assert!(logs_contain("Error during API request"));
}

#[tokio::test]
#[traced_test]
async fn test_efetch_failure_degrades_to_empty() {
    let mock_server = MockServer::start().await;
    mount_esearch(&mock_server, ESEARCH_TWO_IDS).await;
    Mock::given(method("POST"))
        .and(path("/efetch.fcgi"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;
    let client = create_mock_client(&mock_server);

    assert!(client.fetch_papers("kras").await.is_empty());
}

#[tokio::test]
#[traced_test]
async fn test_esearch_error_field_is_an_api_error() {
    let mock_server = MockServer::start().await;
    mount_esearch(&mock_server, ESEARCH_ERROR).await;
    let client = create_mock_client(&mock_server);

    let result = client.search_ids("((").await;
    match result {
        Err(ClientError::ApiError { status, message }) => {
            assert_eq!(status, 200);
            assert!(message.contains("Invalid query syntax"));
        }
        other => panic!("Expected ApiError, got {:?}", other),
    }

    assert!(client.fetch_papers("((").await.is_empty());
}

#[tokio::test]
#[traced_test]
async fn test_malformed_esearch_json_degrades_to_empty() {
    let mock_server = MockServer::start().await;
    mount_esearch(&mock_server, "<html>not json</html>").await;
    let client = create_mock_client(&mock_server);

    let result = client.search_ids("kras").await;
    assert!(matches!(result, Err(ClientError::JsonError(_))));
    assert!(client.fetch_papers("kras").await.is_empty());
}

#[tokio::test]
#[traced_test]
async fn test_parse_failure_degrades_to_empty() {
    let mock_server = MockServer::start().await;
    mount_esearch(&mock_server, ESEARCH_TWO_IDS).await;
    mount_efetch(&mock_server, MEDLINE_ORPHAN_AFFILIATION).await;
    let client = create_mock_client(&mock_server);

    let result = client.try_fetch_papers("kras").await;
    assert!(matches!(result, Err(ClientError::Parse(_))));

    assert!(client.fetch_papers("kras").await.is_empty());
    assert!(logs_contain("An error occurred while fetching papers"));
}

#[tokio::test]
#[traced_test]
async fn test_transport_failure_degrades_to_empty() {
    // Nothing listens on port 1
    let config = ClientConfig::new().with_base_url("http://127.0.0.1:1");
    let client = PubMedClient::with_config(config).unwrap();

    let result = client.try_fetch_papers("kras").await;
    assert!(matches!(result, Err(ClientError::RequestError(_))));
    assert!(client.fetch_papers("kras").await.is_empty());
}

#[tokio::test]
#[traced_test]
async fn test_search_ids_truncated_to_max_results() {
    let mock_server = MockServer::start().await;
    mount_esearch(&mock_server, ESEARCH_TWO_IDS).await;
    let config = ClientConfig::new()
        .with_base_url(mock_server.uri())
        .with_max_results(1);
    let client = PubMedClient::with_config(config).unwrap();

    let ids = client.search_ids("kras").await.unwrap();
    assert_eq!(ids, vec!["38001234"]);
}

#[tokio::test]
#[traced_test]
async fn test_full_page_of_ids_sent_in_post_body() {
    let mock_server = MockServer::start().await;
    let ids: Vec<String> = (30_000_001..=30_000_250).map(|id| id.to_string()).collect();
    let quoted: Vec<String> = ids.iter().map(|id| format!("\"{}\"", id)).collect();
    let esearch = format!(
        r#"{{"esearchresult": {{"count": "250", "retmax": "250", "idlist": [{}]}}}}"#,
        quoted.join(",")
    );
    mount_esearch(&mock_server, &esearch).await;

    Mock::given(method("POST"))
        .and(path("/efetch.fcgi"))
        .and(body_string_contains(format!("id={}", ids.join("%2C"))))
        .respond_with(ResponseTemplate::new(200).set_body_string(MEDLINE_TWO_RECORDS))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let papers = client
        .try_fetch_papers("oncology")
        .await
        .expect("pipeline should succeed");
    assert_eq!(papers.len(), 1);

    let received_requests = mock_server.received_requests().await.unwrap();
    assert_eq!(received_requests.len(), 2);
    let efetch = &received_requests[1];
    assert_eq!(efetch.method.as_str(), "POST");
    assert_eq!(efetch.url.path(), "/efetch.fcgi");
    assert!(
        efetch.url.query().is_none(),
        "PMIDs must not be sent in the URL"
    );
}
