use anyhow::Result;
use papers_client::{ClientConfig, PubMedClient};
use papers_formatter::export;
use tracing::debug;

use crate::Cli;

pub fn create_pubmed_client(
    api_key: Option<&str>,
    email: &str,
    tool: &str,
) -> Result<PubMedClient> {
    let mut config = ClientConfig::new().with_email(email).with_tool(tool);

    if let Some(key) = api_key {
        config = config.with_api_key(key);
    }

    Ok(PubMedClient::with_config(config)?)
}

/// Lines echoed to stdout before fetching when `--debug` is set
pub fn debug_banner(cli: &Cli) -> Vec<String> {
    let file = cli
        .file
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "None".to_string());

    vec![
        format!("Query: {}", cli.query),
        format!("Output File: {}", file),
        "Debug Mode: on".to_string(),
    ]
}

/// Search, filter and export. Fetch and write failures are logged, not returned.
pub async fn run(cli: &Cli) -> Result<()> {
    if cli.debug {
        for line in debug_banner(cli) {
            println!("{}", line);
        }
    }

    let client = create_pubmed_client(cli.api_key.as_deref(), &cli.email, &cli.tool)?;
    let papers = client.fetch_papers(&cli.query).await;

    let outcome = export(&papers, cli.file.as_deref());
    debug!(?outcome, "Export finished");
    Ok(())
}
