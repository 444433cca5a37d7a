use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

mod commands;

/// Log targets raised to `debug` by `--debug`
const DEBUG_FILTER: &str =
    "get_papers_list=debug,papers_client=debug,papers_parser=debug,papers_formatter=debug";

#[derive(Parser, Debug)]
#[command(
    name = "get-papers-list",
    version,
    about = "Fetches research papers from PubMed with pharmaceutical/biotech affiliations",
    long_about = "Searches PubMed for QUERY, keeps papers with at least one author affiliated \
                  with a company, and prints them or saves them as CSV"
)]
pub struct Cli {
    /// PubMed search query (free text, PubMed syntax allowed)
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Save the results to this CSV file instead of printing them
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Print debug information during execution
    #[arg(short, long)]
    pub debug: bool,

    /// Contact email sent to NCBI with every request
    #[arg(long, env = "NCBI_EMAIL", default_value = "your.email@example.com")]
    pub email: String,

    /// API key for NCBI E-utilities (increases rate limit)
    #[arg(long, env = "NCBI_API_KEY")]
    pub api_key: Option<String>,

    /// Tool name for NCBI requests
    #[arg(long, env = "NCBI_TOOL", default_value = "get-papers-list")]
    pub tool: String,
}

fn init_tracing(debug: bool) {
    let default_filter = if debug { DEBUG_FILTER } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    commands::run(&cli).await
}
