use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobscout::{api::HttpClient, ClientOptions, InteractiveClient};

#[derive(Parser)]
#[command(
    name = "jobscout",
    version,
    about = "Terminal client for browsing job postings and managing saved searches",
    long_about = None
)]
struct Cli {
    /// Base URL of the job-search API
    #[arg(long, env = "JOBSCOUT_URL", default_value = "http://localhost:3000/api")]
    url: String,

    /// Bearer token for authenticated endpoints
    #[arg(long, env = "JOBSCOUT_TOKEN")]
    token: Option<String>,

    /// Maximum number of job postings to fetch per query
    #[arg(short = 'n', long, default_value = "50")]
    max_results: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "jobscout=debug" } else { "jobscout=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = ClientOptions {
        base_url: cli.url,
        auth_token: cli.token,
        max_results: cli.max_results,
    };

    let client = Arc::new(HttpClient::new(&options)?);

    let mut app = InteractiveClient::new(
        &options,
        client.clone(),
        client.clone(),
        client,
    );
    app.run()
}
