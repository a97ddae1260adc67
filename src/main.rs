use thiserror::Error;
use tracing::info;

use profile_scrape::cli::Cli;
use profile_scrape::export;
use profile_scrape::extract::extract_record;
use profile_scrape::logging::init_logging;
use profile_scrape::network::{FetchError, HttpClient};

#[derive(Error, Debug)]
pub enum MainError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Export error: {0}")]
    Export(#[from] export::ExportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One strictly linear run: fetch, extract, print, write TSV, write JSON.
/// The fetch drives a full HTTP round trip but is a single awaited call
/// from this program's perspective.
#[tokio::main]
async fn main() -> Result<(), MainError> {
    let cli = Cli::parse_args();
    init_logging();

    info!("Fetching {}", cli.url);
    let http = HttpClient::new(cli.user_agent, cli.timeout);
    let fetched = http.fetch(&cli.url).await?;
    info!(
        "Got {} {} ({} bytes)",
        fetched.status_code,
        fetched.status_message,
        fetched.body.len()
    );

    let record = extract_record(&fetched.status_message, &fetched.body);
    println!("{record:#?}");

    export::write_delimited_file(&cli.csv_out, &record)?;
    info!("Wrote {}", cli.csv_out.display());

    export::write_json_file(&cli.json_out, &record)?;
    info!("Wrote {}", cli.json_out.display());

    Ok(())
}
