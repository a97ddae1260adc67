use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// CLI entry point so users can override the fixed constants when needed.
/// A bare invocation fetches the default page and writes the default files.
/// Exit codes: 0=success, 2=invalid arguments, 1=fetch or I/O error
#[derive(Parser, Debug)]
#[command(name = "profile_scrape")]
#[command(about = "Fetch a profile page, extract a fixed set of fields, export TSV and JSON")]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = Config::TARGET_URL, help = "Page to fetch")]
    pub url: String,

    #[arg(
        long,
        default_value = Config::CSV_OUT,
        help = "Tab-delimited output file"
    )]
    pub csv_out: PathBuf,

    #[arg(long, default_value = Config::JSON_OUT, help = "JSON output file")]
    pub json_out: PathBuf,

    #[arg(
        long,
        default_value_t = Config::TIMEOUT_SECS,
        help = "Request timeout in seconds"
    )]
    pub timeout: u64,

    #[arg(
        long,
        default_value = Config::USER_AGENT,
        help = "User agent string for the request"
    )]
    pub user_agent: String,
}

impl Cli {
    /// Parse CLI arguments so the rest of the program can rely on structured options.
    /// On error, clap prints help and exits with code 2 (usage error).
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
