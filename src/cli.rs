//! Command-line flags for the exporter

use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_START: &str = "2017-06-01T00:00:00-07:00";
pub const DEFAULT_CHANNEL: &str = "devops";
pub const DEFAULT_OUTPUT: &str = "output.csv";

#[derive(Debug, Clone, Parser)]
#[command(name = "slack-history")]
#[command(about = "Export a Slack channel's message history to CSV", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Start time in ISO8601
    #[arg(long, default_value = DEFAULT_START)]
    pub start: String,

    /// End time in ISO8601 (default is current time)
    #[arg(long)]
    pub end: Option<String>,

    /// Channel name to get logs for
    #[arg(long, default_value = DEFAULT_CHANNEL)]
    pub channel: String,

    /// Where to write the CSV file
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub write: PathBuf,

    /// Leave out messages posted by bots
    #[arg(long, default_value_t = false)]
    pub bots: bool,

    /// Pause between history page requests, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub page_delay_ms: u64,

    /// Messages requested per history page
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u16).range(1..=1000))]
    pub page_size: u16,

    /// Also consider archived channels when resolving the name
    #[arg(long, default_value_t = false)]
    pub include_archived: bool,

    /// Emit logs as JSON lines
    #[arg(long, default_value_t = false)]
    pub log_json: bool,
}
