//! slack-history - exports a Slack channel's message history to CSV.
//!
//! One run resolves a channel name to its id, walks `conversations.history`
//! backwards from `end` to `start` one page at a time, flattens every message
//! (files and attachments included) into a single-line row, and appends it to
//! the output file, flushing after each row.
//!
//! # Example
//!
//! ```no_run
//! use slack_history::core::config::ExportConfig;
//! use slack_history::features::export_channel;
//! use slack_history::slack::SlackClient;
//! use std::time::Duration;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     slack_history::setup_logging(false);
//!
//!     let config = ExportConfig {
//!         token: "xoxb-dummy".to_string(),
//!         channel: "general".to_string(),
//!         start: 1_496_300_400,
//!         end: 1_700_000_000,
//!         output: "general.csv".into(),
//!         skip_bots: false,
//!         page_delay: Duration::from_secs(1),
//!         page_size: 100,
//!         include_archived: false,
//!     };
//!
//!     let client = SlackClient::new(config.token.clone());
//!     let summary = export_channel(&client, &config).await?;
//!     println!("{} rows", summary.rows_written);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod errors;
pub mod features;
pub mod slack;
pub mod utils;

pub use errors::ExportError;

/// Configure logging to stderr, filtered by `RUST_LOG` (default `info`).
///
/// With `json` set, each event is emitted as one JSON object per line.
///
/// # Example
///
/// ```
/// slack_history::setup_logging(false);
/// ```
pub fn setup_logging(json: bool) {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    // A subscriber may already be installed (tests); keep the existing one.
    if json {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_writer(std::io::stderr);
        let _ = registry.with(fmt_layer).try_init();
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr);
        let _ = registry.with(fmt_layer).try_init();
    }
}
