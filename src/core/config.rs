use chrono::{DateTime, Utc};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;
use crate::errors::ExportError;

pub const TOKEN_ENV: &str = "SLACK_TOKEN";

/// Everything one export run needs, resolved up front.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub token: String,
    pub channel: String,
    /// Lower bound, epoch seconds.
    pub start: i64,
    /// Upper bound, epoch seconds.
    pub end: i64,
    pub output: PathBuf,
    /// Set by `--bots`: drop messages that carry a bot id.
    pub skip_bots: bool,
    pub page_delay: Duration,
    pub page_size: u16,
    pub include_archived: bool,
}

impl ExportConfig {
    /// Build the config from parsed flags and the `SLACK_TOKEN` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is missing or a time bound cannot be parsed.
    pub fn from_env(cli: &Cli) -> Result<Self, ExportError> {
        Self::from_parts(cli, env::var(TOKEN_ENV).ok(), Utc::now())
    }

    /// # Errors
    ///
    /// Returns an error if the token is missing or blank, a time bound is not
    /// RFC3339, or `end` is earlier than `start`.
    pub fn from_parts(
        cli: &Cli,
        token: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Self, ExportError> {
        let token = token
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ExportError::Config(format!("Need {TOKEN_ENV} env variable")))?;

        let start = parse_instant("start", &cli.start)?;
        let end = match cli.end.as_deref() {
            Some(value) => parse_instant("end", value)?,
            None => now.timestamp(),
        };

        if end < start {
            return Err(ExportError::Config(format!(
                "end ({end}) is earlier than start ({start})"
            )));
        }

        Ok(Self {
            token,
            channel: cli.channel.clone(),
            start,
            end,
            output: cli.write.clone(),
            skip_bots: cli.bots,
            page_delay: Duration::from_millis(cli.page_delay_ms),
            page_size: cli.page_size,
            include_archived: cli.include_archived,
        })
    }
}

/// Parse an RFC3339 instant into whole epoch seconds.
///
/// # Errors
///
/// Returns `ExportError::Config` naming the flag and the rejected value.
pub fn parse_instant(flag: &str, value: &str) -> Result<i64, ExportError> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.timestamp())
        .map_err(|e| {
            ExportError::Config(format!("Failed to parse {flag} timestamp {value}. Err: {e}"))
        })
}
