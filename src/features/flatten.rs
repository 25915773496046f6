//! Turns a history message into a single-line CSV record

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::warn;

use crate::core::models::{HistoryMessage, OutputRecord};
use crate::errors::ExportError;
use crate::utils::filters::is_skipped;
use crate::utils::text::{NEWLINE_ESCAPE, sanitize_new_lines};

/// Flatten one message, or `None` when the bot filter drops it.
#[must_use]
pub fn flatten_message(message: &HistoryMessage, skip_bots: bool) -> Option<OutputRecord> {
    if is_skipped(message, skip_bots) {
        return None;
    }

    Some(OutputRecord {
        timestamp: record_timestamp(&message.ts),
        user: message.user.clone().unwrap_or_default(),
        text: flatten_text(message),
    })
}

/// Body, then each file's name and preview, then each attachment fallback,
/// joined by the literal `\n` escape.
#[must_use]
pub fn flatten_text(message: &HistoryMessage) -> String {
    let mut text = message.text.clone().unwrap_or_default();

    for file in message.attached_files() {
        text.push_str(NEWLINE_ESCAPE);
        text.push_str(file.name.as_deref().unwrap_or_default());
        text.push_str(NEWLINE_ESCAPE);
        text.push_str(&sanitize_new_lines(file.preview.as_deref().unwrap_or_default()));
    }

    for attachment in &message.attachments {
        text.push_str(NEWLINE_ESCAPE);
        text.push_str(&sanitize_new_lines(
            attachment.fallback.as_deref().unwrap_or_default(),
        ));
    }

    // The body and file names are not sanitized above.
    sanitize_new_lines(&text)
}

/// Parse a Slack `ts` and render it as RFC3339, dropping sub-second precision.
///
/// # Errors
///
/// Returns `ExportError::InvalidTimestamp` if `ts` is not a finite number or
/// falls outside the representable range.
pub fn format_timestamp(ts: &str) -> Result<String, ExportError> {
    let invalid = || ExportError::InvalidTimestamp(ts.to_string());

    let seconds: f64 = ts.trim().parse().map_err(|_| invalid())?;
    if !seconds.is_finite() {
        return Err(invalid());
    }

    #[allow(clippy::cast_possible_truncation)]
    let whole = seconds.trunc() as i64;
    let instant = DateTime::<Utc>::from_timestamp(whole, 0).ok_or_else(invalid)?;

    Ok(instant.to_rfc3339_opts(SecondsFormat::Secs, true))
}

/// Like [`format_timestamp`], but logs the failure and falls back to the epoch.
#[must_use]
pub fn record_timestamp(ts: &str) -> String {
    format_timestamp(ts).unwrap_or_else(|e| {
        warn!(error = %e, "Falling back to epoch for unparseable timestamp");
        DateTime::<Utc>::UNIX_EPOCH.to_rfc3339_opts(SecondsFormat::Secs, true)
    })
}
