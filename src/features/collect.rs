use std::time::Duration;

use tracing::{info, warn};

use crate::core::models::{HistoryMessage, HistoryRequest};
use crate::errors::ExportError;
use crate::features::flatten::flatten_message;
use crate::features::sink::RecordSink;
use crate::slack::HistorySource;

/// Pagination settings for one channel export.
#[derive(Debug, Clone)]
pub struct CollectOptions {
    /// Lower bound, epoch seconds. Fixed for the whole run.
    pub oldest: i64,
    /// Initial upper bound, epoch seconds.
    pub latest: i64,
    pub page_size: u16,
    pub page_delay: Duration,
    pub skip_bots: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub pages: usize,
    pub rows_written: usize,
    pub skipped: usize,
    pub write_failures: usize,
    /// Slack still reported `has_more` when pagination had to stop.
    pub incomplete: bool,
}

/// Walk the channel history backwards page by page, writing each page to
/// `sink` before the next one is requested.
///
/// The upper bound of every follow-up request is the `ts` of the oldest
/// message on the previous page.
///
/// # Errors
///
/// Any failed page fetch aborts the walk. Per-record write failures are logged
/// and counted instead.
pub async fn collect_history<S, K>(
    source: &S,
    sink: &mut K,
    channel_id: &str,
    options: &CollectOptions,
) -> Result<ExportSummary, ExportError>
where
    S: HistorySource + ?Sized,
    K: RecordSink + ?Sized,
{
    let oldest = options.oldest.to_string();
    let mut latest = options.latest.to_string();
    let mut summary = ExportSummary::default();

    loop {
        info!(oldest = %oldest, latest = %latest, "Querying history");
        let request = HistoryRequest {
            channel_id: channel_id.to_string(),
            oldest: oldest.clone(),
            latest: latest.clone(),
            limit: options.page_size,
        };

        let page = source.channel_history(&request).await?;
        summary.pages += 1;
        write_page(&page.messages, sink, options.skip_bots, &mut summary);

        let Some(last) = page.messages.last() else {
            if page.has_more {
                warn!(latest = %latest, "Empty history page claims more pages, stopping");
                summary.incomplete = true;
            }
            break;
        };
        info!(last_message_ts = %last.ts, count = page.messages.len(), "Page written");

        if !page.has_more {
            break;
        }
        if !cursor_advances(&last.ts, &latest) {
            warn!(
                last_message_ts = %last.ts,
                latest = %latest,
                "History cursor did not move backwards, stopping"
            );
            summary.incomplete = true;
            break;
        }
        latest.clone_from(&last.ts);

        if !options.page_delay.is_zero() {
            tokio::time::sleep(options.page_delay).await;
        }
    }

    Ok(summary)
}

fn write_page<K>(
    messages: &[HistoryMessage],
    sink: &mut K,
    skip_bots: bool,
    summary: &mut ExportSummary,
) where
    K: RecordSink + ?Sized,
{
    for message in messages {
        let Some(record) = flatten_message(message, skip_bots) else {
            summary.skipped += 1;
            continue;
        };

        match sink.write_record(&record) {
            Ok(()) => summary.rows_written += 1,
            Err(e) => {
                warn!(error = %e, text = %record.text, "Failed to write record");
                summary.write_failures += 1;
            }
        }
    }
}

/// True when `next` is a parseable timestamp strictly below `current`.
fn cursor_advances(next: &str, current: &str) -> bool {
    match (next.parse::<f64>(), current.parse::<f64>()) {
        (Ok(next), Ok(current)) => next < current,
        _ => false,
    }
}
