//! The export pipeline: resolve, collect, flatten, write

pub mod collect;
pub mod flatten;
pub mod resolve;
pub mod sink;

use tracing::{info, warn};

use crate::core::config::ExportConfig;
use crate::errors::ExportError;
use crate::slack::HistorySource;
use collect::{CollectOptions, ExportSummary, collect_history};
use sink::CsvSink;

/// Run one full export as described by `config`.
///
/// The channel is resolved before the output file is created, so an unknown
/// channel never leaves an empty CSV behind.
///
/// # Errors
///
/// Returns the first fatal error: unknown channel, failed listing or page
/// fetch, or an output file that cannot be created.
pub async fn export_channel<S>(
    source: &S,
    config: &ExportConfig,
) -> Result<ExportSummary, ExportError>
where
    S: HistorySource + ?Sized,
{
    let channel_id = resolve::resolve_channel(source, &config.channel).await?;
    let mut sink = CsvSink::create(&config.output)?;

    let options = CollectOptions {
        oldest: config.start,
        latest: config.end,
        page_size: config.page_size,
        page_delay: config.page_delay,
        skip_bots: config.skip_bots,
    };
    let summary = collect_history(source, &mut sink, &channel_id, &options).await?;

    if summary.incomplete {
        warn!(
            output = %config.output.display(),
            "Slack reported more history than could be fetched, export is incomplete"
        );
    }

    info!(
        pages = summary.pages,
        rows_written = summary.rows_written,
        skipped = summary.skipped,
        write_failures = summary.write_failures,
        incomplete = summary.incomplete,
        output = %config.output.display(),
        "Export finished"
    );

    Ok(summary)
}
