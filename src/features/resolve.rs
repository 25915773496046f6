use tracing::{info, warn};

use crate::core::models::Channel;
use crate::errors::ExportError;
use crate::slack::HistorySource;

/// Exact, case-sensitive lookup. The first of several same-named channels wins.
///
/// # Errors
///
/// Returns `ExportError::ChannelNotFound` when no channel carries `name`.
pub fn find_channel_id<'a>(channels: &'a [Channel], name: &str) -> Result<&'a str, ExportError> {
    let mut matches = channels.iter().filter(|c| c.name == name);

    let found = matches
        .next()
        .ok_or_else(|| ExportError::ChannelNotFound(name.to_string()))?;

    if matches.next().is_some() {
        warn!(channel = name, id = %found.id, "Several channels share this name, using the first");
    }

    Ok(&found.id)
}

/// List every channel once and map `name` to its id.
///
/// # Errors
///
/// Returns an error if listing fails or the name is unknown.
pub async fn resolve_channel<S>(source: &S, name: &str) -> Result<String, ExportError>
where
    S: HistorySource + ?Sized,
{
    let channels = source.list_channels().await?;
    let id = find_channel_id(&channels, name)?.to_string();

    info!(channel = name, id = %id, "Resolved channel");
    Ok(id)
}
