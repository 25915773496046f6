use async_trait::async_trait;

use crate::core::models::{Channel, HistoryPage, HistoryRequest};
use crate::errors::ExportError;

/// The two Slack operations the export consumes.
#[async_trait]
pub trait HistorySource: Send + Sync {
    /// Every channel visible to the token, already de-paginated.
    async fn list_channels(&self) -> Result<Vec<Channel>, ExportError>;

    /// One page of history between `request.oldest` and `request.latest`.
    async fn channel_history(&self, request: &HistoryRequest) -> Result<HistoryPage, ExportError>;
}
