use slack_morphism::errors::SlackClientError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Cannot find a channel with name {0}")]
    ChannelNotFound(String),

    #[error("Failed to access Slack API: {0}")]
    Api(String),

    #[error("Failed to send HTTP request: {0}")]
    Http(String),

    #[error("cannot create file {path}: {source}")]
    CreateFile {
        path: String,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write CSV: {0}")]
    Csv(String),

    #[error("timestamp {0} not valid, cannot parse")]
    InvalidTimestamp(String),
}

impl From<SlackClientError> for ExportError {
    fn from(error: SlackClientError) -> Self {
        ExportError::Api(error.to_string())
    }
}

impl From<reqwest::Error> for ExportError {
    fn from(error: reqwest::Error) -> Self {
        ExportError::Http(error.to_string())
    }
}

impl From<csv::Error> for ExportError {
    fn from(error: csv::Error) -> Self {
        ExportError::Csv(error.to_string())
    }
}
