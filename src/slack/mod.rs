//! All Slack-specific functionality

pub mod client;
pub mod source;

// Re-export main types for convenience
pub use client::{SLACK_API_URL, SlackClient};
pub use source::HistorySource;
