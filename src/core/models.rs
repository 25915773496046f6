use serde::{Deserialize, Deserializer};

/// A channel as returned by `conversations.list`, reduced to what the export needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub id: String,
    pub name: String,
}

/// One message from `conversations.history`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryMessage {
    /// Fractional seconds since the epoch, e.g. `"1503435956.000247"`.
    #[serde(default)]
    pub ts: String,
    pub user: Option<String>,
    pub text: Option<String>,
    pub bot_id: Option<String>,
    /// Legacy single-file shape.
    pub file: Option<MessageFile>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub files: Vec<MessageFile>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub attachments: Vec<MessageAttachment>,
}

impl HistoryMessage {
    #[must_use]
    pub fn is_from_bot(&self) -> bool {
        self.bot_id.as_deref().is_some_and(|id| !id.is_empty())
    }

    /// Legacy `file` first, then every entry of `files`.
    pub fn attached_files(&self) -> impl Iterator<Item = &MessageFile> {
        self.file.iter().chain(self.files.iter())
    }
}

/// Slack sends `null` for some list fields; treat it like an absent list.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageFile {
    pub name: Option<String>,
    pub preview: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageAttachment {
    pub fallback: Option<String>,
}

/// Bounds for a single `conversations.history` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRequest {
    pub channel_id: String,
    pub oldest: String,
    pub latest: String,
    pub limit: u16,
}

/// One page of history, newest message first.
#[derive(Debug, Clone, Default)]
pub struct HistoryPage {
    pub messages: Vec<HistoryMessage>,
    pub has_more: bool,
}

/// A flattened CSV row: `timestamp,user,message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    pub timestamp: String,
    pub user: String,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_lists_decode_as_empty() {
        let msg: HistoryMessage =
            serde_json::from_str(r#"{"ts":"1.0","files":null,"attachments":null}"#).unwrap();

        assert!(msg.files.is_empty());
        assert!(msg.attachments.is_empty());
    }

    #[test]
    fn test_missing_lists_decode_as_empty() {
        let msg: HistoryMessage = serde_json::from_str(r#"{"ts":"1.0","text":"hi"}"#).unwrap();

        assert!(msg.files.is_empty());
        assert!(msg.attachments.is_empty());
        assert!(msg.file.is_none());
    }

    #[test]
    fn test_present_lists_decode() {
        let msg: HistoryMessage = serde_json::from_str(
            r#"{"ts":"1.0","files":[{"name":"a.txt"}],"attachments":[{"fallback":"x"}]}"#,
        )
        .unwrap();

        assert_eq!(msg.files[0].name.as_deref(), Some("a.txt"));
        assert_eq!(msg.attachments[0].fallback.as_deref(), Some("x"));
    }
}
