use crate::core::models::HistoryMessage;

/// Whether a message is left out of the export.
///
/// With `skip_bots` set, anything carrying a bot id is dropped and only
/// human-authored messages remain.
#[must_use]
pub fn is_skipped(message: &HistoryMessage, skip_bots: bool) -> bool {
    skip_bots && message.is_from_bot()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(bot_id: Option<&str>) -> HistoryMessage {
        HistoryMessage {
            ts: "1000.0".into(),
            user: Some("U1".into()),
            text: Some("hello".into()),
            bot_id: bot_id.map(str::to_string),
            ..HistoryMessage::default()
        }
    }

    #[test]
    fn test_bot_message_skipped_when_flag_set() {
        assert!(is_skipped(&message(Some("B123")), true));
    }

    #[test]
    fn test_bot_message_kept_when_flag_unset() {
        assert!(!is_skipped(&message(Some("B123")), false));
    }

    #[test]
    fn test_human_message_always_kept() {
        assert!(!is_skipped(&message(None), true));
        assert!(!is_skipped(&message(None), false));
    }

    #[test]
    fn test_empty_bot_id_is_not_a_bot() {
        assert!(!is_skipped(&message(Some("")), true));
    }
}
