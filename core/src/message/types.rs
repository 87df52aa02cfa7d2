// Message types — one typed field, everything else opaque

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single transcript entry.
///
/// The persistence layer only understands `timestamp`: it is stored as an
/// ISO-8601 string and comes back as a native instant. Every other field
/// lives in the flattened `body` map and round-trips verbatim — the store
/// never validates its shape. Conventional fields (`id`, `sender`, `text`)
/// are filled in by the constructors and read back by the accessors, but a
/// message without them is still a valid message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// When the message was created (ISO-8601 on disk)
    pub timestamp: DateTime<Utc>,
    /// All remaining fields, untyped and untouched
    #[serde(flatten)]
    pub body: Map<String, Value>,
}

impl ChatMessage {
    /// Create a text message from `sender`, stamped now, with a fresh UUID
    pub fn text(sender: &str, text: &str) -> Self {
        let mut body = Map::new();
        body.insert(
            "id".to_string(),
            Value::String(uuid::Uuid::new_v4().to_string()),
        );
        body.insert("sender".to_string(), Value::String(sender.to_string()));
        body.insert("text".to_string(), Value::String(text.to_string()));
        Self {
            timestamp: Utc::now(),
            body,
        }
    }

    /// Same as [`ChatMessage::text`] but with an explicit timestamp
    pub fn text_at(sender: &str, text: &str, timestamp: DateTime<Utc>) -> Self {
        let mut msg = Self::text(sender, text);
        msg.timestamp = timestamp;
        msg
    }

    /// Conventional message ID, if present
    pub fn id(&self) -> Option<&str> {
        self.body.get("id").and_then(Value::as_str)
    }

    /// Conventional sender field, if present
    pub fn sender(&self) -> Option<&str> {
        self.body.get("sender").and_then(Value::as_str)
    }

    /// Conventional text content, if present
    pub fn text_content(&self) -> Option<&str> {
        self.body.get("text").and_then(Value::as_str)
    }

    /// Read an arbitrary body field
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.body.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_create_text_message() {
        let msg = ChatMessage::text("user", "hello world");

        assert_eq!(msg.sender(), Some("user"));
        assert_eq!(msg.text_content(), Some("hello world"));
        assert!(!msg.id().unwrap().is_empty());
    }

    #[test]
    fn test_timestamp_serializes_as_iso8601() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let msg = ChatMessage::text_at("user", "hi", ts);

        let json = serde_json::to_value(&msg).unwrap();
        let raw = json["timestamp"].as_str().unwrap();
        assert!(raw.starts_with("2024-01-01T00:00:00"));
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let raw = r#"{"id":"1","timestamp":"2024-01-01T00:00:00.000Z","text":"hi","mood":"curious","tokens":42}"#;
        let msg: ChatMessage = serde_json::from_str(raw).unwrap();

        assert_eq!(msg.field("mood"), Some(&Value::String("curious".into())));
        assert_eq!(msg.field("tokens").unwrap().as_i64(), Some(42));

        let restored: ChatMessage =
            serde_json::from_str(&serde_json::to_string(&msg).unwrap()).unwrap();
        assert_eq!(msg, restored);
    }

    #[test]
    fn test_message_without_conventional_fields() {
        let raw = r#"{"timestamp":"2024-06-15T12:30:00Z"}"#;
        let msg: ChatMessage = serde_json::from_str(raw).unwrap();

        assert_eq!(msg.id(), None);
        assert_eq!(msg.text_content(), None);
        assert_eq!(
            msg.timestamp,
            Utc.with_ymd_and_hms(2024, 6, 15, 12, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_unparseable_timestamp_rejected() {
        let raw = r#"{"timestamp":"yesterday-ish","text":"hi"}"#;
        assert!(serde_json::from_str::<ChatMessage>(raw).is_err());
    }
}
