//! The EPG event handed to the enrichment pipeline.

use serde_json::Value;

use crate::content::{ContentClass, ContentType};
use crate::error::EventError;

/// One broadcast event as sent by the scheduler.
///
/// Every field is optional. Fields with the wrong JSON type are treated as
/// absent rather than rejected, since enrichment is best-effort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDescriptor {
    pub title: Option<String>,
    pub description: Option<String>,
    pub summary: Option<String>,
    pub channel_name: Option<String>,
    pub content_type: Option<ContentType>,
    /// Broadcast start, seconds since the epoch.
    pub start: Option<i64>,
    /// Broadcast stop, seconds since the epoch.
    pub stop: Option<i64>,
    pub scraped: Option<i64>,
    pub updated: Option<i64>,
}

impl EventDescriptor {
    /// Decode an event from a complete JSON document.
    ///
    /// Only syntactically invalid JSON is an error. A document that is not an
    /// object yields an empty descriptor.
    pub fn from_json(input: &str) -> Result<Self, EventError> {
        let value: Value = serde_json::from_str(input)?;
        Ok(Self::from_value(&value))
    }

    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            log::debug!("Event is not a JSON object; treating all fields as absent");
            return Self::default();
        };

        let text = |key: &str| obj.get(key).and_then(Value::as_str).map(str::to_string);
        let int = |key: &str| obj.get(key).and_then(Value::as_i64);

        Self {
            title: text("title"),
            description: text("description"),
            summary: text("summary"),
            channel_name: text("channel_name"),
            content_type: obj
                .get("content_type")
                .and_then(Value::as_u64)
                .and_then(|code| u32::try_from(code).ok())
                .map(ContentType::new),
            start: int("start"),
            stop: int("stop"),
            scraped: int("scraped"),
            updated: int("updated"),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_content_type(mut self, code: u32) -> Self {
        self.content_type = Some(ContentType::new(code));
        self
    }

    pub fn classification(&self) -> ContentClass {
        ContentClass::classify(self.content_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_reads_known_fields() {
        let event = EventDescriptor::from_json(
            r#"{
                "title": "Horrible bosses",
                "content_type": 20,
                "description": "Amerikansk komedi från 2011.",
                "channel_name": "TV1000",
                "start": 1400000000,
                "stop": 1400005400
            }"#,
        )
        .unwrap();

        assert_eq!(event.title.as_deref(), Some("Horrible bosses"));
        assert_eq!(event.description.as_deref(), Some("Amerikansk komedi från 2011."));
        assert_eq!(event.content_type, Some(ContentType::new(20)));
        assert_eq!(event.channel_name.as_deref(), Some("TV1000"));
        assert_eq!(event.start, Some(1_400_000_000));
        assert_eq!(event.stop, Some(1_400_005_400));
        assert_eq!(event.summary, None);
        assert_eq!(event.classification(), ContentClass::Movie);
    }

    #[test]
    fn test_from_json_rejects_invalid_json() {
        assert!(matches!(
            EventDescriptor::from_json("{\"title\": "),
            Err(EventError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_wrong_types_are_absent() {
        let event =
            EventDescriptor::from_json(r#"{"title": 5, "content_type": "movie", "start": "x"}"#)
                .unwrap();
        assert_eq!(event, EventDescriptor::default());
        assert_eq!(event.classification(), ContentClass::Unclassified);
    }

    #[test]
    fn test_negative_content_type_is_absent() {
        let event = EventDescriptor::from_json(r#"{"content_type": -16}"#).unwrap();
        assert_eq!(event.content_type, None);
    }

    #[test]
    fn test_non_object_document_is_empty() {
        let event = EventDescriptor::from_json("[1, 2, 3]").unwrap();
        assert_eq!(event, EventDescriptor::default());
    }

    #[test]
    fn test_builders() {
        let event = EventDescriptor::default()
            .with_title("Drive")
            .with_description("Amerikansk thriller från 2011.")
            .with_content_type(0x10);
        assert_eq!(event.title.as_deref(), Some("Drive"));
        assert_eq!(event.classification(), ContentClass::Movie);
    }
}
