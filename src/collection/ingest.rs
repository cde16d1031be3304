use json::JsonValue;

use crate::data::{RawTopic, RecordError, TopicRecord};

use super::{CollectionError, TopicCollection};

#[derive(thiserror::Error, Debug)]
pub enum IngestError {
    #[error("{0}")]
    Record(#[from] RecordError),
    #[error("{0}")]
    Collection(#[from] CollectionError),
    #[error("Topic listing is not a JSON array")]
    NotAnArray,
    #[error("Malformed topic listing: {0}")]
    Json(#[from] json::Error),
}

impl TopicCollection {
    pub fn from_raw(items: impl IntoIterator<Item = RawTopic>) -> Result<Self, IngestError> {
        let mut collection = Self::new();
        for raw in items {
            collection.add_raw(raw)?;
        }
        Ok(collection)
    }

    pub fn add_raw(&mut self, raw: RawTopic) -> Result<&TopicRecord, IngestError> {
        let record = TopicRecord::try_from(raw)?;
        tracing::debug!(topic = %record.id.0, "adding topic to the listing");
        Ok(self.add(record)?)
    }

    pub fn parse(text: &str) -> Result<Self, IngestError> {
        match json::parse(text)? {
            JsonValue::Array(items) => {
                let mut collection = Self::new();
                for item in &items {
                    collection.add_raw(RawTopic::from_json(item)?)?;
                }
                Ok(collection)
            }
            _ => Err(IngestError::NotAnArray),
        }
    }
}
