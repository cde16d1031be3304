use chrono::{DateTime, Utc};
use json::JsonValue;
use serde::Deserialize;

use super::{TopicID, TopicRecord};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RecordError {
    #[error("Topic data carries no identifier")]
    MissingIdentifier,
    #[error("Topic data is not a key-value record")]
    NotAnObject,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawTopic {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub created: Option<String>,
}

impl RawTopic {
    pub fn from_json(json: &JsonValue) -> Result<Self, RecordError> {
        if !json.is_object() {
            return Err(RecordError::NotAnObject);
        }
        let id = json["id"].as_str()
            .ok_or(RecordError::MissingIdentifier)?
            .to_string();
        Ok(Self {
            id,
            title: json["title"].as_str().unwrap_or_default().to_string(),
            about: json["about"].as_str().unwrap_or_default().to_string(),
            created: json["created"].as_str().map(str::to_string),
        })
    }
}

impl TryFrom<RawTopic> for TopicRecord {
    type Error = RecordError;

    fn try_from(raw: RawTopic) -> Result<Self, RecordError> {
        if raw.id.is_empty() {
            return Err(RecordError::MissingIdentifier);
        }
        let created = raw.created.as_deref()
            .and_then(|x| x.parse::<DateTime<Utc>>().ok())
            .unwrap_or_else(Utc::now);
        Ok(Self {
            id: TopicID(raw.id),
            title: raw.title,
            about: raw.about,
            created,
        })
    }
}
