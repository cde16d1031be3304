use chrono::{DateTime, Utc};

use super::TopicID;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicRecord {
    pub id: TopicID,
    pub title: String,
    pub about: String,
    pub created: DateTime<Utc>,
}
