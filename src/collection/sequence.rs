use crate::data::TopicID;

use super::TopicCollection;

impl TopicCollection {
    pub fn by_recency(&self) -> Vec<&TopicID> {
        let mut topics = self.iter().collect::<Vec<_>>();
        topics.sort_unstable_by(|a, b| b.created.cmp(&a.created));
        topics.into_iter().map(|topic| &topic.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RawTopic;

    fn raw(id: &str, created: &str) -> RawTopic {
        RawTopic {
            id: id.to_string(),
            created: Some(created.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn newest_topics_come_first() {
        let collection = TopicCollection::from_raw([
            raw("old", "2023-01-01T00:00:00Z"),
            raw("new", "2023-03-01T00:00:00Z"),
            raw("mid", "2023-02-01T00:00:00Z"),
        ]).unwrap();
        assert_eq!(collection.by_recency(), [
            &TopicID("new".to_string()),
            &TopicID("mid".to_string()),
            &TopicID("old".to_string()),
        ]);
    }
}
