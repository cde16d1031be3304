use crate::data::TopicID;

use super::TopicCollection;

impl TopicCollection {
    pub fn search_topics(&self, query: &str) -> Vec<&TopicID> {
        self.iter()
            .filter(|topic| Self::match_title_to_query(topic.title.as_str(), query))
            .map(|topic| &topic.id)
            .collect()
    }

    fn match_title_to_query(title: &str, query: &str) -> bool {
        title.contains(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RawTopic;

    fn listing() -> TopicCollection {
        TopicCollection::from_raw([
            RawTopic { id: "t1".to_string(), title: "Game design".to_string(), ..Default::default() },
            RawTopic { id: "t2".to_string(), title: "Game music".to_string(), ..Default::default() },
            RawTopic { id: "t3".to_string(), title: "Off-topic".to_string(), ..Default::default() },
        ]).unwrap()
    }

    #[test]
    fn matches_titles_containing_the_query() {
        let collection = listing();
        let hits = collection.search_topics("Game");
        assert_eq!(hits, [&TopicID("t1".to_string()), &TopicID("t2".to_string())]);
    }

    #[test]
    fn no_match_yields_an_empty_result() {
        let collection = listing();
        assert!(collection.search_topics("news").is_empty());
    }
}
