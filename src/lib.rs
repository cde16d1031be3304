//! In-memory topic listing model for a discussion-forum front-end:
//! an ordered, identifier-indexed collection of topic records.

pub mod collection;
pub mod data;

pub use collection::{Collection, CollectionError, Identified, IngestError, TopicCollection};
pub use data::*;
