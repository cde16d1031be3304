mod raw;
mod topic;

pub use raw::*;
pub use topic::*;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TopicID(pub String);
