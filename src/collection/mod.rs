use std::collections::{hash_map::Entry, HashMap};
use std::hash::Hash;

use crate::data::TopicRecord;

mod ingest;
mod search;
mod sequence;

pub use ingest::*;

pub trait Identified {
    type Id: Clone + Eq + Hash;

    fn id(&self) -> &Self::Id;
}

impl Identified for TopicRecord {
    type Id = crate::data::TopicID;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CollectionError {
    #[error("A record with such identifier already exists")]
    DuplicateIdentifier,
}

#[derive(Debug)]
pub struct Collection<T: Identified> {
    order: Vec<T::Id>,
    records: HashMap<T::Id, T>,
}

pub type TopicCollection = Collection<TopicRecord>;

impl<T: Identified> Default for Collection<T> {
    fn default() -> Self {
        Self {
            order: vec![],
            records: HashMap::new(),
        }
    }
}

impl<T: Identified> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(items: impl IntoIterator<Item = T>) -> Result<Self, CollectionError> {
        let mut collection = Self::new();
        for record in items {
            collection.add(record)?;
        }
        Ok(collection)
    }

    pub fn add(&mut self, record: T) -> Result<&T, CollectionError> {
        let id = record.id().clone();
        match self.records.entry(id.clone()) {
            Entry::Occupied(_) => Err(CollectionError::DuplicateIdentifier),
            Entry::Vacant(slot) => {
                self.order.push(id);
                Ok(slot.insert(record))
            }
        }
    }

    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        let record = self.records.remove(id)?;
        if let Some(pos) = self.order.iter().position(|x| x == id) {
            self.order.remove(pos);
        }
        Some(record)
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.records.get(id)
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.records.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(|id| self.records.get(id))
    }

    pub fn ids(&self) -> &[T::Id] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
