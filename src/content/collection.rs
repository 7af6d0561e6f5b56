//! Ordered, id-indexed record collection.

use std::ops::Deref;

use rustc_hash::FxHashMap;

use super::types::Record;

/// Records in authored order plus an id → position index.
///
/// When an id repeats, the first record wins lookups (same result as a
/// front-to-back scan) and the id is remembered for the integrity report.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
    index: FxHashMap<String, usize>,
    duplicate_ids: Vec<String>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: FxHashMap::default(),
            duplicate_ids: Vec::new(),
        }
    }
}

impl<T: Record> Collection<T> {
    pub fn from_records(items: Vec<T>) -> Self {
        let mut index = FxHashMap::default();
        let mut duplicate_ids = Vec::new();

        for (pos, item) in items.iter().enumerate() {
            if index.contains_key(item.id()) {
                duplicate_ids.push(item.id().to_string());
            } else {
                index.insert(item.id().to_string(), pos);
            }
        }

        Self {
            items,
            index,
            duplicate_ids,
        }
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&pos| &self.items[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }
}

impl<T> Collection<T> {
    pub fn duplicate_ids(&self) -> &[String] {
        &self.duplicate_ids
    }
}

impl<T> Deref for Collection<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}
