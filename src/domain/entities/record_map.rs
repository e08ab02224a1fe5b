use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::KeywordRecord;

/// Canonical keyword -> record. Iterates in insertion order, which is file order after a load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordMap {
    records: IndexMap<String, KeywordRecord>,
}

impl RecordMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate a keyword or alias into its canonical key.
    ///
    /// An exact canonical match wins. Otherwise the first record (in iteration order)
    /// listing `name` among its aliases is returned. Alias collisions are not detected.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        if let Some((key, _)) = self.records.get_key_value(name) {
            return Some(key.as_str());
        }
        self.records
            .iter()
            .find(|(_, record)| record.has_alias(name))
            .map(|(key, _)| key.as_str())
    }

    /// Look up a record through alias resolution
    pub fn lookup(&self, name: &str) -> Option<&KeywordRecord> {
        let key = self.resolve(name)?;
        self.records.get(key)
    }

    /// Mutable lookup through alias resolution
    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut KeywordRecord> {
        let key = self.resolve(name)?.to_string();
        self.records.get_mut(&key)
    }

    /// Exact canonical-key access, no alias resolution
    pub fn get(&self, keyword: &str) -> Option<&KeywordRecord> {
        self.records.get(keyword)
    }

    pub fn get_mut(&mut self, keyword: &str) -> Option<&mut KeywordRecord> {
        self.records.get_mut(keyword)
    }

    /// Get-or-create access used by the lazily-creating write paths
    pub fn entry(&mut self, keyword: &str) -> &mut KeywordRecord {
        self.records.entry(keyword.to_string()).or_default()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.records.contains_key(keyword)
    }

    /// Remove a record, keeping the order of the remaining ones
    pub fn remove(&mut self, keyword: &str) -> Option<KeywordRecord> {
        self.records.shift_remove(keyword)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &KeywordRecord)> {
        self.records.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut KeywordRecord)> {
        self.records.iter_mut()
    }

    /// Canonical keys, each followed by its aliases
    pub fn keywords_with_aliases(&self) -> Vec<String> {
        self.records
            .iter()
            .flat_map(|(key, record)| std::iter::once(key).chain(record.aliases.iter()))
            .cloned()
            .collect()
    }

    pub fn keys(&self) -> Vec<String> {
        self.records.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
