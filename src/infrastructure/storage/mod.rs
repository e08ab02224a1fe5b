//! File-based keyword store implementation

pub mod snapshot;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use crate::application::errors::StorageError;
use crate::domain::entities::{KeywordRecord, RecordMap};
use crate::domain::traits::KeywordStore;

/// JSON file-backed keyword store.
///
/// A single lock guards the record map and the reply RNG. Each operation, including the
/// snapshot write that follows a mutation, runs inside one critical section.
pub struct JsonKeywordStore {
    path: PathBuf,
    state: Mutex<StoreState>,
}

struct StoreState {
    records: RecordMap,
    rng: StdRng,
}

impl JsonKeywordStore {
    /// Load the store from `path` (missing file means empty store)
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        Self::open_with_rng(path, StdRng::from_entropy())
    }

    /// Same as `open`, with a caller-supplied random source for reply selection
    pub fn open_with_rng(path: impl Into<PathBuf>, rng: StdRng) -> Result<Self, StorageError> {
        let path = path.into();
        let records = snapshot::load(&path)?;
        Ok(Self {
            path,
            state: Mutex::new(StoreState { records, rng }),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `op` to the record map and persist if it reports a change.
    /// The in-memory change is kept even when the write fails.
    async fn mutate<F>(&self, name: &str, keyword: &str, op: F) -> Result<bool, StorageError>
    where
        F: FnOnce(&mut RecordMap) -> bool + Send,
    {
        let mut state = self.state.lock().await;
        let changed = op(&mut state.records);
        if !changed {
            tracing::debug!("{} '{}': no change", name, keyword);
            return Ok(false);
        }

        tracing::debug!("{} '{}'", name, keyword);
        if let Err(e) = snapshot::save(&self.path, &state.records) {
            tracing::error!("Failed to persist word bank after {}: {}", name, e);
            return Err(e);
        }
        Ok(true)
    }

    async fn read<T, F>(&self, op: F) -> T
    where
        F: FnOnce(&RecordMap) -> T + Send,
    {
        let state = self.state.lock().await;
        op(&state.records)
    }
}

#[async_trait]
impl KeywordStore for JsonKeywordStore {
    async fn add_entry(&self, keyword: &str, content: &str) -> Result<bool, StorageError> {
        self.mutate("add_entry", keyword, |records| {
            records.entry(keyword).add_entry(content)
        })
        .await
    }

    async fn remove_entry(&self, keyword: &str, content: &str) -> Result<bool, StorageError> {
        self.mutate("remove_entry", keyword, |records| {
            records
                .get_mut(keyword)
                .map(|record| record.remove_entry(content))
                .unwrap_or(false)
        })
        .await
    }

    async fn remove_entry_at(
        &self,
        keyword_or_alias: &str,
        index: usize,
    ) -> Result<bool, StorageError> {
        self.mutate("remove_entry_at", keyword_or_alias, |records| {
            records
                .lookup_mut(keyword_or_alias)
                .map(|record| record.remove_entry_at(index))
                .unwrap_or(false)
        })
        .await
    }

    async fn set_aliases(&self, keyword: &str, aliases: Vec<String>) -> Result<(), StorageError> {
        self.mutate("set_aliases", keyword, |records| {
            records.entry(keyword).set_aliases(aliases);
            true
        })
        .await?;
        Ok(())
    }

    async fn add_alias(&self, keyword: &str, alias: &str) -> Result<bool, StorageError> {
        self.mutate("add_alias", keyword, |records| {
            records.entry(keyword).add_alias(alias)
        })
        .await
    }

    async fn enable_in_group(&self, keyword: &str, group_id: &str) -> Result<bool, StorageError> {
        self.mutate("enable_in_group", keyword, |records| {
            records.entry(keyword).enable_group(group_id)
        })
        .await
    }

    async fn disable_in_group(&self, keyword: &str, group_id: &str) -> Result<bool, StorageError> {
        self.mutate("disable_in_group", keyword, |records| {
            records
                .get_mut(keyword)
                .map(|record| record.disable_group(group_id))
                .unwrap_or(false)
        })
        .await
    }

    async fn delete_keyword(&self, keyword: &str) -> Result<bool, StorageError> {
        self.mutate("delete_keyword", keyword, |records| {
            records.remove(keyword).is_some()
        })
        .await
    }

    async fn list_entries(&self, keyword_or_alias: &str) -> Vec<String> {
        self.read(|records| {
            records
                .lookup(keyword_or_alias)
                .map(|record| record.entries.clone())
                .unwrap_or_default()
        })
        .await
    }

    async fn is_enabled(&self, keyword_or_alias: &str, group_id: &str) -> bool {
        self.read(|records| {
            records
                .lookup(keyword_or_alias)
                .map(|record| record.is_enabled_in(group_id))
                .unwrap_or(false)
        })
        .await
    }

    async fn get_keyword_info(&self, keyword_or_alias: &str) -> Option<KeywordRecord> {
        self.read(|records| records.lookup(keyword_or_alias).cloned()).await
    }

    async fn get_reply(&self, keyword_or_alias: &str, group_id: &str) -> Option<String> {
        let mut state = self.state.lock().await;
        let StoreState { records, rng } = &mut *state;
        records
            .lookup(keyword_or_alias)
            .filter(|record| record.is_enabled_in(group_id))
            .and_then(|record| record.pick_entry(rng))
            .map(str::to_string)
    }

    async fn get_all_keywords(&self) -> Vec<String> {
        self.read(RecordMap::keywords_with_aliases).await
    }

    async fn get_all_keys(&self) -> Vec<String> {
        self.read(RecordMap::keys).await
    }

    async fn contains_keyword(&self, keyword: &str) -> bool {
        self.read(|records| records.contains(keyword)).await
    }
}
