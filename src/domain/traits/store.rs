use async_trait::async_trait;
use crate::application::errors::StorageError;
use crate::domain::entities::KeywordRecord;

/// KeywordStore trait - the keyword-reply contract offered to command handlers
///
/// Read operations resolve aliases. Write operations address the raw keyword string,
/// so writing through an alias creates or mutates a record under the alias itself.
/// Every write that changes state persists the full store before returning.
#[async_trait]
pub trait KeywordStore: Send + Sync {
    // Mutations
    async fn add_entry(&self, keyword: &str, content: &str) -> Result<bool, StorageError>;
    async fn remove_entry(&self, keyword: &str, content: &str) -> Result<bool, StorageError>;
    /// Remove the entry at a 0-based index. False when unresolved or out of range.
    async fn remove_entry_at(
        &self,
        keyword_or_alias: &str,
        index: usize,
    ) -> Result<bool, StorageError>;
    async fn set_aliases(&self, keyword: &str, aliases: Vec<String>) -> Result<(), StorageError>;
    async fn add_alias(&self, keyword: &str, alias: &str) -> Result<bool, StorageError>;
    async fn enable_in_group(&self, keyword: &str, group_id: &str) -> Result<bool, StorageError>;
    async fn disable_in_group(
        &self,
        keyword: &str,
        group_id: &str,
    ) -> Result<bool, StorageError>;
    async fn delete_keyword(&self, keyword: &str) -> Result<bool, StorageError>;

    // Reads
    async fn list_entries(&self, keyword_or_alias: &str) -> Vec<String>;
    async fn is_enabled(&self, keyword_or_alias: &str, group_id: &str) -> bool;
    async fn get_keyword_info(&self, keyword_or_alias: &str) -> Option<KeywordRecord>;
    /// A random entry, if the keyword resolves, is enabled in the group and has entries
    async fn get_reply(&self, keyword_or_alias: &str, group_id: &str) -> Option<String>;
    async fn get_all_keywords(&self) -> Vec<String>;
    async fn get_all_keys(&self) -> Vec<String>;
    /// Exact canonical-key membership
    async fn contains_keyword(&self, keyword: &str) -> bool;
}
