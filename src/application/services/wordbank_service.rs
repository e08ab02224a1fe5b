use std::fmt;
use std::sync::Arc;

use crate::application::errors::BotError;
use crate::domain::entities::KeywordRecord;
use crate::domain::traits::KeywordStore;

/// Result of deleting one keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(String),
    Missing(String),
}

impl fmt::Display for DeleteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteOutcome::Deleted(keyword) => write!(f, "Deleted keyword: {}", keyword),
            DeleteOutcome::Missing(keyword) => write!(f, "Keyword [{}] does not exist", keyword),
        }
    }
}

/// Admin operations over the word bank
pub struct WordBankService {
    store: Arc<dyn KeywordStore>,
    words_limit: usize,
}

impl WordBankService {
    pub fn new(store: Arc<dyn KeywordStore>, words_limit: usize) -> Self {
        Self { store, words_limit }
    }

    /// Add an entry and enable the keyword in the group it was added from.
    /// Returns false when the entry already existed.
    pub async fn add_entry(
        &self,
        keyword: &str,
        content: &str,
        group_id: &str,
    ) -> Result<bool, BotError> {
        let count = self.store.list_entries(keyword).await.len();
        if count >= self.words_limit {
            return Err(BotError::LimitReached {
                keyword: keyword.to_string(),
                limit: self.words_limit,
            });
        }

        let added = self.store.add_entry(keyword, content).await?;
        self.store.enable_in_group(keyword, group_id).await?;
        tracing::info!("Added entry to '{}' (group {})", keyword, group_id);
        Ok(added)
    }

    /// Remove the entry at a 0-based index
    pub async fn remove_entry_at(&self, keyword: &str, index: usize) -> Result<(), BotError> {
        if self.store.remove_entry_at(keyword, index).await? {
            Ok(())
        } else {
            Err(BotError::NotFound(format!("entry {} of keyword '{}'", index, keyword)))
        }
    }

    pub async fn delete_keywords(
        &self,
        keywords: &[String],
    ) -> Result<Vec<DeleteOutcome>, BotError> {
        let mut outcomes = Vec::with_capacity(keywords.len());
        for keyword in keywords {
            if self.store.delete_keyword(keyword).await? {
                tracing::info!("Deleted keyword '{}'", keyword);
                outcomes.push(DeleteOutcome::Deleted(keyword.clone()));
            } else {
                outcomes.push(DeleteOutcome::Missing(keyword.clone()));
            }
        }
        Ok(outcomes)
    }

    pub async fn set_aliases(&self, keyword: &str, aliases: Vec<String>) -> Result<(), BotError> {
        if aliases.is_empty() {
            return Err(BotError::InvalidArgs("at least one alias is required".to_string()));
        }
        self.ensure_known(keyword).await?;
        self.store.set_aliases(keyword, aliases).await?;
        Ok(())
    }

    /// Enable a keyword in each group. Returns the groups that were newly enabled.
    pub async fn enable(&self, keyword: &str, groups: &[String]) -> Result<Vec<String>, BotError> {
        self.ensure_groups(groups)?;
        self.ensure_known(keyword).await?;

        let mut changed = Vec::new();
        for group in groups {
            if self.store.enable_in_group(keyword, group).await? {
                changed.push(group.clone());
            }
        }
        Ok(changed)
    }

    /// Disable a keyword in each group. Returns the groups that were actually disabled.
    pub async fn disable(&self, keyword: &str, groups: &[String]) -> Result<Vec<String>, BotError> {
        self.ensure_groups(groups)?;
        self.ensure_known(keyword).await?;

        let mut changed = Vec::new();
        for group in groups {
            if self.store.disable_in_group(keyword, group).await? {
                changed.push(group.clone());
            }
        }
        Ok(changed)
    }

    pub async fn describe(&self, keyword: &str) -> Result<String, BotError> {
        let record = self
            .store
            .get_keyword_info(keyword)
            .await
            .ok_or_else(|| BotError::NotFound(format!("keyword '{}'", keyword)))?;
        Ok(format_record(keyword, &record))
    }

    pub async fn list_keys(&self) -> Vec<String> {
        self.store.get_all_keys().await
    }

    async fn ensure_known(&self, keyword: &str) -> Result<(), BotError> {
        let known = self.store.get_all_keywords().await;
        if known.iter().any(|k| k == keyword) {
            Ok(())
        } else {
            Err(BotError::NotFound(format!("keyword '{}'", keyword)))
        }
    }

    fn ensure_groups(&self, groups: &[String]) -> Result<(), BotError> {
        if groups.is_empty() {
            return Err(BotError::InvalidArgs("at least one group is required".to_string()));
        }
        Ok(())
    }
}

fn format_record(keyword: &str, record: &KeywordRecord) -> String {
    let mut text = format!("Keyword [{}] entries:", keyword);
    for (i, entry) in record.entries.iter().enumerate() {
        text.push_str(&format!("\n{}. {}", i + 1, entry));
    }
    if !record.aliases.is_empty() {
        text.push_str(&format!("\nAliases: {}", record.aliases.join(", ")));
    }
    let groups = if record.enabled_groups.is_empty() {
        "none".to_string()
    } else {
        record.enabled_groups.join(", ")
    };
    text.push_str(&format!("\nEnabled groups: {}", groups));
    text
}
