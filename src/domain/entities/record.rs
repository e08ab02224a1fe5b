use rand::Rng;
use serde::{Deserialize, Serialize};

/// Reply data bound to one canonical keyword
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRecord {
    #[serde(default)]
    pub entries: Vec<String>,
    #[serde(default)]
    pub enabled_groups: Vec<String>,
    #[serde(default, rename = "alias")]
    pub aliases: Vec<String>,
}

impl KeywordRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry unless it is already present. Returns true if appended.
    pub fn add_entry(&mut self, content: &str) -> bool {
        push_unique(&mut self.entries, content)
    }

    /// Remove an entry by its content. Returns true if removed.
    pub fn remove_entry(&mut self, content: &str) -> bool {
        remove_value(&mut self.entries, content)
    }

    /// Remove the entry at `index` (0-based). Out of range leaves the record untouched.
    pub fn remove_entry_at(&mut self, index: usize) -> bool {
        if index < self.entries.len() {
            self.entries.remove(index);
            true
        } else {
            false
        }
    }

    pub fn set_aliases(&mut self, aliases: Vec<String>) {
        self.aliases = aliases;
    }

    pub fn add_alias(&mut self, alias: &str) -> bool {
        push_unique(&mut self.aliases, alias)
    }

    pub fn has_alias(&self, name: &str) -> bool {
        self.aliases.iter().any(|a| a == name)
    }

    pub fn enable_group(&mut self, group_id: &str) -> bool {
        push_unique(&mut self.enabled_groups, group_id)
    }

    pub fn disable_group(&mut self, group_id: &str) -> bool {
        remove_value(&mut self.enabled_groups, group_id)
    }

    pub fn is_enabled_in(&self, group_id: &str) -> bool {
        self.enabled_groups.iter().any(|g| g == group_id)
    }

    /// Pick one entry uniformly at random, if any
    pub fn pick_entry<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.entries.len());
        Some(self.entries[index].as_str())
    }

    /// Collapse duplicate entries and groups, keeping the first occurrence.
    /// Returns how many values were dropped.
    pub(crate) fn dedup(&mut self) -> usize {
        dedup_in_order(&mut self.entries) + dedup_in_order(&mut self.enabled_groups)
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) -> bool {
    if values.iter().any(|v| v == value) {
        return false;
    }
    values.push(value.to_string());
    true
}

fn remove_value(values: &mut Vec<String>, value: &str) -> bool {
    match values.iter().position(|v| v == value) {
        Some(pos) => {
            values.remove(pos);
            true
        }
        None => false,
    }
}

fn dedup_in_order(values: &mut Vec<String>) -> usize {
    let before = values.len();
    let mut seen = std::collections::HashSet::new();
    values.retain(|v| seen.insert(v.clone()));
    before - values.len()
}
