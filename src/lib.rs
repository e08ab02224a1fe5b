//! Keyword-reply word bank for chat bots

pub mod domain;
pub mod application;
pub mod infrastructure;

pub use application::errors::{BotError, ConfigError, StorageError};
pub use domain::entities::{KeywordRecord, Message, RecordMap};
pub use domain::traits::KeywordStore;
pub use infrastructure::storage::JsonKeywordStore;
