//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Entities: Core business objects (KeywordRecord, RecordMap, Message)
//! - Traits: Abstractions for infrastructure (KeywordStore)

pub mod entities;
pub mod traits;
