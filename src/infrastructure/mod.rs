//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Storage: Word bank persistence

pub mod config;
pub mod storage;
