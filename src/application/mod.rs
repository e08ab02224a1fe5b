//! Application layer - Use cases and business logic
//!
//! This layer contains:
//! - Services: Word bank administration and keyword replies
//! - Errors: Domain-specific errors
//! - Messaging: Message parsing

pub mod errors;
pub mod services;
pub mod messaging;
