//! Application services - Business logic orchestration

pub mod reply_service;
pub mod wordbank_service;

pub use reply_service::ReplyService;
pub use wordbank_service::{DeleteOutcome, WordBankService};
