//! Domain entities - Core business objects with no external dependencies

pub mod message;
pub mod record;
pub mod record_map;

pub use message::Message;
pub use record::KeywordRecord;
pub use record_map::RecordMap;
