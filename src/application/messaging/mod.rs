//! Message handling - Inbound message parsing

pub mod parser;

pub use parser::MessageParser;
