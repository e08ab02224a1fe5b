//! Message parser - Parses raw console lines into messages

use crate::domain::entities::Message;

/// Turns raw lines into messages, detecting the wake prefix
pub struct MessageParser {
    wake_prefix: String,
}

impl MessageParser {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            wake_prefix: prefix.into(),
        }
    }

    /// Parse a line. A leading wake prefix marks the message as addressed and is stripped.
    pub fn parse(&self, chat_id: impl Into<String>, text: impl Into<String>) -> Message {
        let text = text.into();

        if !self.wake_prefix.is_empty() {
            if let Some(rest) = text.strip_prefix(&self.wake_prefix) {
                return Message::new(chat_id, rest).addressed();
            }
        }

        Message::new(chat_id, text)
    }
}
