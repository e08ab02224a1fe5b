/// An inbound chat message that may trigger a keyword reply
#[derive(Debug, Clone)]
pub struct Message {
    pub chat_id: String,
    pub text: String,
    /// The message mentioned or woke the bot
    pub addressed: bool,
}

impl Message {
    pub fn new(chat_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: text.into(),
            addressed: false,
        }
    }

    pub fn addressed(mut self) -> Self {
        self.addressed = true;
        self
    }

    /// Text with surrounding whitespace removed, as matched against keywords
    pub fn keyword(&self) -> &str {
        self.text.trim()
    }
}
