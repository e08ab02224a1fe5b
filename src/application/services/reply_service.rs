use std::sync::Arc;

use crate::domain::entities::Message;
use crate::domain::traits::KeywordStore;

/// Turns inbound group messages into keyword replies
pub struct ReplyService {
    store: Arc<dyn KeywordStore>,
    need_prefix: bool,
}

impl ReplyService {
    pub fn new(store: Arc<dyn KeywordStore>, need_prefix: bool) -> Self {
        Self { store, need_prefix }
    }

    /// Reply for a message, if its text is a keyword enabled in its chat
    pub async fn reply_to(&self, message: &Message) -> Option<String> {
        if self.need_prefix && !message.addressed {
            return None;
        }

        let reply = self.store.get_reply(message.keyword(), &message.chat_id).await;
        if reply.is_some() {
            tracing::debug!("[{}] keyword hit: {}", message.chat_id, message.keyword());
        }
        reply
    }
}
