use crate::common::error::{AppError, ServiceResult};
use crate::entities::messages::Message as MessageEntity;
use crate::models::people::PersonWithUrl;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MAX_CONTENT_LENGTH: usize = 5000;

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub message_id: i64,
    pub sender_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<MessageEntity> for Message {
    fn from(value: MessageEntity) -> Self {
        Self {
            message_id: value.id,
            sender_id: value.sender_id,
            content: value.content,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageView {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// `None` when the sender no longer participates in the conversation.
    pub sender: Option<PersonWithUrl>,
    pub mine: bool,
}

/// The reply form rendered below a conversation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MessageForm {
    pub sender_id: i64,
    pub conversation_id: i64,
    pub content: String,
}

impl MessageForm {
    pub fn new(sender_id: i64, conversation_id: i64) -> Self {
        Self {
            sender_id,
            conversation_id,
            content: String::new(),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Returns the trimmed content when it can be sent.
    pub fn validate(&self) -> ServiceResult<&str> {
        let content = self.content.trim();
        if content.is_empty() {
            return Err(AppError::MessagesBlank);
        }
        if content.chars().count() > MAX_CONTENT_LENGTH {
            return Err(AppError::MessagesTooLong);
        }
        Ok(content)
    }
}

#[derive(Debug, Deserialize)]
pub struct ReplyArgs {
    #[serde(default)]
    pub content: String,
}
