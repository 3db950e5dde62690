use crate::domain::common::AggregateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub Uuid);

impl MessageId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for MessageId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(MessageId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageOrigin {
    User,
    Assistant,
}

impl MessageOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageOrigin::User => "user",
            MessageOrigin::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub origin: MessageOrigin,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(origin: MessageOrigin, content: impl Into<String>) -> Self {
        Self {
            id: MessageId::new_v4(),
            origin,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageOrigin::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageOrigin::Assistant, content)
    }

    pub fn is_user(&self) -> bool {
        self.origin == MessageOrigin::User
    }

    /// "14:05" in UTC
    pub fn time_label(&self) -> String {
        self.created_at.format("%H:%M").to_string()
    }
}
