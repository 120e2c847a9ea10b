use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct ChatMessage {
    pub text: String,
    /// `true` for messages typed by the user, `false` for assistant replies.
    pub from_user: bool,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn from_user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            from_user: true,
            sent_at: Utc::now(),
        }
    }

    pub fn from_assistant(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            from_user: false,
            sent_at: Utc::now(),
        }
    }
}
