use crate::{
    error::{AppError, AppResult},
    models::{Category, ChatMessage},
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1000);

const GREETING: &str = "Hello, what would you like to report?";
const FALLBACK: &str = "Hello, how can I help you?";

/// Canned assistant reply for a message tagged with an optional category label.
pub fn reply_for(category: Option<&str>) -> &'static str {
    let Some(label) = category else {
        return GREETING;
    };

    match Category::from_label(label) {
        Some(Category::Storm) => {
            "We are monitoring the storm. Can you describe the current situation?"
        }
        Some(Category::Fire) => "Fire report received. Are there people in danger?",
        Some(Category::Flood) => "Flood alert. What water level are you observing?",
        Some(Category::Avalanche) => "Avalanche emergency. Can you give your exact location?",
        _ => FALLBACK,
    }
}

/// Conversation log with the scripted assistant. Each user message schedules
/// one reply after a fixed delay; replies are never cancelled.
#[derive(Clone)]
pub struct ChatService {
    messages: Arc<RwLock<Vec<ChatMessage>>>,
    reply_delay: Duration,
}

impl Default for ChatService {
    fn default() -> Self {
        Self::new(DEFAULT_REPLY_DELAY)
    }
}

impl ChatService {
    pub fn new(reply_delay: Duration) -> Self {
        Self {
            messages: Arc::new(RwLock::new(Vec::new())),
            reply_delay,
        }
    }

    pub async fn send(&self, text: &str, category: Option<&str>) -> AppResult<ChatMessage> {
        if text.trim().is_empty() {
            return Err(AppError::Validation("message must not be empty".to_string()));
        }

        let message = ChatMessage::from_user(text);
        self.messages.write().await.push(message.clone());

        let reply = reply_for(category);
        let messages = Arc::clone(&self.messages);
        let delay = self.reply_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            messages.write().await.push(ChatMessage::from_assistant(reply));
            tracing::debug!("Chat reply delivered");
        });

        Ok(message)
    }

    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.messages.read().await.clone()
    }
}
