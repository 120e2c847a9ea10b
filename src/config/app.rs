use super::parse_bool_env;
use crate::services::chat::DEFAULT_REPLY_DELAY;
use std::env;
use std::time::Duration;

/// Behaviour of the in-memory services.
#[derive(Debug, Clone, Copy)]
pub struct AppConfig {
    pub chat_reply_delay: Duration,
    pub seed_sample_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            chat_reply_delay: DEFAULT_REPLY_DELAY,
            seed_sample_data: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(raw) = env::var("CHAT_REPLY_DELAY_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) => cfg.chat_reply_delay = Duration::from_millis(ms),
                Err(err) => {
                    tracing::warn!("Invalid CHAT_REPLY_DELAY_MS '{}': {}", raw, err);
                }
            }
        }
        cfg.seed_sample_data = parse_bool_env("SEED_SAMPLE_DATA", cfg.seed_sample_data);

        cfg
    }
}
