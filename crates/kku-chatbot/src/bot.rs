//! Paced replies.
//!
//! Free-text answers wait a random delay before they are produced. The delay
//! is a plain sleep: closing the chat does not cancel a pending reply.

use kku_core::config::ChatbotConfig;
use kku_core::Locale;
use rand::Rng;
use std::time::Duration;

use crate::{find_response, quick_reply_response};

/// Answers questions for one locale with the configured pacing.
#[derive(Debug, Clone)]
pub struct ChatBot {
    locale: Locale,
    delay_min: Duration,
    delay_max: Duration,
}

impl ChatBot {
    pub fn new(locale: Locale, config: &ChatbotConfig) -> Self {
        let (delay_min, delay_max) = config.delay_range();
        Self {
            locale,
            delay_min,
            // A misordered range collapses to the minimum.
            delay_max: delay_max.max(delay_min),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Uniformly random delay in the configured range.
    pub fn reply_delay(&self) -> Duration {
        if self.delay_max == self.delay_min {
            return self.delay_min;
        }
        let min = self.delay_min.as_millis() as u64;
        let max = self.delay_max.as_millis() as u64;
        Duration::from_millis(rand::thread_rng().gen_range(min..=max))
    }

    /// Answer free text after the reply delay.
    pub async fn answer(&self, message: &str) -> &'static str {
        let delay = self.reply_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        find_response(message, self.locale)
    }

    /// Answer a quick-reply button immediately.
    pub fn quick_reply(&self, key: &str) -> &'static str {
        quick_reply_response(key, self.locale)
    }
}
