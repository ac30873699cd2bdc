//! Append-only chat transcript.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One line in the chat window.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub is_bot: bool,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text.into(), false)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(text.into(), true)
    }

    fn new(text: String, is_bot: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            is_bot,
            timestamp: Utc::now(),
        }
    }
}

/// Messages in arrival order. Entries are never edited or removed; dropping
/// the session discards the log.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the welcome message. Returns `false` if the log already has messages.
    pub fn open(&mut self, greeting: &str) -> bool {
        if !self.messages.is_empty() {
            return false;
        }
        self.messages.push(ChatMessage::bot(greeting));
        true
    }

    pub fn push_user(&mut self, text: &str) -> &ChatMessage {
        self.push(ChatMessage::user(text))
    }

    pub fn push_bot(&mut self, text: &str) -> &ChatMessage {
        self.push(ChatMessage::bot(text))
    }

    fn push(&mut self, message: ChatMessage) -> &ChatMessage {
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_seeds_greeting_once() {
        let mut conv = Conversation::new();
        assert!(conv.open("hi"));
        assert!(!conv.open("hi again"));
        assert_eq!(conv.len(), 1);
        assert!(conv.messages()[0].is_bot);
        assert_eq!(conv.messages()[0].text, "hi");
    }

    #[test]
    fn test_messages_keep_arrival_order() {
        let mut conv = Conversation::new();
        conv.open("welcome");
        conv.push_user("visa?");
        conv.push_bot("answer");
        let flags: Vec<bool> = conv.messages().iter().map(|m| m.is_bot).collect();
        assert_eq!(flags, vec![true, false, true]);
        assert!(conv.messages()[1].timestamp <= conv.messages()[2].timestamp);
        assert_ne!(conv.messages()[1].id, conv.messages()[2].id);
    }

    #[test]
    fn test_serializes_flat_fields() {
        let msg = ChatMessage::user("hello");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["text"], "hello");
        assert_eq!(json["is_bot"], false);
        assert!(json["id"].is_string());
        assert!(json["timestamp"].is_string());
    }
}
