//! Placeholder chat assistant.
//!
//! The bot is a static echo: every user message gets "Response to {text}"
//! back. No inference backend is involved; voice input is handled by a
//! platform recognizer outside this crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Author {
    User,
    Bot,
}

/// A single chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub author: Author,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Render as a transcript line, "You: …" or "Bot: …".
    pub fn display(&self) -> String {
        match self.author {
            Author::User => format!("You: {}", self.text),
            Author::Bot => format!("Bot: {}", self.text),
        }
    }
}

/// Session-scoped chat log with the echo bot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Send a user message and receive the canned bot reply.
    ///
    /// Blank input is rejected; the UI keeps the send action disabled for
    /// empty text.
    pub fn send(&mut self, text: &str) -> Result<&ChatMessage, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "message".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        let now = Utc::now();
        self.messages.push(ChatMessage {
            author: Author::User,
            text: text.to_string(),
            sent_at: now,
        });
        self.messages.push(ChatMessage {
            author: Author::Bot,
            text: format!("Response to {text}"),
            sent_at: now,
        });
        // Just pushed the reply
        Ok(self.messages.last().unwrap())
    }

    /// All messages, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Render the whole conversation as transcript lines.
    pub fn transcript(&self) -> String {
        self.messages
            .iter()
            .map(ChatMessage::display)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
