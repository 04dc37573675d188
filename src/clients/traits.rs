//! Seams between the request handlers and the three upstream services.
//!
//! Handlers hold these as trait objects so tests can swap in fakes.

use async_trait::async_trait;
use serde_json::Value;

use crate::core::models::{GroupMessages, SummaryFields};
use crate::errors::BotError;

/// Messaging platform: list the configured group's messages, post into a conversation.
#[async_trait]
pub trait MessagingPlatform: Send + Sync {
    /// Fails with [`BotError::Fetch`] on any non-200 answer.
    async fn fetch_messages(&self) -> Result<GroupMessages, BotError>;

    /// Fails with [`BotError::Send`] on any non-200 answer.
    async fn send_message(&self, conversation_id: &str, message: &str)
    -> Result<Value, BotError>;
}

/// Language-model summarizer. Never fails: provider errors come back as text.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, messages: &[String]) -> String;
}

/// Local place search. Never fails: upstream errors come back as text.
#[async_trait]
pub trait LocalSearch: Send + Sync {
    async fn search(&self, fields: &SummaryFields) -> String;
}
