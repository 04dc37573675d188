//! Messaging platform API client module
//!
//! Lists pending group messages and posts replies into a conversation.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{error, info};

use super::traits::MessagingPlatform;
use crate::core::config::AppConfig;
use crate::core::models::{GroupMessages, OutgoingMessage};
use crate::errors::BotError;

pub struct ChannelClient {
    http: Client,
    api_key: String,
    base_url: String,
    group_id: String,
}

impl ChannelClient {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            api_key: config.channeltalk_api_key.clone(),
            base_url: config.channeltalk_base_url.clone(),
            group_id: config.group_id.clone(),
        }
    }

    #[must_use]
    pub fn group_messages_url(&self) -> String {
        format!("{}/open/v5/groups/{}/messages", self.base_url, self.group_id)
    }

    #[must_use]
    pub fn conversation_messages_url(&self, conversation_id: &str) -> String {
        format!(
            "{}/open/v5/conversations/{}/messages",
            self.base_url, conversation_id
        )
    }
}

#[async_trait]
impl MessagingPlatform for ChannelClient {
    async fn fetch_messages(&self) -> Result<GroupMessages, BotError> {
        let response = self
            .http
            .get(self.group_messages_url())
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), group_id = %self.group_id, "Message fetch rejected");
            return Err(BotError::Fetch {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        let messages: GroupMessages = serde_json::from_str(&text)?;
        info!(
            count = messages.messages.len(),
            conversation_id = %messages.conversation_id,
            "Fetched group messages"
        );
        Ok(messages)
    }

    async fn send_message(
        &self,
        conversation_id: &str,
        message: &str,
    ) -> Result<Value, BotError> {
        let response = self
            .http
            .post(self.conversation_messages_url(conversation_id))
            .bearer_auth(&self.api_key)
            .json(&OutgoingMessage::text(message))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), conversation_id, "Message send rejected");
            return Err(BotError::Send {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        let value: Value = serde_json::from_str(&text)?;
        info!(conversation_id, "Posted message to conversation");
        Ok(value)
    }
}
