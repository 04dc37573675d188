//! LLM (OpenAI) API client module
//!
//! Turns a list of chat messages into the templated place/purpose summary.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{info, warn};

use super::traits::Summarizer;
use crate::core::config::AppConfig;
use crate::errors::BotError;
use crate::prompt::{SUMMARY_SYSTEM_PROMPT, build_user_prompt};

/// LLM API client for generating summaries
pub struct LlmClient {
    http: Client,
    api_key: String,
    org_id: Option<String>,
    model_name: String,
    base_url: String,
}

impl LlmClient {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            api_key: config.openai_api_key.clone(),
            org_id: config.openai_org_id.clone(),
            model_name: config.openai_model.clone(),
            base_url: config.openai_base_url.clone(),
        }
    }

    /// System template instruction followed by the joined conversation.
    #[must_use]
    pub fn build_prompt(&self, messages: &[String]) -> Vec<ChatCompletionMessage> {
        vec![
            ChatCompletionMessage {
                role: MessageRole::system,
                content: Content::Text(SUMMARY_SYSTEM_PROMPT.to_string()),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
            ChatCompletionMessage {
                role: MessageRole::user,
                content: Content::Text(build_user_prompt(messages)),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
        ]
    }

    /// Chat-completion request body for `prompt`.
    #[must_use]
    pub fn build_request_body(&self, prompt: &[ChatCompletionMessage]) -> Value {
        let input_messages: Vec<Value> = prompt
            .iter()
            .map(|msg| {
                let role_str = match msg.role {
                    MessageRole::system => "system",
                    MessageRole::user => "user",
                    MessageRole::assistant => "assistant",
                    MessageRole::function => "function",
                    MessageRole::tool => "tool",
                };

                let content_val = match &msg.content {
                    Content::Text(text) => json!(text),
                    Content::ImageUrl(_) => json!(""),
                };

                json!({
                    "role": role_str,
                    "content": content_val
                })
            })
            .collect();

        json!({
            "model": self.model_name,
            "messages": input_messages
        })
    }

    /// Sends the prompt and returns the trimmed text of the first choice.
    pub async fn generate_summary(
        &self,
        prompt: Vec<ChatCompletionMessage>,
    ) -> Result<String, BotError> {
        #[cfg(feature = "debug-logs")]
        info!("Using ChatGPT prompt:\n{:?}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            model = %self.model_name,
            "Generating summary with {} messages in prompt",
            prompt.len()
        );

        let request_body = self.build_request_body(&prompt);

        let mut request = self
            .http
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body);

        if let Some(org) = &self.org_id {
            request = request.header("OpenAI-Organization", org);
        }

        let response = request
            .send()
            .await
            .map_err(|e| BotError::Http(format!("OpenAI API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(BotError::Http(format!(
                "OpenAI API error: {} {}",
                status.as_u16(),
                error_text
            )));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| BotError::Parse(format!("Failed to parse OpenAI response: {}", e)))?;

        first_choice_text(&response_json)
            .ok_or_else(|| BotError::Parse("No text in response".to_string()))
    }
}

/// Trimmed `choices[0].message.content`, if present.
#[must_use]
pub fn first_choice_text(response: &Value) -> Option<String> {
    response
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .map(|s| s.trim().to_string())
}

#[async_trait]
impl Summarizer for LlmClient {
    async fn summarize(&self, messages: &[String]) -> String {
        match self.generate_summary(self.build_prompt(messages)).await {
            Ok(summary) => summary,
            Err(e) => {
                warn!("Summarization degraded to error text: {}", e);
                format!("Error summarizing chat: {e}")
            }
        }
    }
}
