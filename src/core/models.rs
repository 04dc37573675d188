use serde::{Deserialize, Serialize};

/// A single message as returned by the group message listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationMessage {
    #[serde(default)]
    pub content: String,
}

/// Body of `GET /open/v5/groups/{groupId}/messages`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMessages {
    pub messages: Vec<ConversationMessage>,
    pub conversation_id: String,
}

impl GroupMessages {
    /// Message contents in listing order.
    #[must_use]
    pub fn contents(&self) -> Vec<String> {
        self.messages.iter().map(|m| m.content.clone()).collect()
    }
}

/// Body posted to `POST /open/v5/conversations/{id}/messages`.
#[derive(Debug, Clone, Serialize)]
pub struct OutgoingMessage<'a> {
    #[serde(rename = "type")]
    pub kind: &'a str,
    pub message: &'a str,
}

impl<'a> OutgoingMessage<'a> {
    #[must_use]
    pub fn text(message: &'a str) -> Self {
        Self {
            kind: "text",
            message,
        }
    }
}

/// One place returned by the local-search API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResultItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchResultItem>,
}

/// Location and purpose pulled out of a summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryFields {
    pub location: String,
    pub purpose: String,
}

impl SummaryFields {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.location.is_empty() && !self.purpose.is_empty()
    }
}
