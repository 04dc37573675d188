use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("Failed to fetch messages: {status} {body}")]
    Fetch { status: u16, body: String },

    #[error("Failed to send message: {status} {body}")]
    Send { status: u16, body: String },

    #[error("Failed to send HTTP request: {0}")]
    Http(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Summary is required")]
    MissingSummary,

    #[error("Failed to extract location or purpose from summary")]
    MissingFields,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl BotError {
    /// HTTP status a handler answers with when this error reaches it.
    ///
    /// Caller input problems are 400; every upstream or internal failure is 500.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            BotError::MissingSummary | BotError::MissingFields => 400,
            _ => 500,
        }
    }
}

impl From<reqwest::Error> for BotError {
    fn from(error: reqwest::Error) -> Self {
        BotError::Http(error.to_string())
    }
}

impl From<serde_json::Error> for BotError {
    fn from(error: serde_json::Error) -> Self {
        BotError::Parse(error.to_string())
    }
}
