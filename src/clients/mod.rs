//! Client modules for external API interactions

pub mod channel_client;
pub mod llm_client;
pub mod search_client;
pub mod traits;

pub use channel_client::ChannelClient;
pub use llm_client::LlmClient;
pub use search_client::SearchClient;
pub use traits::{LocalSearch, MessagingPlatform, Summarizer};
