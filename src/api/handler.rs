//! HTTP entrypoints - single-pass orchestration over the three upstream clients.
//!
//! Routes:
//! - `POST /summary` fetch group messages, summarize, post the summary back
//! - `POST /recommend` extract place/purpose from a summary, search, post results back
//! - `POST /summary-recommend` both of the above in one request

use axum::body::Bytes;
use axum::extract::State;
use axum::response::Response;
use axum::routing::post;
use axum::Router;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

use super::helpers::{error_response, ok_json};
use super::parsing::parse_recommend_request;
use crate::clients::{
    ChannelClient, LlmClient, LocalSearch, MessagingPlatform, SearchClient, Summarizer,
};
use crate::core::config::{AppConfig, ServiceProfile};
use crate::errors::BotError;
use crate::extract::require_fields;

/// Clients shared by every request. Holds no per-request state.
#[derive(Clone)]
pub struct AppState {
    pub platform: Arc<dyn MessagingPlatform>,
    pub summarizer: Arc<dyn Summarizer>,
    pub search: Arc<dyn LocalSearch>,
}

impl AppState {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            platform: Arc::new(ChannelClient::new(config)),
            summarizer: Arc::new(LlmClient::new(config)),
            search: Arc::new(SearchClient::new(config)),
        }
    }
}

/// Result of the summary sequence.
#[derive(Debug, Clone)]
pub struct SummaryOutcome {
    pub summary: String,
    pub conversation_id: String,
}

#[must_use]
pub fn build_router(state: AppState, profile: ServiceProfile) -> Router {
    let mut router = Router::new();

    if profile.serves_summary() {
        router = router.route("/summary", post(summary_handler));
    }
    if profile.serves_recommend() {
        router = router.route("/recommend", post(recommend_handler));
    }
    if profile == ServiceProfile::Combined {
        router = router.route("/summary-recommend", post(summary_recommend_handler));
    }

    router.with_state(state)
}

// ============================================================================
// Orchestration
// ============================================================================

/// Fetch → summarize → send into the fetched conversation.
pub async fn run_summary(state: &AppState) -> Result<SummaryOutcome, BotError> {
    let fetched = state.platform.fetch_messages().await?;
    let messages = fetched.contents();

    let summary = state.summarizer.summarize(&messages).await;

    state
        .platform
        .send_message(&fetched.conversation_id, &summary)
        .await?;

    Ok(SummaryOutcome {
        summary,
        conversation_id: fetched.conversation_id,
    })
}

/// Extract → search → send.
///
/// Without a `conversation_id` the current one is fetched from the platform.
pub async fn run_recommend(
    state: &AppState,
    summary: &str,
    conversation_id: Option<&str>,
) -> Result<String, BotError> {
    let fields = require_fields(summary)?;

    let search_results = state.search.search(&fields).await;

    let conversation_id = match conversation_id {
        Some(id) => id.to_string(),
        None => state.platform.fetch_messages().await?.conversation_id,
    };

    state
        .platform
        .send_message(&conversation_id, &search_results)
        .await?;

    Ok(search_results)
}

// ============================================================================
// Handlers
// ============================================================================

#[tracing::instrument(level = "info", skip_all, fields(correlation_id = %uuid::Uuid::new_v4()))]
async fn summary_handler(State(state): State<AppState>) -> Response {
    match run_summary(&state).await {
        Ok(outcome) => {
            info!(conversation_id = %outcome.conversation_id, "Summary posted");
            ok_json(json!({ "status": "success", "summary": outcome.summary }))
        }
        Err(e) => {
            error!("Summary failed: {}", e);
            error_response(&e)
        }
    }
}

#[tracing::instrument(level = "info", skip_all, fields(correlation_id = %uuid::Uuid::new_v4()))]
async fn recommend_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let request = parse_recommend_request(&body);

    let Some(summary) = request.summary else {
        error!("Recommend request without summary");
        return error_response(&BotError::MissingSummary);
    };

    match run_recommend(&state, &summary, request.conversation_id.as_deref()).await {
        Ok(search_results) => {
            info!("Recommendations posted");
            ok_json(json!({ "search_results": search_results }))
        }
        Err(e) => {
            error!("Recommend failed: {}", e);
            error_response(&e)
        }
    }
}

#[tracing::instrument(level = "info", skip_all, fields(correlation_id = %uuid::Uuid::new_v4()))]
async fn summary_recommend_handler(State(state): State<AppState>) -> Response {
    let outcome = match run_summary(&state).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Summary step failed: {}", e);
            return error_response(&e);
        }
    };

    match run_recommend(&state, &outcome.summary, Some(&outcome.conversation_id)).await {
        Ok(search_results) => {
            info!(conversation_id = %outcome.conversation_id, "Summary and recommendations posted");
            ok_json(json!({
                "status": "success",
                "summary": outcome.summary,
                "search_results": search_results
            }))
        }
        Err(e) => {
            error!("Recommend step failed: {}", e);
            error_response(&e)
        }
    }
}
