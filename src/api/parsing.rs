//! Inbound request body parsing.

use serde_json::Value;

/// Body of `POST /recommend`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecommendRequest {
    pub summary: Option<String>,
    pub conversation_id: Option<String>,
}

/// Leniently reads a recommend body.
///
/// Anything that is not a JSON object, and any field that is not a non-empty
/// string, reads as absent.
#[must_use]
pub fn parse_recommend_request(body: &[u8]) -> RecommendRequest {
    let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(body) else {
        return RecommendRequest::default();
    };

    let non_empty = |key: &str| {
        map.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
    };

    RecommendRequest {
        summary: non_empty("summary"),
        conversation_id: non_empty("conversationId"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_summary_and_conversation_id() {
        let body = r#"{"summary":"1. 장소: 강남","conversationId":"c-1"}"#;
        let req = parse_recommend_request(body.as_bytes());
        assert_eq!(req.summary.as_deref(), Some("1. 장소: 강남"));
        assert_eq!(req.conversation_id.as_deref(), Some("c-1"));
    }

    #[test]
    fn garbage_reads_as_empty() {
        assert_eq!(parse_recommend_request(b"not json"), RecommendRequest::default());
        assert_eq!(parse_recommend_request(b""), RecommendRequest::default());
        assert_eq!(parse_recommend_request(b"[1,2]"), RecommendRequest::default());
    }

    #[test]
    fn non_string_or_empty_summary_is_absent() {
        assert!(parse_recommend_request(br#"{"summary":42}"#).summary.is_none());
        assert!(parse_recommend_request(br#"{"summary":""}"#).summary.is_none());
    }
}
