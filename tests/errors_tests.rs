use std::error::Error;
use placebot::errors::BotError;

#[test]
fn test_bot_error_implements_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    let error = BotError::Parse("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_bot_error_display() {
    let error = BotError::Fetch {
        status: 401,
        body: "{\"message\":\"unauthorized\"}".to_string(),
    };
    assert_eq!(
        format!("{error}"),
        "Failed to fetch messages: 401 {\"message\":\"unauthorized\"}"
    );

    let error = BotError::Send {
        status: 404,
        body: "not found".to_string(),
    };
    assert_eq!(format!("{error}"), "Failed to send message: 404 not found");

    assert_eq!(format!("{}", BotError::MissingSummary), "Summary is required");
    assert_eq!(
        format!("{}", BotError::MissingFields),
        "Failed to extract location or purpose from summary"
    );
}

#[test]
fn test_config_error_display_and_status() {
    let error = BotError::Config("OPENAI_API_KEY: environment variable not found".to_string());
    assert_eq!(
        format!("{error}"),
        "Configuration error: OPENAI_API_KEY: environment variable not found"
    );
    assert_eq!(error.status_code(), 500);
}

#[test]
fn test_bot_error_status_codes() {
    assert_eq!(BotError::MissingSummary.status_code(), 400);
    assert_eq!(BotError::MissingFields.status_code(), 400);
    assert_eq!(
        BotError::Fetch {
            status: 400,
            body: String::new()
        }
        .status_code(),
        500
    );
    assert_eq!(BotError::Http("timeout".into()).status_code(), 500);
}

#[test]
fn test_bot_error_from_conversions() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert!(matches!(BotError::from(json_err), BotError::Parse(_)));

    #[allow(unused)]
    #[allow(clippy::items_after_statements)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> BotError {
        BotError::from(err)
    }
}
