use std::env;
use std::str::FromStr;

use crate::errors::BotError;

pub const DEFAULT_GROUP_ID: &str = "184251";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_CHANNELTALK_BASE_URL: &str = "https://api.channel.io";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_NAVER_BASE_URL: &str = "https://openapi.naver.com";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Which subset of endpoints a running instance exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceProfile {
    /// `/summary` only.
    Summary,
    /// `/recommend` only.
    Recommend,
    /// `/summary`, `/recommend` and `/summary-recommend`.
    Combined,
}

impl ServiceProfile {
    #[must_use]
    pub fn default_port(self) -> u16 {
        match self {
            ServiceProfile::Combined => 5000,
            ServiceProfile::Summary => 5001,
            ServiceProfile::Recommend => 5002,
        }
    }

    #[must_use]
    pub fn serves_summary(self) -> bool {
        matches!(self, ServiceProfile::Summary | ServiceProfile::Combined)
    }

    #[must_use]
    pub fn serves_recommend(self) -> bool {
        matches!(self, ServiceProfile::Recommend | ServiceProfile::Combined)
    }
}

impl FromStr for ServiceProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "summary" => Ok(ServiceProfile::Summary),
            "recommend" => Ok(ServiceProfile::Recommend),
            "combined" | "" => Ok(ServiceProfile::Combined),
            other => Err(format!("unknown service profile '{other}'")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub channeltalk_api_key: String,
    pub channeltalk_base_url: String,
    pub group_id: String,
    pub openai_api_key: String,
    pub openai_org_id: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub naver_client_id: String,
    pub naver_client_secret: String,
    pub naver_base_url: String,
    pub profile: ServiceProfile,
    pub port: u16,
    pub http_timeout_secs: u64,
}

impl AppConfig {
    /// Builds the configuration from the process environment, loading `.env` first if present.
    pub fn from_env() -> Result<Self, BotError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Fails with [`BotError::Config`] naming the first missing or malformed variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| missing(key))
        };
        let with_fallback = |key: &str, legacy: &str| {
            lookup(key)
                .or_else(|| lookup(legacy))
                .filter(|v| !v.is_empty())
                .ok_or_else(|| missing(key))
        };
        let or_default = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let profile: ServiceProfile = lookup("SERVICE_PROFILE")
            .unwrap_or_default()
            .parse()
            .map_err(|e| BotError::Config(format!("SERVICE_PROFILE: {e}")))?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| BotError::Config(format!("PORT: {e}")))?,
            None => profile.default_port(),
        };

        let http_timeout_secs = match lookup("HTTP_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|e| BotError::Config(format!("HTTP_TIMEOUT_SECS: {e}")))?,
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        Ok(Self {
            channeltalk_api_key: required("CHANNELTALK_API_KEY")?,
            channeltalk_base_url: trim_base(or_default(
                "CHANNELTALK_BASE_URL",
                DEFAULT_CHANNELTALK_BASE_URL,
            )),
            group_id: or_default("CHANNELTALK_GROUP_ID", DEFAULT_GROUP_ID),
            openai_api_key: required("OPENAI_API_KEY")?,
            openai_org_id: lookup("OPENAI_ORG_ID").filter(|v| !v.is_empty()),
            openai_model: or_default("OPENAI_MODEL", DEFAULT_OPENAI_MODEL),
            openai_base_url: trim_base(or_default(
                "OPENAI_BASE_URL",
                DEFAULT_OPENAI_BASE_URL,
            )),
            naver_client_id: with_fallback("NAVER_CLIENT_ID", "X-Naver-Client-Id")?,
            naver_client_secret: with_fallback(
                "NAVER_CLIENT_SECRET",
                "X-Naver-Client-Secret",
            )?,
            naver_base_url: trim_base(or_default(
                "NAVER_BASE_URL",
                DEFAULT_NAVER_BASE_URL,
            )),
            profile,
            port,
            http_timeout_secs,
        })
    }
}

fn missing(key: &str) -> BotError {
    BotError::Config(format!("{key}: environment variable not found"))
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const REQUIRED: [(&str, &str); 4] = [
        ("CHANNELTALK_API_KEY", "ct-key"),
        ("OPENAI_API_KEY", "sk-test"),
        ("NAVER_CLIENT_ID", "naver-id"),
        ("NAVER_CLIENT_SECRET", "naver-secret"),
    ];

    #[test]
    fn defaults_apply_when_only_credentials_are_set() {
        let config = AppConfig::from_lookup(lookup_from(&REQUIRED)).unwrap();
        assert_eq!(config.group_id, DEFAULT_GROUP_ID);
        assert_eq!(config.openai_model, DEFAULT_OPENAI_MODEL);
        assert_eq!(config.profile, ServiceProfile::Combined);
        assert_eq!(config.port, 5000);
        assert_eq!(config.http_timeout_secs, DEFAULT_HTTP_TIMEOUT_SECS);
        assert_eq!(config.channeltalk_base_url, DEFAULT_CHANNELTALK_BASE_URL);
    }

    #[test]
    fn missing_credential_is_named() {
        match AppConfig::from_lookup(lookup_from(&REQUIRED[..3])) {
            Err(BotError::Config(msg)) => {
                assert!(msg.starts_with("NAVER_CLIENT_SECRET"), "{msg}");
            }
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn hyphenated_naver_names_are_accepted() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("CHANNELTALK_API_KEY", "ct-key"),
            ("OPENAI_API_KEY", "sk-test"),
            ("X-Naver-Client-Id", "legacy-id"),
            ("X-Naver-Client-Secret", "legacy-secret"),
        ]))
        .unwrap();
        assert_eq!(config.naver_client_id, "legacy-id");
        assert_eq!(config.naver_client_secret, "legacy-secret");
    }

    #[test]
    fn profile_selects_default_port() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("SERVICE_PROFILE", "recommend"));
        let config = AppConfig::from_lookup(lookup_from(&pairs)).unwrap();
        assert_eq!(config.profile, ServiceProfile::Recommend);
        assert_eq!(config.port, 5002);

        pairs.push(("PORT", "8080"));
        let config = AppConfig::from_lookup(lookup_from(&pairs)).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn malformed_port_is_config_error() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("PORT", "http"));
        match AppConfig::from_lookup(lookup_from(&pairs)) {
            Err(err @ BotError::Config(_)) => {
                assert!(err.to_string().starts_with("Configuration error: PORT:"), "{err}");
            }
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_profile_is_rejected() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("SERVICE_PROFILE", "everything"));
        assert!(matches!(
            AppConfig::from_lookup(lookup_from(&pairs)),
            Err(BotError::Config(_))
        ));
    }

    #[test]
    fn base_urls_lose_trailing_slash() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("NAVER_BASE_URL", "http://localhost:9000/"));
        let config = AppConfig::from_lookup(lookup_from(&pairs)).unwrap();
        assert_eq!(config.naver_base_url, "http://localhost:9000");
    }
}
