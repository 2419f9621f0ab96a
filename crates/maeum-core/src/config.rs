//! Client configuration model.

use serde::{Deserialize, Serialize};

/// Backend used when nothing else is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Environment variable that overrides the backend base URL.
pub const API_URL_ENV: &str = "MAEUM_API_URL";

/// Contents of `config.toml`. Every key is optional.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RootConfig {
    /// Base URL of the analysis backend
    #[serde(default)]
    pub backend_url: Option<String>,
    /// Give up on the analysis request after this many seconds
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    /// Log filter used when `RUST_LOG` is not set (e.g. "debug")
    #[serde(default)]
    pub log_level: Option<String>,
}

/// Picks the backend base URL.
///
/// Priority:
/// 1. explicit override (command line)
/// 2. environment variable
/// 3. config file
/// 4. [`DEFAULT_BACKEND_URL`]
///
/// Blank values are skipped and a trailing `/` is removed.
pub fn resolve_backend_url(
    explicit: Option<&str>,
    env_value: Option<&str>,
    config: &RootConfig,
) -> String {
    [explicit, env_value, config.backend_url.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or(DEFAULT_BACKEND_URL)
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(url: &str) -> RootConfig {
        RootConfig {
            backend_url: Some(url.to_string()),
            ..RootConfig::default()
        }
    }

    #[test]
    fn test_default_when_nothing_set() {
        assert_eq!(
            resolve_backend_url(None, None, &RootConfig::default()),
            "http://localhost:8000"
        );
    }

    #[test]
    fn test_priority_order() {
        let config = config_with("http://file:1");
        assert_eq!(resolve_backend_url(None, None, &config), "http://file:1");
        assert_eq!(
            resolve_backend_url(None, Some("http://env:2"), &config),
            "http://env:2"
        );
        assert_eq!(
            resolve_backend_url(Some("http://cli:3"), Some("http://env:2"), &config),
            "http://cli:3"
        );
    }

    #[test]
    fn test_blank_values_skipped_and_slash_trimmed() {
        let config = config_with("https://api.example.com/");
        assert_eq!(
            resolve_backend_url(Some("  "), Some(""), &config),
            "https://api.example.com"
        );
    }

    #[test]
    fn test_parse_toml() {
        let config: RootConfig = toml::from_str(
            r#"
backend_url = "https://maeum.example.com"
request_timeout_secs = 90
"#,
        )
        .unwrap();
        assert_eq!(
            config.backend_url.as_deref(),
            Some("https://maeum.example.com")
        );
        assert_eq!(config.request_timeout_secs, Some(90));
        assert_eq!(config.log_level, None);
    }
}
