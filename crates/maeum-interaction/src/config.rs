//! Backend endpoint configuration.
//!
//! Configuration priority: command line > `MAEUM_API_URL` > config.toml > default.

use std::env;
use std::time::Duration;

use maeum_core::config::{API_URL_ENV, RootConfig, resolve_backend_url};

/// Where and how to reach the analysis backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base URL without trailing slash, e.g. `http://localhost:8000`
    pub base_url: String,
    /// Per-request timeout; `None` waits for as long as the request takes
    pub request_timeout: Option<Duration>,
}

impl BackendConfig {
    /// Resolves the configuration, reading the environment.
    pub fn resolve(explicit_url: Option<&str>, root: &RootConfig) -> Self {
        let env_url = env::var(API_URL_ENV).ok();
        Self::resolve_with(explicit_url, env_url.as_deref(), root)
    }

    /// Resolves the configuration from explicit values only.
    pub fn resolve_with(
        explicit_url: Option<&str>,
        env_url: Option<&str>,
        root: &RootConfig,
    ) -> Self {
        Self {
            base_url: resolve_backend_url(explicit_url, env_url, root),
            request_timeout: root.request_timeout_secs.map(Duration::from_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_with_timeout_from_file() {
        let root = RootConfig {
            backend_url: Some("http://file:1/".into()),
            request_timeout_secs: Some(30),
            log_level: None,
        };

        let config = BackendConfig::resolve_with(None, None, &root);
        assert_eq!(config.base_url, "http://file:1");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_env_beats_file_but_not_flag() {
        let root = RootConfig {
            backend_url: Some("http://file:1".into()),
            ..RootConfig::default()
        };

        let from_env = BackendConfig::resolve_with(None, Some("http://env:2"), &root);
        assert_eq!(from_env.base_url, "http://env:2");
        assert_eq!(from_env.request_timeout, None);

        let from_flag =
            BackendConfig::resolve_with(Some("http://cli:3"), Some("http://env:2"), &root);
        assert_eq!(from_flag.base_url, "http://cli:3");
    }
}
