//! Gateway configuration.
//!
//! Resolved once at startup from the process environment and passed around as
//! an immutable value; nothing reads the environment after boot. The backend
//! base URL is normalized to end with a slash so endpoint segments can be
//! appended without clobbering the service's path prefix.

use thiserror::Error;
use url::Url;

/// Environment variable naming the backend service base URL.
pub const BACKEND_URL_ENV: &str = "REWARDS_BACKEND_URL";
/// Environment variable naming the backend basic-auth username.
pub const BACKEND_USERNAME_ENV: &str = "REWARDS_BACKEND_USERNAME";
/// Environment variable naming the backend basic-auth password.
pub const BACKEND_PASSWORD_ENV: &str = "REWARDS_BACKEND_PASSWORD";

const DEFAULT_BACKEND_URL: &str =
    "http://localhost:8080/enterprise-customer-rewards-system/service";
const DEFAULT_USERNAME: &str = "admin";
const DEFAULT_PASSWORD: &str = "admin123";

/// Connection settings for the legacy rewards backend.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the backend service, normalized to end with `/`
    pub backend_base_url: Url,
    pub backend_username: String,
    pub backend_password: String,
}

impl GatewayConfig {
    /// Resolve configuration from the environment, treating unset and empty
    /// variables alike and falling back to the local-development backend.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(
            env_nonempty(BACKEND_URL_ENV),
            env_nonempty(BACKEND_USERNAME_ENV),
            env_nonempty(BACKEND_PASSWORD_ENV),
        )
    }

    /// Build a config from optional raw values, applying defaults and URL
    /// normalization. Split out of [`Self::from_env`] so it can be exercised
    /// without touching the process environment.
    pub fn resolve(
        url: Option<String>,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<Self, ConfigError> {
        let raw_url = url.unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        let mut backend_base_url = Url::parse(&raw_url)
            .map_err(|e| ConfigError::InvalidBackendUrl(raw_url.clone(), e))?;
        if backend_base_url.cannot_be_a_base() {
            return Err(ConfigError::NotABaseUrl(raw_url));
        }
        if !backend_base_url.path().ends_with('/') {
            let path = format!("{}/", backend_base_url.path());
            backend_base_url.set_path(&path);
        }
        Ok(Self {
            backend_base_url,
            backend_username: username.unwrap_or_else(|| DEFAULT_USERNAME.to_string()),
            backend_password: password.unwrap_or_else(|| DEFAULT_PASSWORD.to_string()),
        })
    }
}

fn env_nonempty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Startup configuration failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid backend URL `{0}`: {1}")]
    InvalidBackendUrl(String, #[source] url::ParseError),

    #[error("backend URL `{0}` cannot have endpoint paths appended to it")]
    NotABaseUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_applies_local_dev_fallbacks() {
        let config = GatewayConfig::resolve(None, None, None).unwrap();
        assert_eq!(
            config.backend_base_url.as_str(),
            "http://localhost:8080/enterprise-customer-rewards-system/service/"
        );
        assert_eq!(config.backend_username, "admin");
        assert_eq!(config.backend_password, "admin123");
    }

    #[test]
    fn test_resolve_normalizes_trailing_slash() {
        let config = GatewayConfig::resolve(
            Some("https://rewards.internal/svc".to_string()),
            Some("gateway".to_string()),
            Some("s3cret".to_string()),
        )
        .unwrap();
        assert_eq!(
            config.backend_base_url.as_str(),
            "https://rewards.internal/svc/"
        );

        // already-terminated URLs pass through untouched
        let config = GatewayConfig::resolve(
            Some("https://rewards.internal/svc/".to_string()),
            None,
            None,
        )
        .unwrap();
        assert_eq!(
            config.backend_base_url.as_str(),
            "https://rewards.internal/svc/"
        );
    }

    #[test]
    fn test_resolve_rejects_malformed_url() {
        let err = GatewayConfig::resolve(Some("not a url".to_string()), None, None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBackendUrl(_, _)));
    }

    #[test]
    fn test_resolve_rejects_non_base_url() {
        let err =
            GatewayConfig::resolve(Some("mailto:ops@example.com".to_string()), None, None)
                .unwrap_err();
        assert!(matches!(err, ConfigError::NotABaseUrl(_)));
    }
}
