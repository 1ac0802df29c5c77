//! Application Configuration
//!
//! Build-time settings for the admin panel, provided once via context.

use leptos::prelude::*;

/// Default REST base when `ADMIN_API_BASE_URL` is not set at build time
pub const DEFAULT_API_BASE_URL: &str = "/api";
/// Default login entry point when `ADMIN_LOGIN_PATH` is not set at build time
pub const DEFAULT_LOGIN_PATH: &str = "/login";
/// localStorage slot written by the login flow
pub const TOKEN_KEY: &str = "token";

/// Delay before a fetched collection is shown, in milliseconds
const DISPLAY_DELAY_MS: u32 = 1000;
/// How long a toast stays on screen, in milliseconds
const TOAST_TTL_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    /// REST base URL without trailing slash
    pub api_base_url: String,
    pub login_path: String,
    pub token_key: String,
    pub display_delay_ms: u32,
    pub toast_ttl_ms: u32,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

impl AdminConfig {
    /// Read overrides baked in by the build environment
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("ADMIN_API_BASE_URL"), option_env!("ADMIN_LOGIN_PATH"))
    }

    fn from_values(api_base_url: Option<&str>, login_path: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();
        let login_path = login_path
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .unwrap_or(DEFAULT_LOGIN_PATH)
            .to_string();

        Self {
            api_base_url,
            login_path,
            token_key: TOKEN_KEY.to_string(),
            display_delay_ms: DISPLAY_DELAY_MS,
            toast_ttl_ms: TOAST_TTL_MS,
        }
    }
}

/// Get the config from context
pub fn use_config() -> AdminConfig {
    expect_context::<AdminConfig>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AdminConfig::default();
        assert_eq!(config.api_base_url, "/api");
        assert_eq!(config.login_path, "/login");
        assert_eq!(config.token_key, "token");
        assert_eq!(config.display_delay_ms, 1000);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = AdminConfig::from_values(Some("https://admin.example.com/v1/"), None);
        assert_eq!(config.api_base_url, "https://admin.example.com/v1");
    }

    #[test]
    fn test_blank_overrides_fall_back() {
        let config = AdminConfig::from_values(Some("  "), Some(""));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.login_path, DEFAULT_LOGIN_PATH);
    }
}
