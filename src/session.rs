//! Session
//!
//! Reads the stored token once and turns it into an authenticated client.

use crate::api::ApiClient;
use crate::config::AdminConfig;
use crate::error::ApiError;

/// Somewhere a session token can be read from
pub trait TokenSource {
    fn read_token(&self) -> Option<String>;
}

/// Browser `localStorage` slot
pub struct BrowserStorage<'a> {
    key: &'a str,
}

impl<'a> BrowserStorage<'a> {
    pub fn new(key: &'a str) -> Self {
        Self { key }
    }
}

impl TokenSource for BrowserStorage<'_> {
    fn read_token(&self) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        storage.get_item(self.key).ok().flatten()
    }
}

/// Resolve the session into a client, or `Unauthenticated` when no usable token exists
pub fn resolve(source: &impl TokenSource, config: &AdminConfig) -> Result<ApiClient, ApiError> {
    match source.read_token() {
        Some(token) if !token.trim().is_empty() => Ok(ApiClient::new(&config.api_base_url, &token)),
        _ => Err(ApiError::Unauthenticated),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedToken(Option<&'static str>);

    impl TokenSource for FixedToken {
        fn read_token(&self) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    #[test]
    fn test_missing_token_is_unauthenticated() {
        let config = AdminConfig::default();
        assert_eq!(resolve(&FixedToken(None), &config).unwrap_err(), ApiError::Unauthenticated);
    }

    #[test]
    fn test_blank_token_is_unauthenticated() {
        let config = AdminConfig::default();
        assert_eq!(resolve(&FixedToken(Some("")), &config).unwrap_err(), ApiError::Unauthenticated);
        assert_eq!(resolve(&FixedToken(Some("  ")), &config).unwrap_err(), ApiError::Unauthenticated);
    }

    #[test]
    fn test_token_yields_client() {
        let config = AdminConfig::default();
        let client = resolve(&FixedToken(Some("abc123")), &config).unwrap();
        assert_eq!(client.authorization(), "Bearer abc123");
        assert_eq!(client.url(&["features"]), "/api/features");
    }
}
