//! REST API Client
//!
//! Authenticated bindings to the admin backend, organized by domain.
//! Every call sends the session token as a bearer credential.

mod feature;
mod slug;

use std::sync::Arc;

use gloo_net::http::{Request, RequestBuilder};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Characters left unescaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// `{ "data": ... }` wrapper used by every read endpoint
#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// Body returned by every mutation endpoint
#[derive(Debug, Default, Deserialize)]
pub(crate) struct StatusBody {
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: Option<String>,
}

impl StatusBody {
    fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Turn a mutation response into a result.
///
/// The body's `status` field decides; the HTTP status only matters when
/// there is no readable body.
pub(crate) fn settle_mutation(http_status: u16, body: Option<StatusBody>) -> Result<(), ApiError> {
    match body {
        Some(body) if body.is_success() => Ok(()),
        Some(body) => Err(ApiError::Rejected { message: body.message }),
        None => Err(ApiError::Status(http_status)),
    }
}

/// Authenticated REST client, built once per session
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: Arc<str>,
    token: Arc<str>,
}

impl ApiClient {
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            base_url: Arc::from(base_url.trim_end_matches('/')),
            token: Arc::from(token),
        }
    }

    /// Join path segments onto the base URL, escaping each one
    pub fn url(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.to_string();
        for segment in segments {
            url.push('/');
            url.extend(utf8_percent_encode(segment, PATH_SEGMENT));
        }
        url
    }

    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.token)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header("Authorization", &self.authorization())
    }

    /// GET a `{data: ...}` envelope; only HTTP 200 counts as success
    async fn get_data<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        log::debug!("GET {}", url);
        let response = self
            .authorized(Request::get(url))
            .send()
            .await
            .map_err(ApiError::transport)?;

        if response.status() != 200 {
            log::warn!("GET {} returned {}", url, response.status());
            return Err(ApiError::Status(response.status()));
        }

        let envelope: DataEnvelope<T> = response.json().await.map_err(ApiError::decode)?;
        Ok(envelope.data)
    }

    async fn post_json<B: Serialize>(&self, url: &str, body: &B) -> Result<(), ApiError> {
        log::debug!("POST {}", url);
        let request = self.authorized(Request::post(url)).json(body);
        self.mutate(request).await
    }

    async fn put_json<B: Serialize>(&self, url: &str, body: &B) -> Result<(), ApiError> {
        log::debug!("PUT {}", url);
        let request = self.authorized(Request::put(url)).json(body);
        self.mutate(request).await
    }

    async fn delete(&self, url: &str) -> Result<(), ApiError> {
        log::debug!("DELETE {}", url);
        let request = self.authorized(Request::delete(url)).build();
        self.mutate(request).await
    }

    async fn mutate(&self, request: Result<Request, gloo_net::Error>) -> Result<(), ApiError> {
        let response = request
            .map_err(ApiError::transport)?
            .send()
            .await
            .map_err(ApiError::transport)?;

        let http_status = response.status();
        let text = response.text().await.map_err(ApiError::transport)?;
        let body = serde_json::from_str::<StatusBody>(&text).ok();
        if body.is_none() && !text.is_empty() {
            log::warn!("unreadable mutation body (HTTP {}): {}", http_status, text);
        }

        settle_mutation(http_status, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(json: &str) -> Option<StatusBody> {
        serde_json::from_str(json).ok()
    }

    #[test]
    fn test_settle_success() {
        assert_eq!(settle_mutation(200, body(r#"{"status":"success"}"#)), Ok(()));
    }

    #[test]
    fn test_settle_body_status_wins_over_http() {
        assert_eq!(
            settle_mutation(200, body(r#"{"status":"fail"}"#)),
            Err(ApiError::Rejected { message: None })
        );
        assert_eq!(
            settle_mutation(400, body(r#"{"status":"error","message":"slug already exists"}"#)),
            Err(ApiError::Rejected { message: Some("slug already exists".into()) })
        );
    }

    #[test]
    fn test_settle_without_body() {
        assert_eq!(settle_mutation(502, None), Err(ApiError::Status(502)));
    }

    #[test]
    fn test_url_escapes_segments() {
        let client = ApiClient::new("https://admin.example.com/api/", "t");
        assert_eq!(
            client.url(&["features", "f 1/x"]),
            "https://admin.example.com/api/features/f%201%2Fx"
        );
        assert_eq!(client.url(&["slugs", "a-b_c.d~e"]), "https://admin.example.com/api/slugs/a-b_c.d~e");
    }

    #[test]
    fn test_data_envelope() {
        let envelope: DataEnvelope<serde_json::Value> =
            serde_json::from_str(r#"{"data":{"feature":[]}}"#).unwrap();
        assert_eq!(envelope.data, serde_json::json!({"feature": []}));
    }
}
