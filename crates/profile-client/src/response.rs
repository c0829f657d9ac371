//! HTTP response handling with API error promotion.

use serde::de::DeserializeOwned;

use crate::error::{Error, ErrorKind, Result};
use crate::redact::sanitize_error_message;

/// Wrapper around an HTTP response with additional functionality.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
}

impl Response {
    /// Create a new Response from a reqwest::Response.
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        let status = self.status();
        (200..300).contains(&status)
    }

    /// Get a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.headers().get(name)?.to_str().ok()
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Get the response body as text.
    pub async fn text(self) -> Result<String> {
        self.inner.text().await.map_err(Into::into)
    }

    /// Deserialize the response body as JSON.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        self.inner.json().await.map_err(Into::into)
    }

    /// Check for an API error response and convert it to the typed error.
    ///
    /// Non-2xx responses are consumed and their body parsed into the
    /// platform error shape; the returned error carries the HTTP status
    /// and the (sanitized) server message.
    pub async fn check_api_error(self) -> Result<Response> {
        let status = self.status();

        if self.is_success() {
            return Ok(self);
        }

        let body = self.text().await.unwrap_or_default();
        Err(parse_error_response(status, &body))
    }
}

/// Parse an error response body and convert it to the appropriate error kind.
fn parse_error_response(status: u16, body: &str) -> Error {
    // Try to parse the platform error JSON first
    if let Ok(err) = serde_json::from_str::<ApiErrorResponse>(body) {
        let message = sanitize_error_message(&err.message.into_first());
        let status = err.status_code.unwrap_or(status);
        let kind = match status {
            401 => ErrorKind::Authentication(message),
            _ => ErrorKind::Api { status, message },
        };
        return Error::new(kind);
    }

    // Fall back to the raw body, sanitized so credentials never leak
    let sanitized = sanitize_error_message(body);
    let kind = match status {
        401 => ErrorKind::Authentication(sanitized),
        _ => ErrorKind::Api {
            status,
            message: sanitized,
        },
    };

    Error::new(kind)
}

/// Platform API error response format.
#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(rename = "statusCode")]
    status_code: Option<u16>,
    message: ApiErrorMessage,
    #[allow(dead_code)]
    error: Option<String>,
}

/// The message field may be a single string or an array of strings.
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
enum ApiErrorMessage {
    Single(String),
    Many(Vec<String>),
}

impl ApiErrorMessage {
    /// The first message, for display.
    fn into_first(self) -> String {
        match self {
            ApiErrorMessage::Single(message) => message,
            ApiErrorMessage::Many(messages) => messages.into_iter().next().unwrap_or_default(),
        }
    }
}
