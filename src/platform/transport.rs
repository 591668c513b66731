//! Shared HTTP transport for the platform API.
//!
//! Keeps connectivity in one place so resource modules share request
//! construction, timeouts, and error classification. All requests carry the
//! bearer token and JSON headers; non-success responses are mapped to
//! [`ApiError`] here and nowhere else.

use crate::platform::error::ApiError;
use reqwest::{Client, Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct ApiTransport {
    client: Client,
    base_url: String,
    token: SecretString,
    user_agent: String,
}

impl ApiTransport {
    /// Build a transport for the given API base URL.
    ///
    /// # Errors
    /// Returns an error if the base URL is not an http(s) URL or the HTTP
    /// client cannot be constructed.
    pub fn new(user_agent: &str, base_url: &str, token: SecretString) -> Result<Self, ApiError> {
        let url =
            Url::parse(base_url).map_err(|e| ApiError::Config(format!("invalid API URL: {e}")))?;

        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(ApiError::Config(format!(
                    "invalid API URL: unsupported scheme {scheme}"
                )));
            }
        }

        let client = Client::builder()
            .user_agent(user_agent)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            user_agent: user_agent.to_string(),
        })
    }

    /// Build the full URL for an API path.
    ///
    /// # Errors
    /// Returns an error if the path does not start with `/`.
    pub fn endpoint_url(&self, path: &str) -> Result<String, ApiError> {
        if !path.starts_with('/') {
            return Err(ApiError::Config(format!("API path must start with /: {path}")));
        }

        Ok(format!("{}{path}", self.base_url))
    }

    /// Execute a JSON request against the platform API.
    ///
    /// # Errors
    /// Returns [`ApiError::NotFound`] on 404, [`ApiError::Unprocessable`] on
    /// 422, [`ApiError::Status`] on any other non-success response, and
    /// transport or decode errors unchanged.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        self.request_with_headers(method, path, body, &[]).await
    }

    /// Execute a JSON request with extra headers (e.g. a `Range` order).
    ///
    /// # Errors
    /// Same contract as [`ApiTransport::request`].
    pub async fn request_with_headers(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        headers: &[(&str, &str)],
    ) -> Result<Value, ApiError> {
        let url = self.endpoint_url(path)?;

        debug!("api request: {} {}", method, url);

        let mut request = self
            .client
            .request(method, &url)
            .header("Accept", "application/json")
            .bearer_auth(self.token.expose_secret());

        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        let bytes = response.bytes().await?;
        let body: Value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };

        if status.is_success() {
            return Ok(body);
        }

        Err(match status {
            StatusCode::NOT_FOUND => ApiError::NotFound,
            StatusCode::UNPROCESSABLE_ENTITY => ApiError::Unprocessable {
                message: error_message(&body).to_string(),
            },
            _ => ApiError::Status {
                url,
                status,
                message: error_message(&body).to_string(),
            },
        })
    }
}

impl std::fmt::Debug for ApiTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiTransport")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

fn error_message(body: &Value) -> &str {
    body.get("message").and_then(Value::as_str).unwrap_or("")
}
