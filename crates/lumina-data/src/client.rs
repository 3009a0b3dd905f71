//! Thin HTTP client with a base URL.

use crate::{FetchError, Response};
use std::time::Duration;

/// HTTP client for outbound catalog requests.
///
/// Relative paths are joined onto the base URL; absolute `http(s)://` URLs
/// are used as given.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: reqwest::Client,
    base_url: Option<String>,
}

impl FetchClient {
    /// Create a client with the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("lumina/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: None,
        })
    }

    /// Prepend `base_url` to every relative request path.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Resolve a path against the base URL.
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        match &self.base_url {
            Some(base) => format!(
                "{}/{}",
                base.trim_end_matches('/'),
                path.trim_start_matches('/')
            ),
            None => path.to_string(),
        }
    }

    /// Create a GET request.
    pub fn get(&self, path: &str) -> ClientRequestBuilder {
        ClientRequestBuilder {
            builder: self.http.get(self.url_for(path)),
        }
    }
}

/// A request bound to a client.
pub struct ClientRequestBuilder {
    builder: reqwest::RequestBuilder,
}

impl ClientRequestBuilder {
    /// Add a header to the request.
    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Send the request and buffer the response.
    pub async fn send(self) -> Result<Response, FetchError> {
        let response = self.builder.send().await?;
        Response::read(response).await
    }
}
