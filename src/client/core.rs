use crate::transport::HttpTransport;
use crate::{Error, ErrorContext, Result};
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};
use url::Url;

use super::builder::ClientBuilder;
use super::endpoint::Endpoint;

/// Client for the conversational API.
///
/// Immutable after construction and cheap to clone; clones share one
/// connection pool. Concurrent callers may use the same instance, each call
/// runs its own request/response exchange.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) transport: Arc<HttpTransport>,
    pub(crate) base_url: Url,
    pub(crate) version: String,
}

impl Client {
    /// Client with the default endpoint and API version.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new().api_key(api_key).build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL this client would call for `endpoint`.
    pub fn url(&self, endpoint: &Endpoint<'_>) -> Url {
        endpoint.url(&self.base_url, &self.version)
    }

    /// Run one call and return the body of a 2xx response.
    ///
    /// Non-2xx statuses become [`Error::Api`] carrying the body verbatim.
    pub(crate) async fn call(
        &self,
        method: Method,
        endpoint: &Endpoint<'_>,
        body: Option<Vec<u8>>,
    ) -> Result<String> {
        let url = self.url(endpoint);
        let path = endpoint.path();
        debug!(method = %method, endpoint = path.as_str(), "apiai request");

        let start = Instant::now();
        let raw = self.transport.execute(method, url, body).await?;

        if !raw.is_success() {
            info!(
                http_status = raw.status.as_u16(),
                endpoint = path.as_str(),
                duration_ms = start.elapsed().as_millis(),
                "apiai request failed"
            );
            return Err(Error::Api {
                status: raw.status.as_u16(),
                body: raw.body,
            });
        }

        debug!(
            http_status = raw.status.as_u16(),
            endpoint = path.as_str(),
            duration_ms = start.elapsed().as_millis(),
            "apiai request completed"
        );
        Ok(raw.body)
    }
}

/// Decode a response body, tagging failures with the operation name.
pub(crate) fn decode_body<T: DeserializeOwned>(body: &str, source: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| {
        Error::decode_with_context(
            e,
            ErrorContext::new()
                .with_field_path("body")
                .with_source(source),
        )
    })
}
