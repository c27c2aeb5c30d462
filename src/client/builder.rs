use crate::client::core::Client;
use crate::client::endpoint::{API_URL, API_VERSION};
use crate::transport::HttpTransport;
use crate::{Error, ErrorContext, Result};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Environment variable read by [`ClientBuilder::from_env`].
pub const API_KEY_ENV: &str = "APIAI_CLIENT_ACCESS_TOKEN";

/// Builder for creating clients with custom configuration.
///
/// Everything except the key has a default. No timeout is applied unless one
/// is set here or on an injected `reqwest::Client`.
#[derive(Default)]
pub struct ClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    version: Option<String>,
    timeout: Option<Duration>,
    proxy: Option<String>,
    http_client: Option<reqwest::Client>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the key in [`API_KEY_ENV`]. `build` fails if it is unset.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(API_KEY_ENV).ok(),
            ..Self::default()
        }
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the service root (mock servers, regional endpoints).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Override the `v=` protocol version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Whole-request deadline applied by the transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn proxy(mut self, url: impl Into<String>) -> Self {
        self.proxy = Some(url.into());
        self
    }

    /// Use a preconfigured HTTP client. `timeout` and `proxy` are then ignored.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<Client> {
        let api_key = self
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                Error::configuration_with_context(
                    format!(
                        "API key required (set it on the builder or use from_env with {})",
                        API_KEY_ENV
                    ),
                    ErrorContext::new().with_field_path("api_key"),
                )
            })?;

        let raw_base = self.base_url.unwrap_or_else(|| API_URL.to_string());
        let base_url = Url::parse(&raw_base).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid base URL: {}", e),
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(raw_base.clone()),
            )
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::configuration_with_context(
                "Base URL cannot carry path segments",
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(raw_base),
            ));
        }

        let version = self.version.unwrap_or_else(|| API_VERSION.to_string());
        if version.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "API version must not be empty",
                ErrorContext::new().with_field_path("version"),
            ));
        }

        let http_client = match self.http_client {
            Some(client) => {
                if self.timeout.is_some() || self.proxy.is_some() {
                    tracing::warn!("timeout/proxy ignored because an HTTP client was supplied");
                }
                client
            }
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(proxy_url) = &self.proxy {
                    let proxy = reqwest::Proxy::all(proxy_url).map_err(|e| {
                        Error::configuration_with_context(
                            format!("Invalid proxy: {}", e),
                            ErrorContext::new()
                                .with_field_path("proxy")
                                .with_details(proxy_url.clone()),
                        )
                    })?;
                    builder = builder.proxy(proxy);
                }
                builder.build().map_err(|e| {
                    Error::configuration(format!("Failed to create HTTP client: {}", e))
                })?
            }
        };

        Ok(Client {
            transport: Arc::new(HttpTransport::new(http_client, api_key)),
            base_url,
            version,
        })
    }
}
