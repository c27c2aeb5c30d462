//! Context get/set calls.

use reqwest::{Method, StatusCode};
use serde::Serialize;
use tracing::debug;

use super::core::{decode_body, Client};
use super::endpoint::{Endpoint, CONTEXTS_ENDPOINT};
use crate::types::{Context, SetContextRequest};
use crate::{Error, Result};

impl Client {
    /// Fetch one context of a session.
    ///
    /// A 404 from the service is reported as [`Error::NotFound`]; every other
    /// non-2xx status stays an [`Error::Api`].
    pub async fn context(&self, session_id: &str, name: &str) -> Result<Context> {
        debug!(session_id, context = name, "fetching context");

        let endpoint = Endpoint::new(&[CONTEXTS_ENDPOINT, name]).param("sessionId", session_id);
        let text = match self.call(Method::GET, &endpoint, None).await {
            Err(Error::Api { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                return Err(Error::NotFound {
                    name: name.to_string(),
                })
            }
            other => other?,
        };
        decode_body(&text, "context")
    }

    /// Create or replace a context for a session.
    ///
    /// Only the status is checked; whatever body the service returns is
    /// read and discarded.
    pub async fn set_context<P>(&self, session_id: &str, name: &str, parameters: &P) -> Result<()>
    where
        P: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(&SetContextRequest { name, parameters })?;
        debug!(session_id, context = name, "setting context");

        let endpoint = Endpoint::new(&[CONTEXTS_ENDPOINT]).param("sessionId", session_id);
        self.call(Method::POST, &endpoint, Some(body)).await?;
        Ok(())
    }
}
