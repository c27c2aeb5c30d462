//! Query execution.

use reqwest::Method;
use tracing::debug;

use super::core::{decode_body, Client};
use super::endpoint::{Endpoint, QUERY_ENDPOINT};
use crate::types::{Query, Response};
use crate::Result;

impl Client {
    /// Send a query and return the resolved intent.
    ///
    /// An empty `lang` is sent as `"en"`.
    pub async fn query(&self, query: &Query) -> Result<Response> {
        let body = query.to_request_body()?;
        debug!(
            session_id = query.session_id.as_str(),
            lang = query.effective_lang(),
            "sending query"
        );

        let endpoint = Endpoint::new(&[QUERY_ENDPOINT]);
        let text = self.call(Method::POST, &endpoint, Some(body)).await?;
        decode_body(&text, "query")
    }
}
