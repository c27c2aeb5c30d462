//! Versioned URL construction.

use url::Url;

/// Default service root.
pub const API_URL: &str = "https://api.api.ai/v1";
/// Protocol version sent as `v=` on every call.
pub const API_VERSION: &str = "20150910";

pub const QUERY_ENDPOINT: &str = "query";
pub const CONTEXTS_ENDPOINT: &str = "contexts";

/// Path segments plus extra query parameters for one call.
///
/// Segments and parameter values are percent-encoded when the URL is built,
/// so a context name containing `/`, `?` or spaces stays a single segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint<'a> {
    segments: Vec<&'a str>,
    params: Vec<(&'a str, &'a str)>,
}

impl<'a> Endpoint<'a> {
    pub fn new(segments: &[&'a str]) -> Self {
        Self {
            segments: segments.to_vec(),
            params: Vec::new(),
        }
    }

    /// Append a query parameter. Parameters keep insertion order, after `v`.
    pub fn param(mut self, key: &'a str, value: &'a str) -> Self {
        self.params.push((key, value));
        self
    }

    /// Relative path, for logs.
    pub fn path(&self) -> String {
        self.segments.join("/")
    }

    /// Full URL under `base`, with `v={version}` first.
    pub fn url(&self, base: &Url, version: &str) -> Url {
        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);

        // Only cannot-be-a-base URLs refuse segments; the builder rejects those.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            path.extend(self.segments.iter());
        }

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("v", version);
            for (key, value) in &self.params {
                query.append_pair(key, value);
            }
        }

        url
    }
}
