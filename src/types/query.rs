//! Outbound query payload.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Language sent when a query does not name one.
pub const DEFAULT_LANG: &str = "en";

/// A named event with string parameters, used instead of free text to
/// trigger an intent directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub data: BTreeMap<String, String>,
}

impl Event {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: BTreeMap::new(),
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }
}

/// What the query asks the agent to resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryInput {
    /// Free-text user utterance.
    #[serde(rename = "query")]
    Text(String),
    #[serde(rename = "event")]
    Event(Event),
}

/// A query request.
///
/// `session_id` partitions conversation state on the service and must stay
/// stable across the turns of one conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    #[serde(flatten)]
    pub input: QueryInput,
    #[serde(rename = "sessionId")]
    pub session_id: String,
    #[serde(default)]
    pub lang: String,
}

impl Query {
    pub fn text(text: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            input: QueryInput::Text(text.into()),
            session_id: session_id.into(),
            lang: String::new(),
        }
    }

    pub fn event(event: Event, session_id: impl Into<String>) -> Self {
        Self {
            input: QueryInput::Event(event),
            session_id: session_id.into(),
            lang: String::new(),
        }
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Language that will actually be sent.
    pub fn effective_lang(&self) -> &str {
        if self.lang.is_empty() {
            DEFAULT_LANG
        } else {
            &self.lang
        }
    }

    /// JSON body as sent to the query endpoint, with the language defaulted.
    pub fn to_request_body(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(&QueryBody {
            input: &self.input,
            session_id: &self.session_id,
            lang: self.effective_lang(),
        })
    }
}

#[derive(Serialize)]
struct QueryBody<'a> {
    #[serde(flatten)]
    input: &'a QueryInput,
    #[serde(rename = "sessionId")]
    session_id: &'a str,
    lang: &'a str,
}
