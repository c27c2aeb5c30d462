//! Conversation contexts.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::{Error, ErrorContext, Result};

/// A named parameter bag kept by the service for a session.
///
/// `lifespan` is the number of turns left before the service expires the
/// context; it is absent when the service did not report one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Context {
    pub name: String,
    #[serde(default)]
    pub parameters: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifespan: Option<u32>,
}

impl Context {
    pub fn new(name: impl Into<String>, parameters: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            parameters,
            lifespan: None,
        }
    }

    pub fn with_lifespan(mut self, lifespan: u32) -> Self {
        self.lifespan = Some(lifespan);
        self
    }

    /// Decode the parameters into a caller-defined type.
    pub fn load_to<T: DeserializeOwned>(&self) -> Result<T> {
        T::deserialize(&self.parameters).map_err(|e| {
            Error::decode_with_context(
                e,
                ErrorContext::new()
                    .with_field_path("parameters")
                    .with_details(format!("context '{}'", self.name)),
            )
        })
    }
}

/// Body of a set-context call.
#[derive(Debug, Serialize)]
pub(crate) struct SetContextRequest<'a, P: Serialize + ?Sized> {
    pub name: &'a str,
    pub parameters: &'a P,
}
