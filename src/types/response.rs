//! Query response.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

use super::context::Context;
use super::message::Message;
use super::null_as_default;
use crate::{Error, Result};

/// Suffix the service appends to contexts it keeps for slot-filling dialogs.
const DIALOG_CONTEXT_SUFFIX: &str = "_dialog_context";

/// Result of a query call.
///
/// Every field is optional on the wire; anything missing decodes to its
/// default, and `null` lists or blocks decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Response {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    pub session_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub result: QueryResult,
    #[serde(deserialize_with = "null_as_default")]
    pub status: Status,
}

/// The resolved intent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryResult {
    pub source: String,
    pub resolved_query: String,
    pub action: String,
    pub action_incomplete: bool,
    pub parameters: serde_json::Value,
    #[serde(deserialize_with = "null_as_default")]
    pub contexts: Vec<Context>,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: Metadata,
    #[serde(deserialize_with = "null_as_default")]
    pub fulfillment: Fulfillment,
    pub score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Metadata {
    pub intent_id: String,
    /// The service reports this as the string "true" or "false".
    pub webhook_used: String,
    pub intent_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fulfillment {
    pub speech: String,
    #[serde(deserialize_with = "null_as_default")]
    pub messages: Vec<Message>,
}

/// Service-side status block. `code` mirrors an HTTP status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Status {
    pub code: u16,
    pub error_type: String,
    pub error_details: String,
}

impl Response {
    /// First active context with exactly this name, in server order.
    pub fn context(&self, name: &str) -> Result<&Context> {
        self.result
            .contexts
            .iter()
            .find(|ctx| ctx.name == name)
            .ok_or_else(|| Error::NotFound {
                name: name.to_string(),
            })
    }

    /// Context the service keeps while it is filling the slots of `name`.
    pub fn dialog_context(&self, name: &str) -> Result<&Context> {
        self.context(&format!("{}{}", name, DIALOG_CONTEXT_SUFFIX))
    }

    /// Write the response as indented JSON.
    pub fn to_json<W: Write>(&self, mut writer: W) -> Result<()> {
        let mut buf = serde_json::to_vec_pretty(self)?;
        buf.push(b'\n');
        writer.write_all(&buf)?;
        writer.flush()?;
        Ok(())
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string_pretty(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
