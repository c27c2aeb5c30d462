//! # Types Module
//!
//! Wire types exchanged with the service, with serde mappings for the
//! camelCase JSON it speaks.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Query`] | Outbound query: text or event, session id, language |
//! | [`Event`] | Named event with string parameters |
//! | [`Context`] | Named, lifespan-bounded parameter bag |
//! | [`Response`] | Resolved intent, fulfillment, and status |
//! | [`Message`] | Fulfillment message, one variant per kind |
//!
//! ## Example
//!
//! ```rust
//! use apiai_rust::types::{Event, Query};
//!
//! let by_text = Query::text("book a table for two", "session-7");
//! let by_event = Query::event(Event::new("WELCOME").with_param("name", "Sam"), "session-7")
//!     .with_lang("de");
//!
//! assert_eq!(by_text.effective_lang(), "en");
//! assert_eq!(by_event.effective_lang(), "de");
//! ```

pub mod context;
pub mod message;
pub mod query;
pub mod response;

pub(crate) use context::SetContextRequest;

pub use context::Context;
pub use message::{Button, Message, MessageKind};
pub use query::{Event, Query, QueryInput, DEFAULT_LANG};
pub use response::{Fulfillment, Metadata, QueryResult, Response, Status};

use serde::{Deserialize, Deserializer};

/// Read an explicit `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
