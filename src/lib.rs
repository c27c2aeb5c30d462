//! # apiai-rust
//!
//! Async client for the API.AI v1 conversational HTTP API.
//!
//! ## Overview
//!
//! The service resolves user utterances (or named events) into intents,
//! keeps per-session conversational state as named *contexts*, and returns
//! fulfillment content. This crate covers three calls:
//!
//! - **Query**: send text or an event for a session, get back a [`Response`]
//! - **Get context**: read one context of a session
//! - **Set context**: write a context's parameters for a session
//!
//! Every request carries `Authorization: Bearer <key>`, a JSON content type,
//! and the API version as the `v` query parameter. The client keeps no state
//! between calls and never retries; failures surface immediately as
//! [`Error`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use apiai_rust::{Client, Query};
//!
//! #[tokio::main]
//! async fn main() -> apiai_rust::Result<()> {
//!     let client = Client::new("your-client-access-token")?;
//!
//!     let response = client
//!         .query(&Query::text("book a table for two", "session-7"))
//!         .await?;
//!     println!("{}", response.result.fulfillment.speech);
//!
//!     if let Ok(ctx) = response.dialog_context("booking") {
//!         println!("still collecting: {}", ctx.parameters);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | [`Client`], [`ClientBuilder`], URL construction |
//! | [`types`] | Query, context, response and message types |
//! | [`transport`] | Bearer-signed HTTP exchange |
//! | [`error`] | [`Error`] and [`ErrorContext`] |

pub mod client;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{Client, ClientBuilder};
pub use types::{
    context::Context,
    message::{Message, MessageKind},
    query::{Event, Query},
    response::Response,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
