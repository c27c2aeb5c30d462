//! API gateway client.
//!
//! Keep the public surface small: one [`Client`], one [`ClientBuilder`], and
//! three calls (query, get context, set context). Implementation details are
//! split into submodules under `src/client/`.

pub mod builder;
mod contexts;
pub mod core;
pub mod endpoint;
mod query;

pub use builder::{ClientBuilder, API_KEY_ENV};
pub use core::Client;
pub use endpoint::{Endpoint, API_URL, API_VERSION, CONTEXTS_ENDPOINT, QUERY_ENDPOINT};
