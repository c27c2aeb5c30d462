//! HTTP transport: bearer-signed JSON requests over a shared reqwest client.

mod http;

pub use http::{HttpTransport, RawResponse, TransportError};
