use crate::transport::TransportError;
use thiserror::Error;

/// Structured error context for decode and configuration failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path or configuration key that caused the error (e.g., "builder.api_key", "response.result")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., the offending value)
    pub details: Option<String>,
    /// Operation that produced the error (e.g., "query", "context")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Error type for every client operation.
///
/// Calls are all-or-nothing: an operation either returns its value or one of
/// these variants, never a partial result.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced an HTTP response (DNS, connect, TLS, body read).
    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    /// The service answered with a non-2xx status. `body` is the raw response text.
    #[error("API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// The named context does not exist for the session.
    #[error("Context not found: {name}")]
    NotFound { name: String },

    /// The response body did not match the expected JSON shape.
    #[error("Decode error: {source}{}", format_context(.context))]
    Decode {
        #[source]
        source: serde_json::Error,
        context: ErrorContext,
    },

    /// The outgoing payload could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a configuration error without extra context
    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
            context: ErrorContext::new(),
        }
    }

    /// Create a configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Wrap a JSON decoding failure with structured context
    pub fn decode_with_context(source: serde_json::Error, context: ErrorContext) -> Self {
        Error::Decode { source, context }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Decode { context, .. } | Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }

    /// HTTP status for errors that came back from the service.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
