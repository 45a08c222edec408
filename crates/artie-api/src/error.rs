use thiserror::Error;

/// Top-level error type for the `artie-api` crate.
///
/// Every failure a single request can produce falls into exactly one of
/// these variants, so callers can tell "resource absent" apart from
/// "request rejected" apart from "API unreachable". `artie-core` wraps
/// these without flattening them.
#[derive(Debug, Error)]
pub enum Error {
    // ── Configuration ───────────────────────────────────────────────
    /// Client could not be constructed (malformed API key, bad endpoint, ...).
    /// Always raised before any request is sent.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// URL parsing or joining failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Request encoding ────────────────────────────────────────────
    /// The request body could not be serialized. No request was sent.
    #[error("Failed to encode request body: {0}")]
    Encoding(#[source] serde_json::Error),

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, ...).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The in-flight request was aborted through its cancellation token.
    #[error("Request cancelled")]
    Cancelled,

    // ── Status classification ───────────────────────────────────────
    /// HTTP 404. The response body is never inspected.
    #[error("Resource not found")]
    NotFound,

    /// Any other non-200 status. `message` is empty when the server did not
    /// send a `{"error": "..."}` body (or the status is outside 4xx).
    #[error("{}", render_http_error(.status, .message))]
    Http { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Failed to decode response: {message}")]
    Decoding { message: String, body: String },

    // ── Logical failures ────────────────────────────────────────────
    /// A connectivity check or pipeline validation came back with HTTP 200
    /// but a non-empty `error` field.
    #[error("Validation failed: {message}")]
    Validation { message: String },
}

fn render_http_error(status: &u16, message: &str) -> String {
    if message.is_empty() {
        format!("received non-200 status code: {status}")
    } else {
        format!("HTTP {status}: {message}")
    }
}

impl Error {
    /// Returns `true` for the 404 sentinel.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Returns `true` if the API could not be reached at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Cancelled)
    }

    /// Returns `true` if the client was misconfigured before sending anything.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. } | Self::InvalidUrl(_))
    }

    /// Returns `true` for logical (HTTP 200) validation failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// The HTTP status code, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound => Some(404),
            Self::Http { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
