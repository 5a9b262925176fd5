use thiserror::Error;

/// Top-level error type for the `gridcarbon` crate.
///
/// Covers every failure mode: bad caller input (rejected before any network
/// I/O), transport failures, upstream API errors, and response decoding.
#[derive(Debug, Error)]
pub enum Error {
    // ── Caller input ────────────────────────────────────────────────
    /// Invalid argument supplied by the caller (empty postcode, settlement
    /// period out of range, inverted date range). Raised before any request
    /// is issued.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The blocking wrapper failed to start its runtime.
    #[error("Failed to start blocking runtime: {0}")]
    Runtime(#[from] std::io::Error),

    // ── Upstream API ────────────────────────────────────────────────
    /// Non-2xx response from the Carbon Intensity API. The message comes
    /// from the `{ "error": { "code", "message" } }` envelope when the body
    /// parses as one, otherwise from the HTTP status line.
    #[error("API error (HTTP {status}): {message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON decoding or validation failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// The upstream HTTP status code, when one was received.
    ///
    /// `None` for transport failures where no response arrived and for
    /// errors raised before any request was issued.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if this is a transient error worth retrying.
    ///
    /// The client never retries on its own; this is a hint for callers
    /// implementing their own policy.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Api { status, .. } => matches!(status, 429 | 502 | 503 | 504),
            _ => false,
        }
    }

    /// Extract the upstream error code, if the API supplied one.
    pub fn api_error_code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}
