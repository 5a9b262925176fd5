// Carbon Intensity API HTTP client
//
// Wraps `reqwest::Client` with base-URL handling, path construction, and
// `{ data: ... }` envelope decoding. Endpoint families (intensity,
// generation, regional) are implemented as inherent methods via separate
// files to keep this module focused on transport mechanics.

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::schema::ErrorResponse;
use crate::transport::TransportConfig;

mod generation;
mod intensity;
mod regional;

/// Production base URL of the Carbon Intensity API.
pub const DEFAULT_BASE_URL: &str = "https://api.carbonintensity.org.uk";

/// Async client for the UK National Grid Carbon Intensity API.
///
/// Stateless across calls; the one owned resource is the `reqwest` connection
/// pool, shared by every request and released when the last clone is dropped.
/// Cloning is cheap and clones share the pool, so a single `Client` can serve
/// any number of concurrent in-flight calls.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
}

impl Client {
    // ── Constructors ─────────────────────────────────────────────────

    /// Create a client against the production API with default transport
    /// settings.
    pub fn new() -> Result<Self, Error> {
        Self::with_transport(DEFAULT_BASE_URL, &TransportConfig::default())
    }

    /// Create a client against a different base URL (e.g. a mock server).
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::with_transport(base_url, &TransportConfig::default())
    }

    /// Create a client with explicit transport settings.
    pub fn with_transport(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::from_reqwest(base_url, http)
    }

    /// Wrap an existing `reqwest::Client` (caller manages transport tuning).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidArgument(format!(
                "base URL {base_url} cannot carry a path"
            )));
        }
        Ok(Self { http, base_url })
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// The configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The underlying HTTP client.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Append percent-encoded path segments to the base URL.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        {
            let Ok(mut path) = url.path_segments_mut() else {
                // Ruled out at construction, kept as a guard for cheap clones.
                return Err(Error::InvalidArgument(
                    "base URL cannot carry a path".to_owned(),
                ));
            };
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }

    // ── Request helper ───────────────────────────────────────────────

    /// Send a GET request and decode the response body as `T`.
    ///
    /// Success/error classification follows the HTTP status alone: a 2xx
    /// body is decoded as `T` even if it happens to look like an error
    /// envelope, and a non-2xx body is mined for the upstream
    /// `{ error: { code, message } }` shape before falling back to the
    /// status line.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(api_error(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }
}

/// Build the uniform API error for a non-2xx response.
fn api_error(status: StatusCode, body: &str) -> Error {
    if let Ok(envelope) = serde_json::from_str::<ErrorResponse>(body) {
        return Error::Api {
            status: status.as_u16(),
            code: Some(envelope.error.code),
            message: envelope.error.message,
        };
    }
    Error::Api {
        status: status.as_u16(),
        code: None,
        message: status
            .canonical_reason()
            .unwrap_or("unrecognized status")
            .to_owned(),
    }
}

/// Reject an inverted date range before any request is issued.
pub(crate) fn check_range(from: DateTime<Utc>, to: DateTime<Utc>) -> Result<(), Error> {
    if from > to {
        return Err(Error::InvalidArgument(format!(
            "range start {from} is after end {to}"
        )));
    }
    Ok(())
}
