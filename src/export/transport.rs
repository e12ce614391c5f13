//! HTTP transport for upload requests.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors returned by a [`Transport`].
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The server answered with a non-success status.
    #[error("Server rejected request with status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The request URL could not be parsed.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    /// The HTTP client failed (connection refused, TLS, broken body, ...).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Other transport failures.
    #[error("Transport error: {0}")]
    Other(#[from] anyhow::Error),
}

impl TransportError {
    /// Returns `true` for failures that already carry a user-facing
    /// classification (server rejection, bad URL).
    ///
    /// Unclassified failures are wrapped with request context by the exporter.
    pub fn is_classified(&self) -> bool {
        matches!(
            self,
            TransportError::Rejected { .. } | TransportError::InvalidUrl(_)
        )
    }
}

/// Sends a serialized request body to a URL.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POSTs `body` to `url`. Any success status is `Ok`.
    async fn send(&self, url: &str, body: String) -> TransportResult<()>;
}

/// [`Transport`] backed by a `reqwest` client.
///
/// No timeout is configured; a hung request blocks the export.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport with a default client.
    pub fn new() -> TransportResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, url: &str, body: String) -> TransportResult<()> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|e| TransportError::InvalidUrl(format!("{}: {}", redact(url), e)))?;

        debug!("POST {} ({} bytes)", parsed.path(), body.len());

        let response = self
            .client
            .post(parsed)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Server accepted request with status {}", status);
        Ok(())
    }
}

/// Strips the query string so API keys do not end up in messages.
fn redact(url: &str) -> &str {
    url.split_once('?').map_or(url, |(base, _)| base)
}
