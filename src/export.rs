//! Batched upload of test cases.
//!
//! # Batching
//!
//! At most [`MAX_BATCH_SIZE`] test cases are sent per request:
//!
//! ```text
//!   n <= 1000          one request carrying all n test cases
//!
//!   n  > 1000          ceil(n / 1000) requests, in order
//!                      batch i covers [i * 1000, min((i + 1) * 1000, n))
//! ```
//!
//! Requests are sent strictly one after another. A failing batch stops the
//! export immediately: later batches are never sent and the caller receives an
//! error naming the failing batch, never a partial count.

pub mod payload;
pub mod transport;

use tracing::info;

use crate::error::{ExportError, ExportResult};
use crate::framework::{Framework, TestCase};
use crate::progress::{NoSpinner, Spinner};

use self::payload::{JsonPayloadBuilder, PayloadBuilder};
use self::transport::{Transport, TransportError};

/// Maximum number of test cases per request.
pub const MAX_BATCH_SIZE: usize = 1000;

/// Message used when no server URL is configured.
const MISSING_URL: &str = "TESTOMATIO_URL is required for actual execution";

/// Destination of an export: the validated server URL and API key.
///
/// # Example
///
/// ```
/// use testomat_export::export::Endpoint;
///
/// let endpoint = Endpoint::new(Some("https://app.testomat.io/"), "tstmt_123")?;
/// assert_eq!(endpoint.load_url(), "https://app.testomat.io/api/load?api_key=tstmt_123");
///
/// assert!(Endpoint::new(Some("   "), "tstmt_123").is_err());
/// assert!(Endpoint::new(None, "tstmt_123").is_err());
/// # Ok::<(), testomat_export::ExportError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    server_url: String,
    api_key: String,
}

impl Endpoint {
    /// Validates the server URL and builds an endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Config`] if the URL is absent or blank.
    pub fn new(server_url: Option<&str>, api_key: impl Into<String>) -> ExportResult<Self> {
        let server_url = server_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ExportError::Config(MISSING_URL.to_string()))?;

        Ok(Self {
            server_url: server_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Returns the server URL without a trailing slash.
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Returns the upload URL, `<server>/api/load?api_key=<key>`.
    pub fn load_url(&self) -> String {
        format!("{}/api/load?api_key={}", self.server_url, self.api_key)
    }
}

/// Sends test cases to an [`Endpoint`] in size-bounded batches.
///
/// # Type Parameters
///
/// - `T`: the transport performing requests
/// - `S`: the spinner shown while sending
/// - `B`: the payload builder serializing each batch
pub struct BatchExporter<T, S = NoSpinner, B = JsonPayloadBuilder> {
    transport: T,
    spinner: S,
    payload: B,
}

impl<T: Transport> BatchExporter<T> {
    /// Creates an exporter with JSON payloads and no spinner.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            spinner: NoSpinner,
            payload: JsonPayloadBuilder,
        }
    }
}

impl<T, S, B> BatchExporter<T, S, B> {
    /// Replaces the spinner.
    pub fn with_spinner<S2: Spinner>(self, spinner: S2) -> BatchExporter<T, S2, B> {
        BatchExporter {
            transport: self.transport,
            spinner,
            payload: self.payload,
        }
    }

    /// Replaces the payload builder.
    pub fn with_payload_builder<B2: PayloadBuilder>(self, payload: B2) -> BatchExporter<T, S, B2> {
        BatchExporter {
            transport: self.transport,
            spinner: self.spinner,
            payload,
        }
    }

    /// Returns the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the spinner.
    pub fn spinner(&self) -> &S {
        &self.spinner
    }
}

impl<T, S, B> BatchExporter<T, S, B>
where
    T: Transport,
    S: Spinner,
    B: PayloadBuilder,
{
    /// Sends every test case, tagged with `framework`, and returns how many
    /// were exported.
    ///
    /// # Errors
    ///
    /// - [`ExportError::Transport`] / [`ExportError::Request`] when the single
    ///   request fails (classified failures pass through unchanged)
    /// - [`ExportError::Batch`] when a batch of a multi-batch export fails
    /// - [`ExportError::Payload`] when a body cannot be serialized
    pub async fn export(
        &self,
        cases: &[TestCase],
        framework: Option<Framework>,
        endpoint: &Endpoint,
    ) -> ExportResult<usize> {
        let url = endpoint.load_url();

        self.spinner.start();
        let outcome = if cases.len() <= MAX_BATCH_SIZE {
            self.export_single(cases, framework, &url).await
        } else {
            self.export_batches(cases, framework, &url).await
        };

        match outcome {
            Ok(count) => {
                self.spinner
                    .stop_with_message(&format!("Successfully exported {} test methods", count));
                Ok(count)
            }
            Err(e) => {
                self.spinner.stop();
                Err(e)
            }
        }
    }

    async fn export_single(
        &self,
        cases: &[TestCase],
        framework: Option<Framework>,
        url: &str,
    ) -> ExportResult<usize> {
        let body = self.payload.build(cases, framework)?;

        self.transport
            .send(url, body)
            .await
            .map_err(classify_single)?;

        Ok(cases.len())
    }

    async fn export_batches(
        &self,
        cases: &[TestCase],
        framework: Option<Framework>,
        url: &str,
    ) -> ExportResult<usize> {
        let total_tests = cases.len();
        let total_batches = total_tests.div_ceil(MAX_BATCH_SIZE);

        info!(
            "Large test suite detected ({} tests). Sending in {} batches...",
            total_tests, total_batches
        );

        let mut exported = 0;
        for (index, batch) in cases.chunks(MAX_BATCH_SIZE).enumerate() {
            let number = index + 1;
            info!(
                "Sending batch {}/{} ({} tests)...",
                number,
                total_batches,
                batch.len()
            );

            let body = self.payload.build(batch, framework)?;
            self.transport
                .send(url, body)
                .await
                .map_err(|source| ExportError::Batch {
                    batch: number,
                    total: total_batches,
                    source,
                })?;

            exported += batch.len();
        }

        info!(
            "Successfully exported {} test methods in {} batches",
            exported, total_batches
        );
        Ok(exported)
    }
}

fn classify_single(err: TransportError) -> ExportError {
    if err.is_classified() {
        ExportError::Transport(err)
    } else {
        ExportError::Request(err)
    }
}
