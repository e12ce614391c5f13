//! Classified failures surfaced to callers of the export pipeline.

use std::path::PathBuf;

use crate::export::transport::TransportError;
use crate::framework::ExtractError;

/// Result type for export pipeline operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that end an export run.
///
/// # Error Categories
///
/// - **Configuration**: missing server URL, detected before any request
/// - **File processing**: one source file failed (fatal only in verbose runs)
/// - **Transmission**: the server or network failed a request
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Required export configuration is missing or blank.
    #[error("{0}")]
    Config(String),

    /// A source file could not be processed.
    #[error("Error processing file {}", file.display())]
    FileProcessing {
        file: PathBuf,
        #[source]
        source: ExtractError,
    },

    /// A failure the transport already classified, passed through unchanged.
    #[error(transparent)]
    Transport(TransportError),

    /// An unclassified failure while sending the single request.
    #[error("Error while executing request: {0}")]
    Request(#[source] TransportError),

    /// A batch of a multi-batch export failed; later batches were not sent.
    #[error("Failed at batch {batch}/{total}: {source}")]
    Batch {
        batch: usize,
        total: usize,
        #[source]
        source: TransportError,
    },

    /// The request body could not be serialized.
    #[error("Failed to build request body: {0}")]
    Payload(#[from] serde_json::Error),
}
