//! testomat-export: export Java test cases to a test management server.
//!
//! This crate scans Java test sources, extracts every test method together
//! with its labels, and uploads the collection in size-bounded batches.
//!
//! # Architecture
//!
//! The main components are:
//!
//! - **Discovery**: Find candidate source files ([`discovery`])
//! - **Framework**: Parse a source, detect JUnit 4/5 or TestNG, extract test
//!   cases ([`framework`], [`extract`])
//! - **Aggregation**: Fold per-file results into one run ([`aggregate`])
//! - **Export**: Send test cases in batches of at most 1000 ([`export`])
//! - **Service**: Dispatch a run to dry-run output or export ([`service`])
//!
//! # Example
//!
//! ```no_run
//! use testomat_export::config::load_config_or_default;
//! use testomat_export::discovery::discover_test_files;
//! use testomat_export::export::BatchExporter;
//! use testomat_export::export::transport::HttpTransport;
//! use testomat_export::extract::SourceExtractor;
//! use testomat_export::progress::NoProgress;
//! use testomat_export::ExportService;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = load_config_or_default(std::path::Path::new("testomat.toml"))?.apply_env();
//!     let files = discover_test_files(&config.discovery.paths, &config.discovery)?;
//!
//!     let service = ExportService::new(
//!         SourceExtractor::java(),
//!         BatchExporter::new(HttpTransport::new()?),
//!     );
//!     let count = service
//!         .process_test_files_with_progress(
//!             &files,
//!             config.export.api_key_or_empty(),
//!             config.export.server_url.as_deref(),
//!             true,
//!             false,
//!             &NoProgress,
//!         )
//!         .await?;
//!     println!("{} test methods", count);
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod config;
pub mod discovery;
pub mod error;
pub mod export;
pub mod extract;
pub mod framework;
pub mod progress;
pub mod service;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use aggregate::{ErrorPolicy, ProcessingResult};
pub use config::{Config, load_config};
pub use error::{ExportError, ExportResult};
pub use framework::{Framework, TestCase};
pub use service::{ExportService, RunMode};
