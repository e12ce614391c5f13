//! Top-level export service.
//!
//! [`ExportService`] ties the pipeline together:
//!
//! ```text
//!   files ──► process_files() ──► ProcessingResult ──► dispatch()
//!                  │                                      │
//!            ProgressReporter                ┌────────────┼─────────────┐
//!                                            ▼            ▼             ▼
//!                                        empty: 0    dry run: print  export:
//!                                                        count       BatchExporter
//! ```

use std::path::PathBuf;

use tracing::info;

use crate::aggregate::{ErrorPolicy, ProcessingResult, process_files};
use crate::error::ExportResult;
use crate::export::payload::PayloadBuilder;
use crate::export::transport::Transport;
use crate::export::{BatchExporter, Endpoint};
use crate::extract::FileExtractor;
use crate::framework::TestCase;
use crate::progress::{ProgressReporter, Spinner};

/// Whether a run sends anything over the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Extract and upload.
    #[default]
    Export,

    /// Extract and print only.
    DryRun,
}

impl RunMode {
    /// Maps the `--dry-run` flag to a mode.
    pub fn from_dry_run(dry_run: bool) -> Self {
        if dry_run {
            RunMode::DryRun
        } else {
            RunMode::Export
        }
    }
}

/// Extracts test cases from source files and reports or uploads them.
///
/// # Example
///
/// ```no_run
/// use testomat_export::export::BatchExporter;
/// use testomat_export::export::transport::HttpTransport;
/// use testomat_export::extract::SourceExtractor;
/// use testomat_export::progress::{ConsoleSpinner, NoProgress};
/// use testomat_export::service::ExportService;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let exporter = BatchExporter::new(HttpTransport::new()?)
///         .with_spinner(ConsoleSpinner::default());
///     let service = ExportService::new(SourceExtractor::java(), exporter);
///
///     let files = vec!["src/test/java/CalcTest.java".into()];
///     let count = service
///         .process_test_files_with_progress(
///             &files,
///             "tstmt_key",
///             Some("https://app.testomat.io"),
///             false,
///             false,
///             &NoProgress,
///         )
///         .await?;
///     println!("Exported {} test methods", count);
///     Ok(())
/// }
/// ```
pub struct ExportService<X, T, S, B> {
    extractor: X,
    exporter: BatchExporter<T, S, B>,
}

impl<X, T, S, B> ExportService<X, T, S, B>
where
    X: FileExtractor,
    T: Transport,
    S: Spinner,
    B: PayloadBuilder,
{
    /// Creates a service from an extractor and an exporter.
    pub fn new(extractor: X, exporter: BatchExporter<T, S, B>) -> Self {
        Self {
            extractor,
            exporter,
        }
    }

    /// Returns the exporter.
    pub fn exporter(&self) -> &BatchExporter<T, S, B> {
        &self.exporter
    }

    /// Processes `files` and returns the number of test cases reported or
    /// exported.
    ///
    /// `verbose` turns per-file failures into run-aborting errors; `dry_run`
    /// prints the test cases instead of uploading them.
    pub async fn process_test_files_with_progress(
        &self,
        files: &[PathBuf],
        api_key: &str,
        server_url: Option<&str>,
        dry_run: bool,
        verbose: bool,
        progress: &dyn ProgressReporter,
    ) -> ExportResult<usize> {
        let result = self.collect(files, ErrorPolicy::from_verbose(verbose), progress)?;
        self.dispatch(result, api_key, server_url, RunMode::from_dry_run(dry_run))
            .await
    }

    /// Runs the file loop only.
    pub fn collect(
        &self,
        files: &[PathBuf],
        policy: ErrorPolicy,
        progress: &dyn ProgressReporter,
    ) -> ExportResult<ProcessingResult> {
        process_files(&self.extractor, files, policy, progress)
    }

    /// Reports or exports a finished [`ProcessingResult`].
    ///
    /// # Errors
    ///
    /// In [`RunMode::Export`] with at least one test case, fails with
    /// [`ExportError::Config`](crate::ExportError::Config) before any request
    /// if `server_url` is absent or blank, and with the exporter's errors
    /// otherwise.
    pub async fn dispatch(
        &self,
        result: ProcessingResult,
        api_key: &str,
        server_url: Option<&str>,
        mode: RunMode,
    ) -> ExportResult<usize> {
        if result.is_empty() {
            info!("No test methods found across all files");
            return Ok(0);
        }

        info!("Found {} total test methods", result.len());

        match mode {
            RunMode::DryRun => {
                print_test_cases(result.test_cases());
                Ok(result.len())
            }
            RunMode::Export => {
                let endpoint = Endpoint::new(server_url, api_key)?;
                self.exporter
                    .export(result.test_cases(), result.primary_framework(), &endpoint)
                    .await
            }
        }
    }
}

fn print_test_cases(cases: &[TestCase]) {
    println!("All test methods found:");
    for case in cases {
        println!("  - {}", case);
    }
}
