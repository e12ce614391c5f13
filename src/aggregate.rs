//! The file loop: extraction across many files with isolated failures.
//!
//! Files are processed strictly in the given order. Each file's test cases are
//! appended to one [`ProcessingResult`], and the run's primary framework is
//! taken from the first file that produced at least one test case.
//!
//! # Failure Isolation
//!
//! | Policy | On a failing file |
//! |--------|-------------------|
//! | [`ErrorPolicy::Skip`] | The file contributes nothing; the loop continues |
//! | [`ErrorPolicy::Abort`] | The loop stops with [`ExportError::FileProcessing`] |
//!
//! Progress is reported after every file, including one that aborts the run.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ExportError, ExportResult};
use crate::extract::FileExtractor;
use crate::framework::{ExtractResult, Framework, TestCase};
use crate::progress::ProgressReporter;

/// What to do when a single file fails to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Discard the failure and continue with the next file.
    #[default]
    Skip,

    /// Stop the run and surface the failure.
    Abort,
}

impl ErrorPolicy {
    /// Verbose runs abort on the first failing file; others skip it.
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose {
            ErrorPolicy::Abort
        } else {
            ErrorPolicy::Skip
        }
    }
}

/// Everything collected from one run over the source files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingResult {
    test_cases: Vec<TestCase>,
    primary_framework: Option<Framework>,
}

impl ProcessingResult {
    /// Returns all test cases in file-processing order.
    pub fn test_cases(&self) -> &[TestCase] {
        &self.test_cases
    }

    /// Consumes the result, returning its test cases.
    pub fn into_test_cases(self) -> Vec<TestCase> {
        self.test_cases
    }

    /// Returns the framework of the first file that produced test cases.
    pub fn primary_framework(&self) -> Option<Framework> {
        self.primary_framework
    }

    /// Returns true if no test case was found.
    pub fn is_empty(&self) -> bool {
        self.test_cases.is_empty()
    }

    /// Returns the number of test cases.
    pub fn len(&self) -> usize {
        self.test_cases.len()
    }

    /// Appends one file's test cases.
    ///
    /// `framework_of_file` is only consulted while no primary framework is
    /// set and `cases` is non-empty, so the first contributing file wins.
    fn absorb(
        &mut self,
        cases: Vec<TestCase>,
        framework_of_file: impl FnOnce() -> ExtractResult<Option<Framework>>,
    ) -> ExtractResult<()> {
        if cases.is_empty() {
            return Ok(());
        }
        self.test_cases.extend(cases);
        if self.primary_framework.is_none() {
            self.primary_framework = framework_of_file()?;
        }
        Ok(())
    }
}

/// Runs extraction over `files` in order and folds the results.
///
/// # Errors
///
/// Returns [`ExportError::FileProcessing`] for the first failing file when
/// `policy` is [`ErrorPolicy::Abort`]. `progress.finish()` is not called in
/// that case.
pub fn process_files<X>(
    extractor: &X,
    files: &[PathBuf],
    policy: ErrorPolicy,
    progress: &dyn ProgressReporter,
) -> ExportResult<ProcessingResult>
where
    X: FileExtractor + ?Sized,
{
    let result = files.iter().enumerate().try_fold(
        ProcessingResult::default(),
        |mut acc, (index, file)| {
            let outcome = process_file(extractor, file, &mut acc);
            progress.update(index + 1);

            match (outcome, policy) {
                (Ok(()), _) => Ok(acc),
                (Err(e), ErrorPolicy::Skip) => {
                    debug!("Skipping {}: {}", file.display(), e);
                    Ok(acc)
                }
                (Err(source), ErrorPolicy::Abort) => Err(ExportError::FileProcessing {
                    file: file.clone(),
                    source,
                }),
            }
        },
    )?;

    progress.finish();
    Ok(result)
}

fn process_file<X>(extractor: &X, file: &Path, acc: &mut ProcessingResult) -> ExtractResult<()>
where
    X: FileExtractor + ?Sized,
{
    let cases = extractor.extract_file(file)?;
    acc.absorb(cases, || extractor.detect_framework(file))
}
