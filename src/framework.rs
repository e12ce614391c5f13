//! Test framework model and source-level collaborators.
//!
//! This module defines the records produced by extraction ([`TestCase`]), the
//! set of recognised test frameworks ([`Framework`]), and the three traits that
//! turn a Java source file into test cases.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                     per source file                              │
//! ├──────────────────────────────────────────────────────────────────┤
//! │                                                                  │
//! │  SourceParser::parse(path) ────────► Option<JavaSource>          │
//! │                                            │                     │
//! │                                            ▼                     │
//! │  FrameworkDetector::detect(&source) ──► Option<Framework>        │
//! │                                            │                     │
//! │                                            ▼                     │
//! │  TestCaseExtractor::extract(&source, path, fw) ──► Vec<TestCase> │
//! │                                                                  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Built-in Implementations
//!
//! | Implementation | Role |
//! |----------------|------|
//! | [`parser::JavaParser`] | Token scanner producing a [`parser::JavaSource`] outline |
//! | [`detector::JavaDetector`] | Import/annotation based framework detection |
//! | [`extractor::JavaExtractor`] | Emits one [`TestCase`] per annotated test method |

pub mod detector;
pub mod extractor;
pub mod parser;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::parser::JavaSource;

/// Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Unexpected failures while parsing, detecting, or extracting from a file.
///
/// "File has no parseable structure" and "no framework detected" are not
/// errors; they are reported as empty results.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// I/O error reading the source file or resolving its path.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other extraction errors.
    #[error("Extraction error: {0}")]
    Other(#[from] anyhow::Error),
}

/// A test framework recognised in Java sources.
///
/// The serialized form is the label sent to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    /// JUnit 4 (`org.junit.Test`).
    JUnit4,
    /// JUnit Jupiter (`org.junit.jupiter.api.Test`).
    JUnit5,
    /// TestNG (`org.testng.annotations.Test`).
    TestNG,
}

impl Framework {
    /// Returns the label used on the wire and in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::JUnit4 => "junit4",
            Framework::JUnit5 => "junit5",
            Framework::TestNG => "testng",
        }
    }

    /// Simple names of the annotations that mark a test method.
    pub fn test_annotations(&self) -> &'static [&'static str] {
        match self {
            Framework::JUnit5 => &[
                "Test",
                "ParameterizedTest",
                "RepeatedTest",
                "TestFactory",
                "TestTemplate",
            ],
            Framework::JUnit4 | Framework::TestNG => &["Test"],
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One discovered test method.
///
/// A `TestCase` is built once by a [`TestCaseExtractor`] and never mutated
/// afterwards; fields are only reachable through accessors.
///
/// # Example
///
/// ```
/// use testomat_export::framework::TestCase;
///
/// let case = TestCase::new("shouldAdd", "/work/src/test/java/CalcTest.java")
///     .with_label("CalcTest")
///     .with_label("fast")
///     .with_label("CalcTest");
///
/// assert_eq!(case.name(), "shouldAdd");
/// assert_eq!(case.labels(), ["CalcTest", "fast"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCase {
    name: String,
    labels: Vec<String>,
    file: PathBuf,
}

impl TestCase {
    /// Creates a test case with no labels.
    pub fn new(name: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            labels: Vec::new(),
            file: file.into(),
        }
    }

    /// Adds a label, ignoring blanks and duplicates.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        if !label.trim().is_empty() && !self.labels.contains(&label) {
            self.labels.push(label);
        }
        self
    }

    /// Adds every label from the iterator, in order.
    pub fn with_labels<I, S>(self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        labels.into_iter().fold(self, |case, label| case.with_label(label))
    }

    /// Returns the test name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the labels in insertion order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the absolute path of the declaring source file.
    pub fn file(&self) -> &Path {
        &self.file
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] ({})",
            self.name,
            self.labels.join(", "),
            self.file.display()
        )
    }
}

/// Turns a file on disk into a structural outline.
///
/// Returns `Ok(None)` when the file has no usable structure. I/O failures are
/// errors.
pub trait SourceParser: Send + Sync {
    /// Parses the file at `path`.
    fn parse(&self, path: &Path) -> ExtractResult<Option<JavaSource>>;
}

/// Identifies which test framework a parsed source uses.
pub trait FrameworkDetector: Send + Sync {
    /// Returns the detected framework, or `None` for non-test sources.
    fn detect(&self, source: &JavaSource) -> Option<Framework>;
}

/// Walks a parsed source and emits its test cases.
pub trait TestCaseExtractor: Send + Sync {
    /// Extracts test cases declared in `source`, which was read from `file`.
    fn extract(
        &self,
        source: &JavaSource,
        file: &Path,
        framework: Framework,
    ) -> ExtractResult<Vec<TestCase>>;
}
