//! Per-file extraction: parse, detect, extract.
//!
//! [`SourceExtractor`] composes a [`SourceParser`], a [`FrameworkDetector`] and
//! a [`TestCaseExtractor`] into the per-file contract used by the aggregation
//! loop. An unparsable file and a file without a recognised framework both
//! yield an empty result; only unexpected failures are errors.

use std::path::Path;

use tracing::debug;

use crate::framework::detector::JavaDetector;
use crate::framework::extractor::JavaExtractor;
use crate::framework::parser::JavaParser;
use crate::framework::{
    ExtractResult, Framework, FrameworkDetector, SourceParser, TestCase, TestCaseExtractor,
};

/// Per-file extraction as seen by the aggregation loop.
pub trait FileExtractor: Send + Sync {
    /// Returns the test cases declared in `path`, possibly none.
    fn extract_file(&self, path: &Path) -> ExtractResult<Vec<TestCase>>;

    /// Returns the framework used by `path` without extracting test cases.
    fn detect_framework(&self, path: &Path) -> ExtractResult<Option<Framework>>;
}

/// [`FileExtractor`] built from the three source-level collaborators.
///
/// Nothing is cached between calls: [`detect_framework`](FileExtractor::detect_framework)
/// re-parses the file.
#[derive(Debug, Clone, Default)]
pub struct SourceExtractor<P = JavaParser, D = JavaDetector, E = JavaExtractor> {
    parser: P,
    detector: D,
    extractor: E,
}

impl SourceExtractor {
    /// Creates the Java extractor.
    pub fn java() -> Self {
        Self::default()
    }
}

impl<P, D, E> SourceExtractor<P, D, E>
where
    P: SourceParser,
    D: FrameworkDetector,
    E: TestCaseExtractor,
{
    /// Creates an extractor from explicit collaborators.
    pub fn new(parser: P, detector: D, extractor: E) -> Self {
        Self {
            parser,
            detector,
            extractor,
        }
    }
}

impl<P, D, E> FileExtractor for SourceExtractor<P, D, E>
where
    P: SourceParser,
    D: FrameworkDetector,
    E: TestCaseExtractor,
{
    fn extract_file(&self, path: &Path) -> ExtractResult<Vec<TestCase>> {
        let Some(source) = self.parser.parse(path)? else {
            return Ok(Vec::new());
        };

        let Some(framework) = self.detector.detect(&source) else {
            debug!("No test framework detected in {}", path.display());
            return Ok(Vec::new());
        };

        let cases = self.extractor.extract(&source, path, framework)?;
        debug!(
            "Found {} {} test methods in {}",
            cases.len(),
            framework,
            path.display()
        );
        Ok(cases)
    }

    fn detect_framework(&self, path: &Path) -> ExtractResult<Option<Framework>> {
        Ok(self
            .parser
            .parse(path)?
            .and_then(|source| self.detector.detect(&source)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_extract_junit5_file() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "CalcTest.java",
            r#"
            import org.junit.jupiter.api.Test;
            class CalcTest {
                @Test void adds() {}
                @Test void subtracts() {}
            }
            "#,
        );

        let extractor = SourceExtractor::java();
        let cases = extractor.extract_file(&path).unwrap();

        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].name(), "adds");
        assert_eq!(cases[0].file(), path.as_path());
        assert_eq!(
            extractor.detect_framework(&path).unwrap(),
            Some(Framework::JUnit5)
        );
    }

    #[test]
    fn test_unparsable_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "Broken.java", "class Broken { void t() {");

        let extractor = SourceExtractor::java();
        assert!(extractor.extract_file(&path).unwrap().is_empty());
        assert_eq!(extractor.detect_framework(&path).unwrap(), None);
    }

    #[test]
    fn test_file_without_framework_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "Util.java",
            "import java.util.List; class Util { @Test void looksLikeATest() {} }",
        );

        assert!(SourceExtractor::java().extract_file(&path).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let result = SourceExtractor::java().extract_file(&dir.path().join("Gone.java"));
        assert!(result.is_err());
    }
}
