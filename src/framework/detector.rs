//! Framework detection from imports and annotation names.

use super::parser::JavaSource;
use super::{Framework, FrameworkDetector};

/// Package prefixes per framework, in precedence order.
///
/// JUnit Jupiter must be checked before plain `org.junit`.
const FRAMEWORK_PACKAGES: &[(Framework, &[&str])] = &[
    (Framework::JUnit5, &["org.junit.jupiter"]),
    (Framework::TestNG, &["org.testng"]),
    (Framework::JUnit4, &["org.junit", "junit.framework"]),
];

/// Detects the test framework of a Java source.
///
/// A source matches a framework when one of its imports, or one of its
/// fully-qualified annotations, lives in that framework's packages. When a
/// file mixes frameworks, JUnit 5 wins over TestNG, which wins over JUnit 4.
///
/// # Example
///
/// ```
/// use testomat_export::framework::{Framework, FrameworkDetector};
/// use testomat_export::framework::detector::JavaDetector;
/// use testomat_export::framework::parser::parse_source;
///
/// let source = parse_source("import org.testng.annotations.Test; class A {}").unwrap();
/// assert_eq!(JavaDetector.detect(&source), Some(Framework::TestNG));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaDetector;

impl FrameworkDetector for JavaDetector {
    fn detect(&self, source: &JavaSource) -> Option<Framework> {
        let qualified_names: Vec<&str> = source
            .imports
            .iter()
            .map(String::as_str)
            .chain(
                source
                    .annotations()
                    .filter(|a| a.name.contains('.'))
                    .map(|a| a.name.as_str()),
            )
            .collect();

        FRAMEWORK_PACKAGES
            .iter()
            .find(|(_, packages)| {
                qualified_names
                    .iter()
                    .any(|name| packages.iter().any(|pkg| in_package(name, pkg)))
            })
            .map(|(framework, _)| *framework)
    }
}

/// Returns true if `name` is `package` or lives below it.
fn in_package(name: &str, package: &str) -> bool {
    name.strip_prefix(package)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::parser::parse_source;

    fn detect(text: &str) -> Option<Framework> {
        JavaDetector.detect(&parse_source(text).unwrap())
    }

    #[test]
    fn test_detect_junit5() {
        assert_eq!(
            detect("import org.junit.jupiter.api.Test; class A { @Test void t() {} }"),
            Some(Framework::JUnit5)
        );
    }

    #[test]
    fn test_detect_junit5_wildcard_import() {
        assert_eq!(
            detect("import org.junit.jupiter.api.*; class A {}"),
            Some(Framework::JUnit5)
        );
    }

    #[test]
    fn test_detect_junit4() {
        assert_eq!(
            detect("import org.junit.Test; class A { @Test public void t() {} }"),
            Some(Framework::JUnit4)
        );
        assert_eq!(
            detect("import junit.framework.TestCase; class A extends TestCase {}"),
            Some(Framework::JUnit4)
        );
    }

    #[test]
    fn test_detect_testng() {
        assert_eq!(
            detect("import org.testng.annotations.Test; class A {}"),
            Some(Framework::TestNG)
        );
    }

    #[test]
    fn test_detect_from_qualified_annotation() {
        assert_eq!(
            detect("class A { @org.junit.jupiter.api.Test void t() {} }"),
            Some(Framework::JUnit5)
        );
    }

    #[test]
    fn test_junit5_takes_precedence_over_junit4() {
        assert_eq!(
            detect("import org.junit.Assert; import org.junit.jupiter.api.Test; class A {}"),
            Some(Framework::JUnit5)
        );
    }

    #[test]
    fn test_package_prefix_must_end_at_segment() {
        assert_eq!(detect("import org.junitx.Helper; class A {}"), None);
    }

    #[test]
    fn test_detect_none_for_plain_class() {
        assert_eq!(
            detect("import java.util.List; class A { @Override public String toString() { return \"\"; } }"),
            None
        );
    }
}
