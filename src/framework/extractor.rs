//! Test case extraction from parsed Java sources.
//!
//! # Labels
//!
//! Every emitted [`TestCase`] is labelled, in order, with:
//!
//! | Source | Frameworks |
//! |--------|------------|
//! | Declaring type name | all |
//! | `@Tag` / `@Tags` on the type, then the method | JUnit 5 |
//! | `@Category(X.class)` on the type, then the method | JUnit 4 |
//! | `groups` of `@Test` on the type, then the method | TestNG |
//! | `disabled` for `@Disabled`, `@Ignore` or `@Test(enabled = false)` | all |

use std::path::Path;

use super::parser::{Annotation, JavaSource, MethodDecl, TypeDecl};
use super::{ExtractResult, Framework, TestCase, TestCaseExtractor};

const DISABLED_LABEL: &str = "disabled";

/// Extracts one [`TestCase`] per annotated test method.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaExtractor;

impl TestCaseExtractor for JavaExtractor {
    fn extract(
        &self,
        source: &JavaSource,
        file: &Path,
        framework: Framework,
    ) -> ExtractResult<Vec<TestCase>> {
        let file = std::path::absolute(file)?;

        let cases = source
            .types
            .iter()
            .flat_map(|decl| {
                decl.methods
                    .iter()
                    .filter(|method| is_test_method(method, framework))
                    .map(|method| {
                        TestCase::new(&method.name, &file)
                            .with_label(&decl.name)
                            .with_labels(framework_labels(decl, method, framework))
                            .with_labels(
                                is_disabled(decl, method, framework).then_some(DISABLED_LABEL),
                            )
                    })
            })
            .collect();

        Ok(cases)
    }
}

fn is_test_method(method: &MethodDecl, framework: Framework) -> bool {
    method
        .annotations
        .iter()
        .any(|a| framework.test_annotations().contains(&a.simple_name()))
}

/// Collects framework-specific labels from the type and then the method.
fn framework_labels(decl: &TypeDecl, method: &MethodDecl, framework: Framework) -> Vec<String> {
    let per_annotation = |annotations: &[Annotation]| -> Vec<String> {
        annotations
            .iter()
            .flat_map(|a| match (framework, a.simple_name()) {
                (Framework::JUnit5, "Tag" | "Tags") => a.string_values("value"),
                (Framework::JUnit4, "Category") => a.class_values("value"),
                (Framework::TestNG, "Test") => a.string_values("groups"),
                _ => Vec::new(),
            })
            .collect()
    };

    let mut labels = per_annotation(&decl.annotations);
    labels.extend(per_annotation(&method.annotations));
    labels
}

fn is_disabled(decl: &TypeDecl, method: &MethodDecl, framework: Framework) -> bool {
    let marker = match framework {
        Framework::JUnit5 => "Disabled",
        Framework::JUnit4 => "Ignore",
        Framework::TestNG => {
            let turned_off = |a: Option<&Annotation>| a.and_then(|a| a.bool_value("enabled")) == Some(false);
            return turned_off(decl.annotation("Test")) || turned_off(method.annotation("Test"));
        }
    };
    decl.annotation(marker).is_some() || method.annotation(marker).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::parser::parse_source;

    fn extract(text: &str, framework: Framework) -> Vec<TestCase> {
        let source = parse_source(text).unwrap();
        JavaExtractor
            .extract(&source, Path::new("/project/src/test/java/SampleTest.java"), framework)
            .unwrap()
    }

    #[test]
    fn test_extract_junit5_methods_in_order() {
        let cases = extract(
            r#"
            import org.junit.jupiter.api.*;

            @Tag("unit")
            class CalcTest {
                @Test @Tag("fast") void adds() {}
                @ParameterizedTest void parameterized(int x) {}
                void helper() {}
                @RepeatedTest(3) void repeated() {}
            }
            "#,
            Framework::JUnit5,
        );

        let names: Vec<_> = cases.iter().map(TestCase::name).collect();
        assert_eq!(names, ["adds", "parameterized", "repeated"]);
        assert_eq!(cases[0].labels(), ["CalcTest", "unit", "fast"]);
        assert_eq!(cases[1].labels(), ["CalcTest", "unit"]);
        assert_eq!(
            cases[0].file(),
            Path::new("/project/src/test/java/SampleTest.java")
        );
    }

    #[test]
    fn test_extract_junit5_tags_container_and_disabled() {
        let cases = extract(
            r#"class A {
                @Test
                @Tags({@Tag("slow"), @Tag("db")})
                @Disabled("flaky")
                void t() {}
            }"#,
            Framework::JUnit5,
        );

        assert_eq!(cases[0].labels(), ["A", "slow", "db", "disabled"]);
    }

    #[test]
    fn test_extract_junit4_categories_and_ignore() {
        let cases = extract(
            r#"
            @Category(IntegrationTests.class)
            public class DbTest {
                @Test
                @Category({Slow.class, com.acme.Nightly.class})
                public void migrates() {}

                @Ignore
                @Test
                public void skipped() {}

                @ParameterizedTest
                public void notJUnit4() {}
            }
            "#,
            Framework::JUnit4,
        );

        assert_eq!(cases.len(), 2);
        assert_eq!(
            cases[0].labels(),
            ["DbTest", "IntegrationTests", "Slow", "Nightly"]
        );
        assert_eq!(cases[1].labels(), ["DbTest", "IntegrationTests", "disabled"]);
    }

    #[test]
    fn test_extract_testng_groups_and_enabled_flag() {
        let cases = extract(
            r#"
            @Test(groups = "api")
            public class ApiTest {
                @Test(groups = {"smoke", "api"})
                public void login() {}

                @Test(enabled = false)
                public void logout() {}
            }
            "#,
            Framework::TestNG,
        );

        assert_eq!(cases[0].labels(), ["ApiTest", "api", "smoke"]);
        assert_eq!(cases[1].labels(), ["ApiTest", "api", "disabled"]);
    }

    #[test]
    fn test_extract_nested_type_uses_inner_name() {
        let cases = extract(
            r#"class Outer {
                @Test void outer() {}
                @Nested class Inner { @Test void inner() {} }
            }"#,
            Framework::JUnit5,
        );

        assert_eq!(cases[0].labels(), ["Outer"]);
        assert_eq!(cases[1].name(), "inner");
        assert_eq!(cases[1].labels(), ["Inner"]);
    }

    #[test]
    fn test_extract_without_tests_is_empty() {
        let cases = extract("class Util { static int twice(int x) { return 2 * x; } }", Framework::JUnit5);
        assert!(cases.is_empty());
    }

    #[test]
    fn test_relative_file_is_made_absolute() {
        let source = parse_source("class A { @Test void t() {} }").unwrap();
        let cases = JavaExtractor
            .extract(&source, Path::new("src/A.java"), Framework::JUnit4)
            .unwrap();
        assert!(cases[0].file().is_absolute());
        assert!(cases[0].file().ends_with("src/A.java"));
    }
}
