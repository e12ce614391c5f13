//! Request body serialization.

use serde::Serialize;

use crate::error::ExportResult;
use crate::framework::{Framework, TestCase};

/// Language tag sent with every request.
const LANGUAGE: &str = "java";

/// Serializes a batch of test cases into a request body.
pub trait PayloadBuilder: Send + Sync {
    /// Builds the body for `cases`, tagged with `framework`.
    fn build(&self, cases: &[TestCase], framework: Option<Framework>) -> ExportResult<String>;
}

#[derive(Serialize)]
struct LoadRequest<'a> {
    framework: Option<Framework>,
    language: &'static str,
    tests: &'a [TestCase],
}

/// Builds the JSON body accepted by the `/api/load` endpoint.
///
/// ```
/// use testomat_export::export::payload::{JsonPayloadBuilder, PayloadBuilder};
/// use testomat_export::framework::{Framework, TestCase};
///
/// let cases = [TestCase::new("adds", "/src/CalcTest.java").with_label("CalcTest")];
/// let body = JsonPayloadBuilder.build(&cases, Some(Framework::JUnit5))?;
/// assert_eq!(
///     body,
///     r#"{"framework":"junit5","language":"java","tests":[{"name":"adds","labels":["CalcTest"],"file":"/src/CalcTest.java"}]}"#
/// );
/// # Ok::<(), testomat_export::ExportError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPayloadBuilder;

impl PayloadBuilder for JsonPayloadBuilder {
    fn build(&self, cases: &[TestCase], framework: Option<Framework>) -> ExportResult<String> {
        let request = LoadRequest {
            framework,
            language: LANGUAGE,
            tests: cases,
        };
        Ok(serde_json::to_string(&request)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_tags_every_batch_with_framework() {
        let cases = vec![
            TestCase::new("a", "/x/ATest.java"),
            TestCase::new("b", "/x/ATest.java").with_label("slow"),
        ];
        let body = JsonPayloadBuilder
            .build(&cases, Some(Framework::TestNG))
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();

        assert_eq!(json["framework"], "testng");
        assert_eq!(json["language"], "java");
        assert_eq!(json["tests"].as_array().unwrap().len(), 2);
        assert_eq!(json["tests"][1]["labels"][0], "slow");
        assert_eq!(json["tests"][1]["file"], "/x/ATest.java");
    }

    #[test]
    fn test_build_without_framework_sends_null() {
        let body = JsonPayloadBuilder.build(&[], None).unwrap();
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(json["framework"].is_null());
        assert!(json["tests"].as_array().unwrap().is_empty());
    }
}
