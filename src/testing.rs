//! Recording doubles for pipeline tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::export::transport::{Transport, TransportError, TransportResult};
use crate::extract::FileExtractor;
use crate::framework::{ExtractError, ExtractResult, Framework, TestCase};
use crate::progress::{ProgressReporter, Spinner};

/// Records every request; optionally fails the n-th (1-based) call.
#[derive(Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<(String, String)>>,
    fail_on_call: Option<usize>,
    classified_failure: bool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails call `n` with a server rejection.
    pub fn rejecting_call(n: usize) -> Self {
        Self {
            fail_on_call: Some(n),
            classified_failure: true,
            ..Self::default()
        }
    }

    /// Fails call `n` with an unclassified network-style error.
    pub fn dropping_call(n: usize) -> Self {
        Self {
            fail_on_call: Some(n),
            classified_failure: false,
            ..Self::default()
        }
    }

    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of test records in each request body, in call order.
    pub fn batch_sizes(&self) -> Vec<usize> {
        self.requests()
            .iter()
            .map(|(_, body)| {
                let json: serde_json::Value = serde_json::from_str(body).unwrap();
                json["tests"].as_array().unwrap().len()
            })
            .collect()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, url: &str, body: String) -> TransportResult<()> {
        let call = {
            let mut requests = self.requests.lock().unwrap();
            requests.push((url.to_string(), body));
            requests.len()
        };
        if self.fail_on_call == Some(call) {
            return Err(if self.classified_failure {
                TransportError::Rejected {
                    status: 500,
                    body: "internal error".to_string(),
                }
            } else {
                TransportError::Other(anyhow::anyhow!("connection reset"))
            });
        }
        Ok(())
    }
}

/// Records spinner calls as strings.
#[derive(Default)]
pub struct RecordingSpinner {
    pub events: Mutex<Vec<String>>,
}

impl RecordingSpinner {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl Spinner for RecordingSpinner {
    fn start(&self) {
        self.events.lock().unwrap().push("start".to_string());
    }

    fn stop(&self) {
        self.events.lock().unwrap().push("stop".to_string());
    }

    fn stop_with_message(&self, message: &str) {
        self.events.lock().unwrap().push(format!("stop: {message}"));
    }
}

/// Records progress calls.
#[derive(Default)]
pub struct RecordingProgress {
    pub updates: Mutex<Vec<usize>>,
    pub finished: Mutex<usize>,
}

impl RecordingProgress {
    pub fn updates(&self) -> Vec<usize> {
        self.updates.lock().unwrap().clone()
    }

    pub fn finish_count(&self) -> usize {
        *self.finished.lock().unwrap()
    }
}

impl ProgressReporter for RecordingProgress {
    fn update(&self, processed: usize) {
        self.updates.lock().unwrap().push(processed);
    }

    fn finish(&self) {
        *self.finished.lock().unwrap() += 1;
    }
}

/// Scripted outcome for one file.
pub enum FileScript {
    Tests(Framework, usize),
    Empty,
    Fails,
}

/// Extractor that serves scripted outcomes per file name and counts
/// framework-only queries.
#[derive(Default)]
pub struct ScriptedExtractor {
    scripts: HashMap<PathBuf, FileScript>,
    pub framework_queries: Mutex<Vec<PathBuf>>,
}

impl ScriptedExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, file: &str, script: FileScript) -> Self {
        self.scripts.insert(PathBuf::from(file), script);
        self
    }

    pub fn framework_queries(&self) -> Vec<PathBuf> {
        self.framework_queries.lock().unwrap().clone()
    }

    fn failure(path: &Path) -> ExtractError {
        ExtractError::Io(std::io::Error::other(format!(
            "cannot read {}",
            path.display()
        )))
    }
}

impl FileExtractor for ScriptedExtractor {
    fn extract_file(&self, path: &Path) -> ExtractResult<Vec<TestCase>> {
        match self.scripts.get(path) {
            Some(FileScript::Tests(_, count)) => Ok((0..*count)
                .map(|i| TestCase::new(format!("test{i}"), path))
                .collect()),
            Some(FileScript::Empty) | None => Ok(Vec::new()),
            Some(FileScript::Fails) => Err(Self::failure(path)),
        }
    }

    fn detect_framework(&self, path: &Path) -> ExtractResult<Option<Framework>> {
        self.framework_queries
            .lock()
            .unwrap()
            .push(path.to_path_buf());
        match self.scripts.get(path) {
            Some(FileScript::Tests(framework, _)) => Ok(Some(*framework)),
            Some(FileScript::Empty) | None => Ok(None),
            Some(FileScript::Fails) => Err(Self::failure(path)),
        }
    }
}

/// Builds `count` test cases spread over a single fake file.
pub fn test_cases(count: usize) -> Vec<TestCase> {
    (0..count)
        .map(|i| TestCase::new(format!("test{i}"), "/project/BigTest.java"))
        .collect()
}
