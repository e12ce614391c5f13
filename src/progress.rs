//! Terminal progress feedback.
//!
//! Two collaborators report progress during a run:
//!
//! - [`ProgressReporter`]: determinate progress while source files are processed
//! - [`Spinner`]: indeterminate indicator while test data is being sent
//!
//! Both are synchronous and side-effect only. [`NoProgress`] and [`NoSpinner`]
//! are used when nothing should be rendered (tests, `--format json`, piped
//! output).

use std::sync::Mutex;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Receives per-file processing progress.
pub trait ProgressReporter: Send + Sync {
    /// Reports that `processed` files have been handled so far.
    fn update(&self, processed: usize);

    /// Signals that every file has been handled.
    fn finish(&self);
}

/// A reporter that renders nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn update(&self, _processed: usize) {}
    fn finish(&self) {}
}

/// Progress bar over a known number of files.
pub struct FileProgressBar {
    bar: ProgressBar,
}

impl FileProgressBar {
    /// Creates a progress bar for `total` files.
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} Processing files [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
        {
            bar.set_style(style.progress_chars("#>-"));
        }
        Self { bar }
    }
}

impl ProgressReporter for FileProgressBar {
    fn update(&self, processed: usize) {
        self.bar.set_position(processed as u64);
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

/// Indeterminate indicator shown while a request is in flight.
pub trait Spinner: Send + Sync {
    /// Starts rendering.
    fn start(&self);

    /// Stops rendering without a message.
    fn stop(&self);

    /// Stops rendering and prints `message`.
    fn stop_with_message(&self, message: &str);
}

/// A spinner that renders nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSpinner;

impl Spinner for NoSpinner {
    fn start(&self) {}
    fn stop(&self) {}
    fn stop_with_message(&self, _message: &str) {}
}

/// Console spinner with a fixed status message.
pub struct ConsoleSpinner {
    message: String,
    active: Mutex<Option<ProgressBar>>,
}

impl ConsoleSpinner {
    /// Creates a spinner that shows `message` while running.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            active: Mutex::new(None),
        }
    }

    fn take(&self) -> Option<ProgressBar> {
        self.active.lock().ok().and_then(|mut guard| guard.take())
    }
}

impl Default for ConsoleSpinner {
    fn default() -> Self {
        Self::new("Sending test data to server...")
    }
}

impl Spinner for ConsoleSpinner {
    fn start(&self) {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(self.message.clone());
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut guard) = self.active.lock() {
            if let Some(previous) = guard.replace(pb) {
                previous.finish_and_clear();
            }
        }
    }

    fn stop(&self) {
        if let Some(pb) = self.take() {
            pb.finish_and_clear();
        }
    }

    fn stop_with_message(&self, message: &str) {
        if let Some(pb) = self.take() {
            pb.finish_and_clear();
        }
        println!("{}", console::style(message).green());
    }
}
