//! Error-report (telemetry) seam.
//!
//! The telemetry backend is an external collaborator; this is the seam
//! unexpected failures are forwarded through. Which failures qualify is
//! decided by the caller: validation failures (HTTP 400) are never
//! reported.

use std::sync::Mutex;

use gantry_profile_rest::Error;
use tracing::error;

/// Seam for the host's error-reporting subsystem.
pub trait ErrorReporter: Send + Sync {
    /// Forward an unexpected failure to telemetry.
    fn report(&self, error: &Error);
}

/// Default reporter: logs the failure through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, err: &Error) {
        error!(error = %err, status = ?err.status(), "unexpected failure reported");
    }
}

/// Reporter that buffers reported failures for later inspection.
#[derive(Debug, Default)]
pub struct BufferedReporter {
    reports: Mutex<Vec<String>>,
}

impl BufferedReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of reported failures.
    pub fn len(&self) -> usize {
        self.reports.lock().unwrap().len()
    }

    /// True when nothing has been reported.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Take all reported failure messages, clearing the buffer.
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.reports.lock().unwrap())
    }
}

impl ErrorReporter for BufferedReporter {
    fn report(&self, error: &Error) {
        self.reports.lock().unwrap().push(error.to_string());
    }
}
