//! Progress reporting seam.
//!
//! Orchestrators report batch progress through this trait; rendering (bars,
//! spinners, quiet mode) stays with the caller.

/// Receives batch progress events. All methods default to no-ops.
pub trait ProgressSink: Send + Sync {
    /// A batch of `total` items is starting.
    fn start(&self, _total: u64, _message: &str) {}

    /// One item was attempted.
    fn advance(&self, _message: &str) {}

    /// The batch finished without aggregate failure.
    fn finish_ok(&self, _message: &str) {}

    /// The batch finished with failures.
    fn finish_err(&self, _message: &str) {}
}

/// Discards all progress events.
pub struct NoProgress;

impl ProgressSink for NoProgress {}
