// crates/ports/src/progress.rs

/// Receives scan progress.
///
/// `on_progress` is called once per classified file while the caller holds the
/// result lock, so `processed` increases by exactly one between calls.
pub trait ProgressSink: Send + Sync {
    fn on_progress(&self, processed: usize, total: usize);
    fn on_complete(&self, _total: usize) {}
}

/// Sink that discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_progress(&self, _processed: usize, _total: usize) {}
}
