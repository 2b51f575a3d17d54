// src/progress.rs
use code_stats_ports::progress::ProgressSink;

const REPORT_EVERY: usize = 100;

/// Prints `[n/total] Processing...` to stderr every 100 files.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleProgress;

impl ConsoleProgress {
    fn should_report(processed: usize) -> bool {
        processed % REPORT_EVERY == 0
    }
}

impl ProgressSink for ConsoleProgress {
    fn on_progress(&self, processed: usize, total: usize) {
        if Self::should_report(processed) {
            eprint!("\r[{processed}/{total}] Processing...");
        }
    }

    fn on_complete(&self, total: usize) {
        eprintln!("\r[{total}/{total}] Processing... done");
    }
}
