//! Console status reporting.
//!
//! Phases report through this seam so the generation logic stays free
//! of terminal concerns.

/// Receiver for user-facing status events.
pub trait Reporter {
    /// Section header, e.g. "Checking files and directories".
    fn header(&self, text: &str);
    /// Completed step.
    fn success(&self, text: &str);
    /// Failed step. Emitted before the corresponding error propagates.
    fn error(&self, text: &str);
    /// Per-definition progress within one group, emitted before the
    /// transform starts. `index` is 1-based.
    fn progress(&self, section: &str, index: usize, total: usize, name: &str);
}

/// Writes status lines to stdout/stderr in the classic check-mark style.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn header(&self, text: &str) {
        println!();
        println!("{text}");
    }

    fn success(&self, text: &str) {
        println!(" \u{2714} {text}");
    }

    fn error(&self, text: &str) {
        eprintln!(" \u{2717} {text}");
    }

    fn progress(&self, section: &str, index: usize, total: usize, name: &str) {
        println!("{section} [{index}/{total}] {name}");
    }
}
