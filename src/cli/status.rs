//! Single-line stderr status display.

use std::cell::Cell;
use std::io::Write;

use vtfind::StatusDisplay;

/// Channel used by the CLI; it only ever shows one line.
pub const STDERR_CHANNEL: u32 = 0;

/// Overwrites one stderr line in place with `\r`, blanking it on clear.
#[derive(Default)]
pub struct StderrStatus {
    width: Cell<usize>,
}

impl StatusDisplay for StderrStatus {
    fn show(&self, _channel: u32, text: &str) {
        let line = format!("Scanning {}", text);
        let pad = self.width.get().saturating_sub(line.chars().count());
        let mut err = std::io::stderr().lock();
        // Status output is best-effort
        let _ = write!(err, "\r{}{}", line, " ".repeat(pad));
        let _ = err.flush();
        self.width.set(line.chars().count());
    }

    fn clear(&self, _channel: u32) {
        let width = self.width.replace(0);
        if width == 0 {
            return;
        }
        let mut err = std::io::stderr().lock();
        let _ = write!(err, "\r{}\r", " ".repeat(width));
        let _ = err.flush();
    }
}
