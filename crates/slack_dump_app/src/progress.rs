use std::io::{self, Write};
use std::sync::Mutex;

use dump_logging::dump_debug;
use slack_dump_core::render_progress_bar;
use slack_dump_engine::{DumpEvent, ProgressSink};

/// Draws the download progress bar on one terminal line.
pub struct TerminalProgress<W: Write + Send> {
    out: Mutex<W>,
}

impl TerminalProgress<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalProgress<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn draw(&self, line: &str, terminator: &str) {
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        // A closed stdout must not abort the dump.
        let _ = write!(out, "{line}{terminator}").and_then(|_| out.flush());
    }
}

impl<W: Write + Send> ProgressSink for TerminalProgress<W> {
    fn emit(&self, event: DumpEvent) {
        match event {
            DumpEvent::Downloading { index, total } => {
                self.draw(&render_progress_bar(index, total), "\r");
            }
            DumpEvent::Finished { total } if total > 0 => {
                self.draw(&render_progress_bar(total, total), "\n");
            }
            DumpEvent::Saved { path, bytes, .. } => {
                dump_debug!("Saved {} bytes to {:?}", bytes, path);
            }
            DumpEvent::SearchPage { .. } | DumpEvent::Finished { .. } => {}
        }
    }
}
