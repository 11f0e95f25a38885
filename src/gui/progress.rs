// src/gui/progress.rs
use std::sync::{Arc, Mutex};
use crate::progress::Progress;

/// Writes load progress into the shared status line.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    failed: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, failed: 0, total: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        let text = msg.into();
        *self.status.lock().unwrap_or_else(|e| e.into_inner()) = text;
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set_status(format!("Loading {total} sources…"));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, label: &str) {
        self.done += 1;
        self.set_status(format!("Loaded {label} ({}/{})", self.done + self.failed, self.total));
    }
    fn item_failed(&mut self, label: &str, _err: &str) {
        self.failed += 1;
        self.set_status(format!("Failed {label} ({}/{})", self.done + self.failed, self.total));
    }
    fn finish(&mut self) {
        // The data layer follows up with a `log` summary once indexes are built.
        self.set_status(format!("Fetched {} of {} sources, indexing…", self.done, self.total));
    }
}
