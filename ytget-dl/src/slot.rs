//! Single-slot completion cell.
//!
//! The engine may report `finished` more than once per invocation (it can
//! process several underlying files for one logical download). Only the first
//! report matters for the final status line, so the slot is set-once: the
//! first write wins and every later write is discarded. `OnceLock` keeps that
//! rule intact even if the engine fires hooks from worker threads.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Set-once cell capturing the first finished file path.
#[derive(Debug, Default)]
pub struct CompletionSlot {
    inner: OnceLock<PathBuf>,
}

impl CompletionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished file path. Returns whether this call filled the slot.
    pub fn record(&self, path: PathBuf) -> bool {
        self.inner.set(path).is_ok()
    }

    /// Path recorded by the first finished report, if any.
    pub fn get(&self) -> Option<&Path> {
        self.inner.get().map(PathBuf::as_path)
    }
}
