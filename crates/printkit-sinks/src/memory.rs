//! In-memory sink for testing.

use std::fmt::{self, Write as _};
use std::io;
use std::sync::{Arc, RwLock};

use printkit_core::{PrintResult, Sink};
use tracing::warn;

/// In-memory sink for testing.
///
/// Clonable: clones share the same buffer, so a test can hand one clone to
/// a print call (which borrows it mutably) and inspect the other afterwards.
/// Flushes are counted rather than having any effect.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    inner: Arc<RwLock<MemorySinkInner>>,
}

#[derive(Debug, Default)]
struct MemorySinkInner {
    contents: String,
    flushes: usize,
}

impl MemorySink {
    /// Create a new empty memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        match self.inner.read() {
            Ok(inner) => inner.contents.clone(),
            Err(poisoned) => {
                warn!("memory sink lock poisoned; reading anyway");
                poisoned.into_inner().contents.clone()
            }
        }
    }

    /// How many times a flush was performed.
    pub fn flush_count(&self) -> usize {
        match self.inner.read() {
            Ok(inner) => inner.flushes,
            Err(poisoned) => poisoned.into_inner().flushes,
        }
    }

    /// Clear contents and the flush counter.
    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.contents.clear();
            inner.flushes = 0;
        }
    }
}

impl Sink for MemorySink {
    fn write_value(&mut self, value: &dyn fmt::Display) -> PrintResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| io::Error::other("memory sink lock poisoned"))?;
        write!(inner.contents, "{value}")?;
        Ok(())
    }

    fn flush(&mut self) -> PrintResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| io::Error::other("memory sink lock poisoned"))?;
        inner.flushes += 1;
        Ok(())
    }
}
