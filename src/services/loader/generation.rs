use std::sync::{Mutex, MutexGuard};

/// Tags render requests so that a slow render finishing after a newer one
/// cannot overwrite the region.
#[derive(Debug, Default)]
pub struct RenderGeneration {
    current: Mutex<u64>,
}

impl RenderGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, u64> {
        self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Starts a new generation, making every earlier ticket stale.
    pub fn advance(&self) -> u64 {
        let mut current = self.lock();
        *current += 1;
        *current
    }

    /// Starts a new generation and runs `apply` before anyone else can start one,
    /// so the first write of a render can never land after a newer render's writes.
    pub fn begin<F: FnOnce()>(&self, apply: F) -> u64 {
        let mut current = self.lock();
        *current += 1;
        apply();
        *current
    }

    pub fn current(&self) -> u64 {
        *self.lock()
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        *self.lock() == ticket
    }

    // runs `apply` only while `ticket` is still current; no advance can interleave with it
    pub fn apply_if_current<F: FnOnce()>(&self, ticket: u64, apply: F) -> bool {
        let current = self.lock();
        if *current != ticket {
            return false;
        }
        apply();
        drop(current);
        true
    }
}
