use crate::parser::Highlighter;
use std::sync::{Mutex, MutexGuard};

/// The region the loader renders pages into.
///
/// The core only ever writes to it; `html` exists so code blocks in the live
/// region can be found and highlighted after a render.
pub trait ContentArea: Send + Sync {
    fn set_html(&self, html: &str);
    fn html(&self) -> String;
    fn scroll_to_top(&self);

    fn highlight_code_blocks(&self, highlighter: &Highlighter) {
        let current = self.html();
        let highlighted = highlighter.highlight_code_blocks(&current);
        if highlighted != current {
            self.set_html(&highlighted);
        }
    }
}

#[derive(Debug, Default, Clone)]
struct AreaState {
    html: String,
    scroll_top: u32,
    writes: usize,
}

// in-memory region, used by the http api to capture a render and by the tests
#[derive(Debug, Default)]
pub struct MemoryContentArea {
    state: Mutex<AreaState>,
}

impl MemoryContentArea {
    pub fn new() -> Self {
        Self::default()
    }

    // a poisoned lock only means a writer panicked mid-write, the string is still usable
    fn state(&self) -> MutexGuard<'_, AreaState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn scroll_to(&self, offset: u32) {
        self.state().scroll_top = offset;
    }

    pub fn scroll_top(&self) -> u32 {
        self.state().scroll_top
    }

    pub fn write_count(&self) -> usize {
        self.state().writes
    }
}

impl ContentArea for MemoryContentArea {
    fn set_html(&self, html: &str) {
        let mut state = self.state();
        state.html = html.to_string();
        state.writes += 1;
    }

    fn html(&self) -> String {
        self.state().html.clone()
    }

    fn scroll_to_top(&self) {
        self.state().scroll_top = 0;
    }
}
