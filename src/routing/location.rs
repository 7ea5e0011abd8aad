use std::sync::{Mutex, MutexGuard};

#[derive(Debug)]
struct History {
    entries: Vec<String>,
    position: usize,
}

/// The address bar fragment together with its back/forward history.
#[derive(Debug)]
pub struct Location {
    history: Mutex<History>,
}

// "#tools" and "tools" are the same fragment
fn normalize(fragment: &str) -> String {
    fragment.strip_prefix('#').unwrap_or(fragment).to_string()
}

impl Location {
    pub fn new(initial_fragment: &str) -> Self {
        Self {
            history: Mutex::new(History {
                entries: vec![normalize(initial_fragment)],
                position: 0,
            }),
        }
    }

    fn history(&self) -> MutexGuard<'_, History> {
        self.history.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn fragment(&self) -> String {
        let history = self.history();
        history.entries[history.position].clone()
    }

    /// Sets the fragment. A new history entry is only pushed when the fragment
    /// actually changes; forward entries are dropped as a browser would.
    pub fn set_fragment(&self, fragment: &str) {
        let fragment = normalize(fragment);
        let mut history = self.history();

        if history.entries[history.position] == fragment {
            return;
        }

        let keep = history.position + 1;
        history.entries.truncate(keep);
        history.entries.push(fragment);
        history.position += 1;
    }

    pub fn back(&self) -> bool {
        let mut history = self.history();
        if history.position == 0 {
            return false;
        }
        history.position -= 1;
        true
    }

    pub fn forward(&self) -> bool {
        let mut history = self.history();
        if history.position + 1 >= history.entries.len() {
            return false;
        }
        history.position += 1;
        true
    }

    pub fn history_len(&self) -> usize {
        self.history().entries.len()
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new("")
    }
}
