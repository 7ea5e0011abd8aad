use std::collections::HashMap;

// rendered html by content path, only successful renders ever land here
// paths are static and few, so nothing is ever evicted
pub struct RenderCache {
    pub html_by_path: HashMap<String, String>,
}

impl RenderCache {
    pub fn new() -> Self {
        Self {
            html_by_path: HashMap::new(),
        }
    }
}

impl Default for RenderCache {
    fn default() -> Self {
        Self::new()
    }
}
