use crate::routing::RouteOutcome;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct JsonPage {
    pub key: String,
    pub found: bool,
    pub path: Option<String>,
    pub active_link: Option<String>,
    pub html: String,
}

impl JsonPage {
    pub fn from_outcome(outcome: RouteOutcome, active_link: Option<String>, html: String) -> Self {
        let (key, path) = match outcome {
            RouteOutcome::Rendered { key, path } | RouteOutcome::Stale { key, path } => {
                (key, Some(path))
            }
            RouteOutcome::NotFound { key } => (key, None),
        };

        Self {
            found: path.is_some(),
            key,
            path,
            active_link,
            html,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct SearchParams {
    pub q: Option<String>,
}
