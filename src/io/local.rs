use crate::io::{ContentFetcher, FetchError, resolve_under_root};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;

// reads content straight off the disk, for running the site without a separate file server
pub struct LocalContentFetcher {
    pub root_path: PathBuf,
}

impl LocalContentFetcher {
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
        }
    }
}

#[async_trait]
impl ContentFetcher for LocalContentFetcher {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let verified = resolve_under_root(&self.root_path, path)?;

        tokio::fs::read_to_string(&verified)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => FetchError::NotFound(path.to_string()),
                _ => FetchError::Transport(format!("{}: {}", verified.display(), e)),
            })
    }
}
