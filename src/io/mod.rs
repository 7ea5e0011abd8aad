use async_trait::async_trait;
use derive_more::Display;
use std::path::{Component, Path, PathBuf};

pub mod http;
pub mod local;

pub use self::http::HttpContentFetcher;
pub use self::local::LocalContentFetcher;

/// Why a content fetch did not produce a body.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum FetchError {
    #[display("HTTP error! status: {_0}")]
    Status(u16),
    #[display("{_0}")]
    Transport(String),
    #[display("content not found: {_0}")]
    NotFound(String),
    #[display("path escapes content root: {_0}")]
    OutsideRoot(String),
}

impl std::error::Error for FetchError {}

// anything that can hand back the raw markdown for a route path
// implementations must be shareable between tasks
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn fetch(&self, path: &str) -> Result<String, FetchError>;
}

// turns a route path ("home.md", "/content/about.md") into a path below root
// rejects anything that would climb out of the root
pub fn resolve_under_root(root: &Path, path: &str) -> Result<PathBuf, FetchError> {
    let relative = Path::new(path.trim_start_matches('/'));
    let mut resolved = root.to_path_buf();

    for component in relative.components() {
        match component {
            Component::Normal(c) => resolved.push(c),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(FetchError::OutsideRoot(path.to_string()));
            }
        }
    }

    if resolved == root {
        return Err(FetchError::NotFound(path.to_string()));
    }

    Ok(resolved)
}
