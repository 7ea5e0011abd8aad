use crate::routing::RouteTable;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_LOAD_ERROR_PREFIX: &str = "خطا در بارگذاری محتوا: ";
pub const DEFAULT_NOT_FOUND_MESSAGE: &str = "صفحه مورد نظر یافت نشد";
pub const DEFAULT_UNTITLED_LABEL: &str = "بدون عنوان";

// where the markdown files come from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentSource {
    Http { base_url: String },
    Local { root: PathBuf },
}

// user facing strings, the site is written in persian so these default to it
#[derive(Clone, Debug)]
pub struct SiteMessages {
    pub load_error_prefix: String,
    pub not_found: String,
    pub untitled: String,
}

impl Default for SiteMessages {
    fn default() -> Self {
        Self {
            load_error_prefix: DEFAULT_LOAD_ERROR_PREFIX.to_string(),
            not_found: DEFAULT_NOT_FOUND_MESSAGE.to_string(),
            untitled: DEFAULT_UNTITLED_LABEL.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub content_source: ContentSource,
    pub frontend_path: PathBuf,
    pub routes_file: Option<PathBuf>,
    pub bind_addr: String,
    pub fetch_timeout: Duration,
    pub messages: SiteMessages,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        let content_source = match std::env::var("CONTENT_BASE_URL") {
            Ok(base_url) if !base_url.trim().is_empty() => ContentSource::Http { base_url },
            _ => ContentSource::Local {
                root: PathBuf::from(
                    std::env::var("CONTENT_DIR").unwrap_or_else(|_| "./content".to_string()),
                ),
            },
        };

        let frontend_path = PathBuf::from(
            std::env::var("FRONTEND_DIST_PATH").unwrap_or_else(|_| "./public".to_string()),
        );

        let routes_file = std::env::var("ROUTES_FILE").ok().map(PathBuf::from);

        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let fetch_timeout = std::env::var("FETCH_TIMEOUT_SECS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(30));

        let defaults = SiteMessages::default();
        let messages = SiteMessages {
            load_error_prefix: std::env::var("LOAD_ERROR_PREFIX")
                .unwrap_or(defaults.load_error_prefix),
            not_found: std::env::var("NOT_FOUND_MESSAGE").unwrap_or(defaults.not_found),
            untitled: std::env::var("UNTITLED_LABEL").unwrap_or(defaults.untitled),
        };

        Self {
            content_source,
            frontend_path,
            routes_file,
            bind_addr,
            fetch_timeout,
            messages,
        }
    }

    /// Loads the route table named by `ROUTES_FILE`, or the built-in table when unset.
    pub fn load_route_table(&self) -> Result<RouteTable> {
        let Some(path) = &self.routes_file else {
            return Ok(RouteTable::default_site());
        };

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read routes file {}", path.display()))?;

        RouteTable::from_json(&raw)
            .with_context(|| format!("Invalid routes file {}", path.display()))
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_source: ContentSource::Local {
                root: PathBuf::from("./content"),
            },
            frontend_path: PathBuf::from("./public"),
            routes_file: None,
            bind_addr: "0.0.0.0:3000".to_string(),
            fetch_timeout: Duration::from_secs(30),
            messages: SiteMessages::default(),
        }
    }
}
