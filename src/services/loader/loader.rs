use crate::display::ContentArea;
use crate::io::{ContentFetcher, FetchError};
use crate::parser::html::escape_html;
use crate::parser::{Highlighter, compile_markdown_to_html};
use crate::services::loader::generation::RenderGeneration;
use crate::services::loader::render_cache::RenderCache;
use derive_more::Display;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

pub const LOADING_PLACEHOLDER: &str = r#"<div class="loader"></div>"#;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{source}")]
pub struct LoadError {
    pub path: String,
    pub source: FetchError,
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered,
    // a newer render was started while this one was loading
    Stale,
}

pub struct ContentLoader {
    fetcher: Box<dyn ContentFetcher>,
    highlighter: Arc<Highlighter>,
    load_error_prefix: String,
    // our in-memory cache, indexed by content path
    cache: RwLock<RenderCache>,
    // one gate per path, so concurrent loads of a path share a single fetch
    in_flight: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl ContentLoader {
    pub fn new(
        fetcher: Box<dyn ContentFetcher>,
        highlighter: Arc<Highlighter>,
        load_error_prefix: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            highlighter,
            load_error_prefix: load_error_prefix.into(),
            cache: RwLock::new(RenderCache::new()),
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    async fn cached(&self, path: &str) -> Option<String> {
        let cache_guard = self.cache.read().await;
        cache_guard.html_by_path.get(path).cloned()
    }

    async fn update_cache(&self, path: &str, html: String) {
        let mut cache_guard = self.cache.write().await;
        cache_guard.html_by_path.insert(path.to_string(), html);
    }

    async fn gate_for(&self, path: &str) -> Arc<Mutex<()>> {
        let mut gates = self.in_flight.lock().await;
        gates.entry(path.to_string()).or_default().clone()
    }

    pub async fn is_cached(&self, path: &str) -> bool {
        self.cache.read().await.html_by_path.contains_key(path)
    }

    pub async fn cached_paths(&self) -> Vec<String> {
        let cache_guard = self.cache.read().await;
        let mut paths: Vec<String> = cache_guard.html_by_path.keys().cloned().collect();
        paths.sort();
        paths
    }

    /// Fetches and renders `path`, or returns the cached render.
    /// Failures are returned to the caller and never cached.
    pub async fn try_load(&self, path: &str) -> Result<String, LoadError> {
        if let Some(html) = self.cached(path).await {
            return Ok(html);
        }

        let gate = self.gate_for(path).await;
        let _in_flight = gate.lock().await;

        // whoever held the gate before us may have filled the cache already
        if let Some(html) = self.cached(path).await {
            tracing::debug!("Loader: {} rendered while waiting, reusing it", path);
            return Ok(html);
        }

        tracing::debug!("Loader: fetching {}", path);
        let markdown = self.fetcher.fetch(path).await.map_err(|source| LoadError {
            path: path.to_string(),
            source,
        })?;

        let html = compile_markdown_to_html(&markdown, &self.highlighter);
        self.update_cache(path, html.clone()).await;

        Ok(html)
    }

    /// Like [`ContentLoader::try_load`], but a failure comes back as an inline
    /// error fragment instead of an error.
    pub async fn load_markdown(&self, path: &str) -> String {
        match self.try_load(path).await {
            Ok(html) => html,
            Err(e) => {
                tracing::error!("Loader: Error loading markdown {}: {}", path, e);
                self.error_fragment(&e)
            }
        }
    }

    pub fn error_fragment(&self, error: &LoadError) -> String {
        format!(
            r#"<div class="error">{}{}</div>"#,
            escape_html(&self.load_error_prefix),
            escape_html(&error.to_string())
        )
    }

    // shows the placeholder, loads, then swaps the page in unless a newer render took over
    pub async fn load_and_render(
        &self,
        path: &str,
        area: &dyn ContentArea,
        generation: &RenderGeneration,
    ) -> RenderOutcome {
        let ticket = generation.begin(|| area.set_html(LOADING_PLACEHOLDER));

        let html = self.load_markdown(path).await;

        let applied = generation.apply_if_current(ticket, || {
            area.set_html(&format!(r#"<div class="markdown-content">{}</div>"#, html));
            area.scroll_to_top();
            area.highlight_code_blocks(&self.highlighter);
        });

        if applied {
            RenderOutcome::Rendered
        } else {
            tracing::debug!("Loader: discarding stale render of {}", path);
            RenderOutcome::Stale
        }
    }
}
