use crate::parser::html::{extract_title, strip_tags};
use crate::services::loader::ContentLoader;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// Characters of context kept on each side of a match.
pub const EXCERPT_CONTEXT: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEntry {
    pub path: String,
    // plain text, lower-cased
    pub content: String,
    pub title: String,
}

impl SearchEntry {
    pub fn from_html(path: &str, html: &str, untitled: &str) -> Self {
        Self {
            path: path.to_string(),
            content: strip_tags(html).to_lowercase(),
            title: extract_title(html).unwrap_or_else(|| untitled.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub title: String,
    pub path: String,
    pub excerpt: String,
}

pub struct SearchIndex {
    entries: RwLock<Vec<SearchEntry>>,
    ready: AtomicBool,
    untitled: String,
}

impl SearchIndex {
    pub fn new(untitled: impl Into<String>) -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            ready: AtomicBool::new(false),
            untitled: untitled.into(),
        }
    }

    /// Loads every path through the loader and indexes it. A path that fails
    /// to load is logged and left out; the rest are still indexed.
    /// Returns how many documents made it into the index.
    pub async fn build<'a, I>(&self, loader: &ContentLoader, paths: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut entries = Vec::new();
        let mut attempted = 0;

        for path in paths {
            attempted += 1;
            match loader.try_load(path).await {
                Ok(html) => entries.push(SearchEntry::from_html(path, &html, &self.untitled)),
                Err(e) => tracing::warn!("Search: Error indexing file {}: {}", path, e),
            }
        }

        let indexed = entries.len();
        *self.entries.write().await = entries;
        self.ready.store(true, Ordering::SeqCst);

        tracing::info!("Search: indexed {} of {} documents", indexed, attempted);
        indexed
    }

    // case-insensitive substring match, in index order, no ranking
    pub async fn search(&self, query: &str) -> Vec<SearchResult> {
        let lower_query = query.to_lowercase();
        let entries = self.entries.read().await;

        entries
            .iter()
            .filter_map(|entry| {
                excerpt(&entry.content, &lower_query).map(|excerpt| SearchResult {
                    title: entry.title.clone(),
                    path: entry.path.clone(),
                    excerpt,
                })
            })
            .collect()
    }

    pub async fn entries(&self) -> Vec<SearchEntry> {
        self.entries.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }
}

/// The text around the first occurrence of `query`, wrapped in `...` markers.
/// Positions count characters, and the window is clipped to the text.
/// `None` when `query` does not occur.
pub fn excerpt(content: &str, query: &str) -> Option<String> {
    let byte_index = content.find(query)?;

    let match_start = content[..byte_index].chars().count();
    let match_len = query.chars().count();
    let total = content.chars().count();

    let start = match_start.saturating_sub(EXCERPT_CONTEXT);
    let end = (match_start + match_len + EXCERPT_CONTEXT).min(total);

    let window: String = content.chars().skip(start).take(end - start).collect();
    Some(format!("...{}...", window))
}
