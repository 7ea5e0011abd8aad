use crate::config::{ContentSource, SiteConfig};
use crate::io::{ContentFetcher, HttpContentFetcher, LocalContentFetcher};
use crate::parser::Highlighter;
use crate::routing::RouteTable;
use crate::services::{ContentLoader, SearchIndex};
use anyhow::Result;
use std::sync::Arc;
use tower_http::services::ServeDir;

pub mod config;
pub mod display;
pub mod features;
pub mod io;
pub mod parser;
pub mod routing;
pub mod services;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
    pub loader: Arc<ContentLoader>,
    pub search: Arc<SearchIndex>,
    pub config: Arc<SiteConfig>,
}

impl AppState {
    pub fn new(config: SiteConfig, routes: RouteTable, fetcher: Box<dyn ContentFetcher>) -> Self {
        let loader = ContentLoader::new(
            fetcher,
            Arc::new(Highlighter::new()),
            config.messages.load_error_prefix.clone(),
        );
        let search = SearchIndex::new(config.messages.untitled.clone());

        Self {
            routes: Arc::new(routes),
            loader: Arc::new(loader),
            search: Arc::new(search),
            config: Arc::new(config),
        }
    }

    pub fn from_config(config: SiteConfig) -> Result<Self> {
        let routes = config.load_route_table()?;

        let fetcher: Box<dyn ContentFetcher> = match &config.content_source {
            ContentSource::Http { base_url } => Box::new(HttpContentFetcher::new(
                base_url.clone(),
                config.fetch_timeout,
            )?),
            ContentSource::Local { root } => Box::new(LocalContentFetcher::new(root.clone())),
        };

        Ok(Self::new(config, routes, fetcher))
    }

    // the index is built once, off the request path, through the shared loader
    pub fn spawn_search_index_build(&self) -> tokio::task::JoinHandle<usize> {
        let search = self.search.clone();
        let loader = self.loader.clone();
        let routes = self.routes.clone();

        tokio::spawn(async move { search.build(&loader, routes.paths()).await })
    }
}

/// The api under `/api`, with the static frontend as fallback.
pub fn app(state: AppState) -> axum::Router {
    let frontend = ServeDir::new(&state.config.frontend_path);

    axum::Router::new()
        .nest("/api", features::site::site_router())
        .fallback_service(frontend)
        .with_state(state)
}
