use crate::display::ContentArea;
use crate::parser::html::escape_html;
use crate::routing::location::Location;
use crate::routing::nav::NavLinks;
use crate::routing::table::RouteTable;
use crate::services::loader::{ContentLoader, RenderGeneration, RenderOutcome};
use std::sync::Arc;

pub const DEFAULT_ROUTE: &str = "home";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    Rendered { key: String, path: String },
    // superseded by a newer navigation before the page arrived
    Stale { key: String, path: String },
    NotFound { key: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The link pointed into the document; default handling was prevented.
    Navigated(RouteOutcome),
    PassThrough,
}

/// Keeps the content area in step with the location fragment.
///
/// Initial load, link clicks and back/forward all end up in
/// [`HashRouter::handle_route`], so there is exactly one way a page gets shown.
pub struct HashRouter {
    routes: Arc<RouteTable>,
    loader: Arc<ContentLoader>,
    area: Arc<dyn ContentArea>,
    location: Location,
    nav: NavLinks,
    generation: RenderGeneration,
    not_found_message: String,
}

impl HashRouter {
    pub fn new(
        routes: Arc<RouteTable>,
        loader: Arc<ContentLoader>,
        area: Arc<dyn ContentArea>,
        location: Location,
        nav: NavLinks,
        not_found_message: impl Into<String>,
    ) -> Self {
        Self {
            routes,
            loader,
            area,
            location,
            nav,
            generation: RenderGeneration::new(),
            not_found_message: not_found_message.into(),
        }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn nav(&self) -> &NavLinks {
        &self.nav
    }

    pub fn area(&self) -> &dyn ContentArea {
        self.area.as_ref()
    }

    pub fn current_key(&self) -> String {
        let fragment = self.location.fragment();
        if fragment.is_empty() {
            DEFAULT_ROUTE.to_string()
        } else {
            fragment
        }
    }

    // initial load
    pub async fn start(&self) -> RouteOutcome {
        self.handle_route().await
    }

    pub async fn handle_route(&self) -> RouteOutcome {
        let key = self.current_key();

        let Some(path) = self.routes.resolve(&key).map(str::to_string) else {
            tracing::info!("Router: no route for '{}'", key);
            self.show_not_found();
            return RouteOutcome::NotFound { key };
        };

        self.nav.update_active(&key);

        match self
            .loader
            .load_and_render(&path, self.area.as_ref(), &self.generation)
            .await
        {
            RenderOutcome::Rendered => RouteOutcome::Rendered { key, path },
            RenderOutcome::Stale => RouteOutcome::Stale { key, path },
        }
    }

    // also invalidates any render still in flight, it must not replace this message
    fn show_not_found(&self) {
        let message = format!(
            r#"<div class="error">{}</div>"#,
            escape_html(&self.not_found_message)
        );
        self.generation.begin(|| self.area.set_html(&message));
    }

    /// Sets the fragment, then resolves it. Navigating to the page already
    /// shown renders it again.
    pub async fn navigate(&self, key: &str) -> RouteOutcome {
        self.location.set_fragment(key);
        self.handle_route().await
    }

    pub async fn handle_link_click(&self, href: &str) -> ClickOutcome {
        match href.strip_prefix('#') {
            Some(key) => ClickOutcome::Navigated(self.navigate(key).await),
            None => ClickOutcome::PassThrough,
        }
    }

    pub async fn back(&self) -> Option<RouteOutcome> {
        if !self.location.back() {
            return None;
        }
        Some(self.handle_route().await)
    }

    pub async fn forward(&self) -> Option<RouteOutcome> {
        if !self.location.forward() {
            return None;
        }
        Some(self.handle_route().await)
    }
}
