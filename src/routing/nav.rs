use crate::routing::table::RouteTable;
use serde::Serialize;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub href: String,
    pub active: bool,
}

// the navigation menu links and which of them is highlighted
#[derive(Debug, Default)]
pub struct NavLinks {
    links: Mutex<Vec<NavLink>>,
}

impl NavLinks {
    pub fn new<I, S>(hrefs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let links = hrefs
            .into_iter()
            .map(|href| NavLink {
                href: href.into(),
                active: false,
            })
            .collect();

        Self {
            links: Mutex::new(links),
        }
    }

    // one "#key" link per route
    pub fn from_route_table(routes: &RouteTable) -> Self {
        Self::new(routes.keys().map(|key| format!("#{}", key)))
    }

    fn links(&self) -> MutexGuard<'_, Vec<NavLink>> {
        self.links.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Clears every highlight, then highlights the first link pointing at `key`, if any.
    pub fn update_active(&self, key: &str) {
        let target = format!("#{}", key);
        let mut links = self.links();

        for link in links.iter_mut() {
            link.active = false;
        }

        if let Some(link) = links.iter_mut().find(|link| link.href == target) {
            link.active = true;
        }
    }

    pub fn active_hrefs(&self) -> Vec<String> {
        self.links()
            .iter()
            .filter(|link| link.active)
            .map(|link| link.href.clone())
            .collect()
    }

    pub fn active_key(&self) -> Option<String> {
        self.links()
            .iter()
            .find(|link| link.active)
            .map(|link| link.href.trim_start_matches('#').to_string())
    }

    pub fn snapshot(&self) -> Vec<NavLink> {
        self.links().clone()
    }
}
