use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum RouteTableError {
    #[display("duplicate route key '{_0}'")]
    DuplicateKey(String),
    #[display("route key must not be empty")]
    EmptyKey,
    #[display("route '{_0}' has an empty path")]
    EmptyPath(String),
    #[display("invalid routes json: {_0}")]
    Json(String),
}

impl std::error::Error for RouteTableError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub key: String,
    pub path: String,
}

// routes files may be a list (keeps order) or a plain object (ordered by key)
#[derive(Deserialize)]
#[serde(untagged)]
enum RoutesFile {
    List(Vec<Route>),
    Map(BTreeMap<String, String>),
}

/// Symbolic page keys mapped to content paths. Fixed once built.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    index: HashMap<String, usize>,
}

impl RouteTable {
    pub fn new<I, K, P>(entries: I) -> Result<Self, RouteTableError>
    where
        I: IntoIterator<Item = (K, P)>,
        K: Into<String>,
        P: Into<String>,
    {
        let mut routes = Vec::new();
        let mut index = HashMap::new();

        for (key, path) in entries {
            let key = key.into();
            let path = path.into();

            if key.is_empty() {
                return Err(RouteTableError::EmptyKey);
            }
            if path.is_empty() {
                return Err(RouteTableError::EmptyPath(key));
            }
            if index.contains_key(&key) {
                return Err(RouteTableError::DuplicateKey(key));
            }

            index.insert(key.clone(), routes.len());
            routes.push(Route { key, path });
        }

        Ok(Self { routes, index })
    }

    /// The pages of the mapathon site.
    pub fn default_site() -> Self {
        let entries = [
            ("home", "home.md"),
            ("what-is-osm", "what-is-osm.md"),
            ("tools", "/content/getting-started/tools.md"),
            ("first-edit", "/content/getting-started/first-edit.md"),
            ("organize", "/content/guides/organizing-mapathon.md"),
            ("community", "/content/guides/community-building.md"),
            ("quality", "/content/guides/quality-control.md"),
            ("events", "/content/events/upcoming.md"),
            ("resources", "/content/resources/downloads.md"),
            ("about", "/content/about.md"),
        ];

        let routes: Vec<Route> = entries
            .iter()
            .map(|(key, path)| Route {
                key: key.to_string(),
                path: path.to_string(),
            })
            .collect();
        let index = routes
            .iter()
            .enumerate()
            .map(|(i, route)| (route.key.clone(), i))
            .collect();

        Self { routes, index }
    }

    pub fn from_json(raw: &str) -> Result<Self, RouteTableError> {
        let parsed: RoutesFile =
            serde_json::from_str(raw).map_err(|e| RouteTableError::Json(e.to_string()))?;

        match parsed {
            RoutesFile::List(routes) => Self::new(routes.into_iter().map(|r| (r.key, r.path))),
            RoutesFile::Map(routes) => Self::new(routes),
        }
    }

    pub fn resolve(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&i| self.routes[i].path.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|route| route.path.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|route| route.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
