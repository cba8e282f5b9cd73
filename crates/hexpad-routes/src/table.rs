use std::collections::BTreeSet;
use std::path::Path;

use url::Url;

use crate::config::RouteConfig;
use crate::error::RouteError;
use crate::route::ProxyRoute;

/// An immutable set of proxy routes, kept sorted by prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<ProxyRoute>,
}

impl RouteTable {
    /// Build a table from already-validated routes. Duplicate prefixes are
    /// rejected.
    pub fn new(mut routes: Vec<ProxyRoute>) -> Result<Self, RouteError> {
        {
            let mut seen = BTreeSet::new();
            for r in &routes {
                if !seen.insert(r.prefix()) {
                    return Err(RouteError::DuplicatePrefix {
                        prefix: r.prefix().to_string(),
                    });
                }
            }
        }

        routes.sort_by(|a, b| a.prefix().cmp(b.prefix()));
        Ok(Self { routes })
    }

    /// Parse a route config document (`{"proxy": {...}}`).
    pub fn from_json_str(s: &str) -> Result<Self, RouteError> {
        let cfg: RouteConfig = serde_json::from_str(s)?;
        cfg.into_table()
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RouteError> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|source| RouteError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let table = Self::from_json_str(&s)?;
        tracing::debug!(path = %path.display(), routes = table.len(), "loaded route table");
        Ok(table)
    }

    pub fn routes(&self) -> &[ProxyRoute] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Find the route for `path`. When several prefixes match, the longest
    /// one wins.
    pub fn resolve(&self, path: &str) -> Option<&ProxyRoute> {
        let hit = self
            .routes
            .iter()
            .filter(|r| r.matches(path))
            .max_by_key(|r| r.prefix().len());

        match hit {
            Some(r) => tracing::debug!(path, prefix = r.prefix(), "route matched"),
            None => tracing::debug!(path, "no route matched"),
        }
        hit
    }

    /// Where a request for `path` would be forwarded. `None` when no route
    /// matches or the matched route refuses the path.
    pub fn forward_url(&self, path: &str) -> Option<Url> {
        self.resolve(path)?.forward_url(path)
    }

    /// Back to the on-disk config shape.
    pub fn to_config(&self) -> RouteConfig {
        RouteConfig {
            proxy: self
                .routes
                .iter()
                .map(|r| (r.prefix().to_string(), r.origin()))
                .collect(),
        }
    }
}
