use url::Url;

use crate::error::RouteError;

pub(crate) const SUPPORTED_SCHEMES: [&str; 4] = ["http", "https", "ws", "wss"];

/// One prefix-to-origin mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyRoute {
    prefix: String,
    target: Url,
}

impl ProxyRoute {
    /// Build a route, checking the prefix and that `target` is a bare origin
    /// with a supported scheme.
    pub fn new(prefix: impl Into<String>, target: &str) -> Result<Self, RouteError> {
        let prefix = prefix.into();
        if !prefix.starts_with('/') {
            return Err(RouteError::InvalidPrefix { prefix });
        }

        let url = Url::parse(target).map_err(|source| RouteError::InvalidTarget {
            prefix: prefix.clone(),
            target: target.to_string(),
            source,
        })?;

        Self::from_url(prefix, url)
    }

    pub(crate) fn from_url(prefix: String, target: Url) -> Result<Self, RouteError> {
        if !SUPPORTED_SCHEMES.contains(&target.scheme()) {
            return Err(RouteError::UnsupportedScheme {
                prefix,
                scheme: target.scheme().to_string(),
            });
        }

        let bare = target.host().is_some()
            && target.path() == "/"
            && target.query().is_none()
            && target.fragment().is_none()
            && target.username().is_empty()
            && target.password().is_none();
        if !bare {
            return Err(RouteError::NotAnOrigin {
                prefix,
                target: target.to_string(),
            });
        }

        Ok(Self { prefix, target })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn target(&self) -> &Url {
        &self.target
    }

    /// Target as `scheme://host[:port]`, without the trailing slash.
    pub fn origin(&self) -> String {
        self.target.origin().ascii_serialization()
    }

    pub fn is_websocket(&self) -> bool {
        matches!(self.target.scheme(), "ws" | "wss")
    }

    /// True when a request for `path` would be sent through this route.
    pub fn matches(&self, path: &str) -> bool {
        path.starts_with(&self.prefix)
    }

    /// The URL a request for `path` is forwarded to. The full path (and any
    /// query string) is kept; the prefix is not stripped. The host always
    /// stays the target's, even for paths like `//other.host/`.
    ///
    /// Returns `None` for paths that URL normalization would rewrite (dot
    /// segments, backslashes, tabs or newlines), since the rewritten path may
    /// belong to another route.
    pub fn forward_url(&self, path: &str) -> Option<Url> {
        let (p, query) = match path.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (path, None),
        };

        if !is_verbatim_path(p) {
            tracing::debug!(path, prefix = %self.prefix, "path would be normalized");
            return None;
        }

        let mut url = self.target.clone();
        url.set_path(p);
        url.set_query(query);
        Some(url)
    }
}

/// True when `Url::set_path` keeps `path` as written (modulo percent-encoding).
fn is_verbatim_path(path: &str) -> bool {
    if path.contains(['\\', '\t', '\n', '\r']) {
        return false;
    }
    !path.split('/').any(is_dot_segment)
}

fn is_dot_segment(segment: &str) -> bool {
    let s = segment.to_ascii_lowercase().replace("%2e", ".");
    s == "." || s == ".."
}
