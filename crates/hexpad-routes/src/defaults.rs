use url::Url;

use crate::error::RouteError;
use crate::route::ProxyRoute;
use crate::table::RouteTable;

/// Backend origin the dev server proxies to when none is configured.
pub const DEFAULT_DEV_ORIGIN: &str = "http://localhost:3334";

/// Prefixes forwarded to the backend over plain HTTP.
const HTTP_PREFIXES: [&str; 8] = [
    "/user",
    "/game",
    "/map",
    "/state",
    "/Indiana-Jones-PNG-HD-Image.png",
    "/heart.png",
    "/snake.png",
    "/character.png",
];

/// Prefixes forwarded to the backend as websocket upgrades.
const WS_PREFIXES: [&str; 1] = ["/chat"];

impl RouteTable {
    /// The stock dev-server table pointed at `origin`.
    ///
    /// HTTP routes and websocket routes share the origin's host and port.
    /// The scheme follows the origin's security: `http`/`ws` for a plain
    /// origin, `https`/`wss` for a secure one, whichever of the pair was given.
    pub fn dev_defaults(origin: &str) -> Result<Self, RouteError> {
        let base = ProxyRoute::new(HTTP_PREFIXES[0], origin)?.target().clone();
        let secure = matches!(base.scheme(), "https" | "wss");
        let http = with_scheme(&base, if secure { "https" } else { "http" }, HTTP_PREFIXES[0])?;
        let ws = with_scheme(&base, if secure { "wss" } else { "ws" }, WS_PREFIXES[0])?;

        let mut routes = Vec::with_capacity(HTTP_PREFIXES.len() + WS_PREFIXES.len());
        for p in HTTP_PREFIXES {
            routes.push(ProxyRoute::from_url(p.to_string(), http.clone())?);
        }
        for p in WS_PREFIXES {
            routes.push(ProxyRoute::from_url(p.to_string(), ws.clone())?);
        }
        RouteTable::new(routes)
    }
}

fn with_scheme(origin: &Url, scheme: &str, prefix: &str) -> Result<Url, RouteError> {
    let mut url = origin.clone();
    url.set_scheme(scheme)
        .map_err(|()| RouteError::UnsupportedScheme {
            prefix: prefix.to_string(),
            scheme: scheme.to_string(),
        })?;
    Ok(url)
}
