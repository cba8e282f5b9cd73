use std::fmt;

/// Errors raised while building or loading a route table.
#[derive(Debug)]
pub enum RouteError {
    /// Prefix does not start with `/`.
    InvalidPrefix { prefix: String },
    /// Target is not a parseable absolute URL.
    InvalidTarget {
        prefix: String,
        target: String,
        source: url::ParseError,
    },
    /// Target scheme is not one of http, https, ws, wss.
    UnsupportedScheme { prefix: String, scheme: String },
    /// Target has no host, or carries a path, query or fragment.
    NotAnOrigin { prefix: String, target: String },
    /// Two routes share the same prefix.
    DuplicatePrefix { prefix: String },
    /// Config is not valid JSON or does not have the expected shape.
    Json(serde_json::Error),
    /// Config file could not be read.
    Io {
        path: String,
        source: std::io::Error,
    },
}

impl RouteError {
    /// Stable, machine-readable code for this error.
    pub const fn code(&self) -> &'static str {
        match self {
            RouteError::InvalidPrefix { .. } => "invalid_prefix",
            RouteError::InvalidTarget { .. } => "invalid_target",
            RouteError::UnsupportedScheme { .. } => "unsupported_scheme",
            RouteError::NotAnOrigin { .. } => "not_an_origin",
            RouteError::DuplicatePrefix { .. } => "duplicate_prefix",
            RouteError::Json(_) => "json",
            RouteError::Io { .. } => "io",
        }
    }
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::InvalidPrefix { prefix } => {
                write!(f, "route prefix '{prefix}' must start with '/'")
            }
            RouteError::InvalidTarget {
                prefix,
                target,
                source,
            } => write!(f, "route '{prefix}': invalid target '{target}': {source}"),
            RouteError::UnsupportedScheme { prefix, scheme } => write!(
                f,
                "route '{prefix}': unsupported scheme '{scheme}' (expected http, https, ws or wss)"
            ),
            RouteError::NotAnOrigin { prefix, target } => write!(
                f,
                "route '{prefix}': target '{target}' must be a bare origin (scheme://host[:port])"
            ),
            RouteError::DuplicatePrefix { prefix } => {
                write!(f, "duplicate route prefix '{prefix}'")
            }
            RouteError::Json(e) => write!(f, "invalid route config: {e}"),
            RouteError::Io { path, source } => write!(f, "{path}: {source}"),
        }
    }
}

impl std::error::Error for RouteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RouteError::InvalidTarget { source, .. } => Some(source),
            RouteError::Json(e) => Some(e),
            RouteError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for RouteError {
    fn from(e: serde_json::Error) -> Self {
        RouteError::Json(e)
    }
}
