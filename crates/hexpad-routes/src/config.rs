use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::RouteError;
use crate::route::ProxyRoute;
use crate::table::RouteTable;

/// On-disk route config, shaped like a dev server's `server.proxy` block:
///
/// ```json
/// { "proxy": { "/user": "http://localhost:3334", "/chat": "ws://localhost:3334" } }
/// ```
///
/// `proxy` keeps every entry in document order, repeated keys included, so
/// that `into_table` can reject duplicate prefixes instead of keeping the last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteConfig {
    #[serde(with = "entries")]
    pub proxy: Vec<(String, String)>,
}

impl RouteConfig {
    pub fn into_table(self) -> Result<RouteTable, RouteError> {
        let routes = self
            .proxy
            .into_iter()
            .map(|(prefix, target)| ProxyRoute::new(prefix, &target))
            .collect::<Result<Vec<_>, _>>()?;
        RouteTable::new(routes)
    }

    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// A JSON object read as an ordered list of pairs.
mod entries {
    use super::*;

    pub fn serialize<S: Serializer>(
        pairs: &[(String, String)],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(pairs.len()))?;
        for (k, v) in pairs {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<(String, String)>, D::Error> {
        deserializer.deserialize_map(EntriesVisitor)
    }

    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = Vec<(String, String)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an object of route prefix to target origin")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some(entry) = access.next_entry::<String, String>()? {
                pairs.push(entry);
            }
            Ok(pairs)
        }
    }
}
