//! Dev-server proxy route tables.
//!
//! A route table maps URL path prefixes to a backend origin. It is data only:
//! this crate answers "where would this request go", it never forwards one.

pub mod config;
pub mod defaults;
pub mod error;
pub mod route;
pub mod table;

pub use config::RouteConfig;
pub use defaults::DEFAULT_DEV_ORIGIN;
pub use error::RouteError;
pub use route::ProxyRoute;
pub use table::RouteTable;
