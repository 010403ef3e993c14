//! File-convention router and static renderer for a small CMS admin.

pub mod config;
pub mod content;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod render;
pub mod routing;
pub mod views;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use render::{RenderError, StaticRenderer};
pub use routing::{RouteNotFound, RouteTable};
