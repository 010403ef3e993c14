//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request target ("/admin/posts?type=blog")
//!     → path.rs (split into RoutePath + query)
//!     → router.rs (route lookup)
//!     → matcher.rs (candidate locations, precedence)
//!     → Return: RouteModule or RouteNotFound
//!
//! Route Compilation (at startup):
//!     RouteConfig[] (declared manifest)
//!     → Parse locations, bind view names
//!     → Reject duplicates
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup from the manifest, never by scanning directories
//! - Deterministic: same input always matches same module
//! - Exact literal match wins, directory index is the only fallback

pub mod matcher;
pub mod path;
pub mod router;

pub use matcher::{MatchKind, ModuleLocation};
pub use path::{split_target, RoutePath};
pub use router::{Resolution, RouteModule, RouteNotFound, RouteTable, RouteTableError};
