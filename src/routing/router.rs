//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store the compiled route table
//! - Resolve a path to exactly one route module
//! - Return the resolved module or an explicit `RouteNotFound`
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(1) lookup per match kind via HashMap keyed by location segments
//! - Explicit RouteNotFound rather than silent default

use std::collections::HashMap;
use std::str::FromStr;

use thiserror::Error;

use crate::config::RouteConfig;
use crate::routing::matcher::{LocationError, MatchKind, ModuleLocation};
use crate::routing::path::RoutePath;
use crate::views::{UnknownView, ViewId};

/// A resolvable view bound to its filesystem-convention location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteModule {
    location: ModuleLocation,
    view: ViewId,
}

impl RouteModule {
    pub fn new(location: ModuleLocation, view: ViewId) -> Self {
        Self { location, view }
    }

    pub fn location(&self) -> &ModuleLocation {
        &self.location
    }

    pub fn view(&self) -> ViewId {
        self.view
    }
}

/// Result of a successful lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub module: &'a RouteModule,
    pub kind: MatchKind,
}

/// No module matches the requested path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no route module matches `{path}`")]
pub struct RouteNotFound {
    pub path: RoutePath,
}

/// Errors raised while compiling a manifest into a route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("invalid route location `{location}`: {source}")]
    InvalidLocation {
        location: String,
        source: LocationError,
    },

    #[error("route `{location}`: {source}")]
    UnknownView {
        location: String,
        source: UnknownView,
    },

    #[error("duplicate route location `{0}`")]
    DuplicateLocation(String),
}

/// Compiled, immutable route table.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    modules: HashMap<Vec<String>, RouteModule>,
}

impl RouteTable {
    /// Compile the declared manifest. Fails on the first malformed or
    /// duplicate entry so no ambiguous table can exist.
    pub fn from_config(routes: &[RouteConfig]) -> Result<Self, RouteTableError> {
        let mut modules = HashMap::with_capacity(routes.len());

        for route in routes {
            let location = ModuleLocation::parse(&route.location).map_err(|source| {
                RouteTableError::InvalidLocation {
                    location: route.location.clone(),
                    source,
                }
            })?;
            let view = ViewId::from_str(&route.view).map_err(|source| {
                RouteTableError::UnknownView {
                    location: route.location.clone(),
                    source,
                }
            })?;

            let key = location.segments().to_vec();
            if modules.contains_key(&key) {
                return Err(RouteTableError::DuplicateLocation(location.to_string()));
            }
            modules.insert(key, RouteModule::new(location, view));
        }

        Ok(Self { modules })
    }

    /// Resolve a path. Exact literal matches always win over the index module
    /// of the directory the path names.
    pub fn resolve(&self, path: &RoutePath) -> Result<Resolution<'_>, RouteNotFound> {
        for kind in MatchKind::PRECEDENCE {
            if let Some(module) = self.modules.get(&kind.candidate(path)) {
                tracing::debug!(
                    path = %path,
                    location = %module.location(),
                    view = module.view().name(),
                    kind = %kind,
                    "Route resolved"
                );
                return Ok(Resolution { module, kind });
            }
        }

        tracing::debug!(path = %path, "No route module matched");
        Err(RouteNotFound { path: path.clone() })
    }

    /// All modules ordered by location.
    pub fn modules(&self) -> Vec<&RouteModule> {
        let mut modules: Vec<_> = self.modules.values().collect();
        modules.sort_by(|a, b| a.location().cmp(b.location()));
        modules
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RoutesConfig;

    fn table(entries: &[(&str, &str)]) -> RouteTable {
        let routes: Vec<_> = entries
            .iter()
            .map(|(location, view)| RouteConfig::new(*location, *view))
            .collect();
        RouteTable::from_config(&routes).unwrap()
    }

    fn resolve_view(table: &RouteTable, path: &str) -> Option<(ViewId, MatchKind)> {
        table
            .resolve(&RoutePath::parse(path))
            .ok()
            .map(|r| (r.module.view(), r.kind))
    }

    #[test]
    fn test_default_manifest() {
        let table = RouteTable::from_config(&RoutesConfig::default().entries).unwrap();

        assert_eq!(resolve_view(&table, "/"), Some((ViewId::Home, MatchKind::Index)));
        assert_eq!(resolve_view(&table, "/admin"), Some((ViewId::Admin, MatchKind::Exact)));
        assert_eq!(
            resolve_view(&table, "/admin/posts?type=blog"),
            Some((ViewId::PostList, MatchKind::Exact))
        );
        assert_eq!(
            resolve_view(&table, "/admin/posts/create"),
            Some((ViewId::PostCreate, MatchKind::Exact))
        );
        assert_eq!(resolve_view(&table, "/post"), Some((ViewId::PostDetail, MatchKind::Exact)));
    }

    #[test]
    fn test_exact_match_beats_index() {
        let table = table(&[("admin/posts", "post_list"), ("admin/index", "admin")]);

        assert_eq!(
            resolve_view(&table, "/admin/posts"),
            Some((ViewId::PostList, MatchKind::Exact))
        );
        assert_eq!(resolve_view(&table, "/admin"), Some((ViewId::Admin, MatchKind::Index)));
    }

    #[test]
    fn test_file_module_beats_directory_index() {
        let table = table(&[("admin", "admin"), ("admin/index", "home")]);
        assert_eq!(resolve_view(&table, "/admin"), Some((ViewId::Admin, MatchKind::Exact)));
    }

    #[test]
    fn test_no_partial_prefix_fallback() {
        let table = table(&[("admin/index", "admin")]);

        let err = table.resolve(&RoutePath::parse("/admin/x")).unwrap_err();
        assert_eq!(err.path, RoutePath::parse("/admin/x"));
        assert!(resolve_view(&table, "/admin/posts/deeper").is_none());
        assert!(resolve_view(&table, "/").is_none());
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let table = RouteTable::from_config(&RoutesConfig::default().entries).unwrap();
        for path in ["/", "/admin", "/admin/posts", "/missing", "/admin/posts/create"] {
            let first = resolve_view(&table, path);
            for _ in 0..10 {
                assert_eq!(resolve_view(&table, path), first);
            }
        }
    }

    #[test]
    fn test_duplicate_location_rejected() {
        let routes = vec![
            RouteConfig::new("admin", "admin"),
            RouteConfig::new("/admin/", "home"),
        ];
        assert_eq!(
            RouteTable::from_config(&routes).unwrap_err(),
            RouteTableError::DuplicateLocation("admin".into())
        );
    }

    #[test]
    fn test_unknown_view_rejected() {
        let routes = vec![RouteConfig::new("admin", "dashboard")];
        assert!(matches!(
            RouteTable::from_config(&routes),
            Err(RouteTableError::UnknownView { .. })
        ));
    }

    #[test]
    fn test_modules_listed_in_location_order() {
        let table = RouteTable::from_config(&RoutesConfig::default().entries).unwrap();
        let locations: Vec<_> = table
            .modules()
            .iter()
            .map(|m| m.location().to_string())
            .collect();
        assert_eq!(
            locations,
            ["admin", "admin/posts", "admin/posts/create", "index", "post"]
        );
        assert!(!table.is_empty());
    }

    #[test]
    fn test_empty_manifest_resolves_nothing() {
        let table = RouteTable::from_config(&[]).unwrap();
        assert!(table.is_empty());
        assert!(table.resolve(&RoutePath::parse("/")).is_err());
    }
}
