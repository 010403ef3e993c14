//! Logical request paths.
//!
//! A request target such as `/admin/posts?type=blog` is split into a
//! [`RoutePath`] (the segment sequence used for resolution) and its raw query
//! string, which is left to the data loader.

use std::fmt;

/// An ordered, case-sensitive sequence of path segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoutePath {
    segments: Vec<String>,
}

impl RoutePath {
    /// Parse a logical path. Query string and fragment are ignored; empty
    /// segments produced by leading, trailing or doubled slashes are dropped.
    pub fn parse(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();

        Self::from_segments(path.split('/').filter(|s| !s.is_empty()))
    }

    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// This path extended by one trailing segment.
    pub fn join(&self, segment: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        Self { segments }
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.segments.join("/"))
    }
}

/// Split a request target into its path and (possibly empty) query string.
pub fn split_target(target: &str) -> (RoutePath, &str) {
    let without_fragment = target.split('#').next().unwrap_or_default();
    match without_fragment.split_once('?') {
        Some((path, query)) => (RoutePath::parse(path), query),
        None => (RoutePath::parse(without_fragment), ""),
    }
}
