//! Module locations and match precedence.
//!
//! # Responsibilities
//! - Parse filesystem-convention module locations ("admin/posts/create")
//! - Define the candidate location a path produces for each match kind
//! - Encode precedence: exact literal match before directory index
//!
//! # Design Decisions
//! - Matching is purely literal; no parameter capture, no regex
//! - The index fallback only applies to the directory named by the full path,
//!   never to a parent prefix

use std::fmt;

use thiserror::Error;

use crate::routing::path::RoutePath;

/// Terminal segment naming a directory's default module.
pub const INDEX_SEGMENT: &str = "index";

/// Why a manifest location was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("location is empty")]
    Empty,

    #[error("location contains an empty segment")]
    EmptySegment,

    #[error("relative segment `{0}` is not allowed")]
    RelativeSegment(String),
}

/// Where a route module lives in the filesystem convention.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleLocation {
    segments: Vec<String>,
}

impl ModuleLocation {
    /// Parse a location such as `admin/posts` or `/admin/index`.
    /// Surrounding slashes are ignored; interior empty segments are not.
    pub fn parse(location: &str) -> Result<Self, LocationError> {
        let trimmed = location.trim_matches('/');
        if trimmed.is_empty() {
            return Err(LocationError::Empty);
        }

        let mut segments = Vec::new();
        for segment in trimmed.split('/') {
            match segment {
                "" => return Err(LocationError::EmptySegment),
                "." | ".." => return Err(LocationError::RelativeSegment(segment.to_string())),
                s => segments.push(s.to_string()),
            }
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// True for a directory's default module (`.../index`).
    pub fn is_index(&self) -> bool {
        self.segments.last().map(String::as_str) == Some(INDEX_SEGMENT)
    }
}

impl fmt::Display for ModuleLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

/// How a path was matched to a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Every path segment equals the module location literally.
    Exact,
    /// The path names a directory whose `index` module served it.
    Index,
}

impl MatchKind {
    /// Lookup order; the first kind with a module wins.
    pub const PRECEDENCE: [MatchKind; 2] = [MatchKind::Exact, MatchKind::Index];

    /// Segments of the location that would serve `path` under this match kind.
    pub fn candidate(self, path: &RoutePath) -> Vec<String> {
        match self {
            MatchKind::Exact => path.segments().to_vec(),
            MatchKind::Index => path.join(INDEX_SEGMENT).segments().to_vec(),
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchKind::Exact => f.write_str("exact"),
            MatchKind::Index => f.write_str("index"),
        }
    }
}
