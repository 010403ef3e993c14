//! Content subsystem: the in-process data loader.
//!
//! # Data Flow
//! ```text
//! Resolved view + query string
//!     → loader.rs (pick post type / post, collect flash errors)
//!     → store.rs (concurrent in-memory maps)
//!     → RouteData handed to the static renderer
//! ```
//!
//! # Design Decisions
//! - The renderer only ever sees RouteData; it never calls into this module
//! - Store clones share state, so handlers can hold their own copy
//! - Unknown post types and posts are not-found, malformed input is invalid

pub mod loader;
pub mod models;
pub mod store;

use thiserror::Error;

pub use loader::{load_route_data, RouteQuery};
pub use models::{FlashLevel, FlashMessage, NewPost, Post, PostType};
pub use store::ContentStore;

/// Errors produced while loading or mutating content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("unknown post type `{0}`")]
    UnknownPostType(String),

    #[error("no post with slug `{0}`")]
    PostNotFound(String),

    #[error("{0}")]
    Invalid(String),
}
