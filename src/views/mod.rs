//! Leaf views, one per route.
//!
//! Each view is a pure function from the published route data (read through
//! the [`RenderContext`]) to a markup fragment. Views never load data.

pub mod admin;
pub mod home;
pub mod post_create;
pub mod post_detail;
pub mod post_list;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use url::form_urlencoded;

use crate::render::{Node, RenderContext, RenderError, RouteDataKind};

/// The compiled views a manifest entry can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    Home,
    Admin,
    PostList,
    PostCreate,
    PostDetail,
}

/// A manifest named a view that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view `{0}`")]
pub struct UnknownView(pub String);

impl ViewId {
    pub const ALL: [ViewId; 5] = [
        ViewId::Home,
        ViewId::Admin,
        ViewId::PostList,
        ViewId::PostCreate,
        ViewId::PostDetail,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ViewId::Home => "home",
            ViewId::Admin => "admin",
            ViewId::PostList => "post_list",
            ViewId::PostCreate => "post_create",
            ViewId::PostDetail => "post_detail",
        }
    }

    /// The route data shape this view renders.
    pub fn accepts(self) -> RouteDataKind {
        match self {
            ViewId::Home => RouteDataKind::Home,
            ViewId::Admin => RouteDataKind::PostTypeCatalog,
            ViewId::PostList => RouteDataKind::PostList,
            ViewId::PostCreate => RouteDataKind::PostCreateForm,
            ViewId::PostDetail => RouteDataKind::PostDetail,
        }
    }

    pub fn render(self, ctx: &RenderContext) -> Result<Node, RenderError> {
        match self {
            ViewId::Home => home::render(ctx),
            ViewId::Admin => admin::render(ctx),
            ViewId::PostList => post_list::render(ctx),
            ViewId::PostCreate => post_create::render(ctx),
            ViewId::PostDetail => post_detail::render(ctx),
        }
    }
}

impl FromStr for ViewId {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewId::ALL
            .into_iter()
            .find(|view| view.name() == s)
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `path?key=value&...` with form-urlencoded values.
pub(crate) fn href_with_query(path: &str, pairs: &[(&str, &str)]) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    format!("{path}?{query}")
}
