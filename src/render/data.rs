//! Route data payloads.
//!
//! `RouteData` is the single value handed to a render pass. It is a tagged
//! union so that each view's expected shape is checked where the payload is
//! published, not deep inside rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::content::models::{FlashMessage, Post, PostType};

/// Listing of one post type's posts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PostListing {
    pub post_type: PostType,
    #[serde(default)]
    pub posts: Vec<Post>,
}

/// Data for the post creation form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PostCreateForm {
    pub post_type: PostType,
    #[serde(default)]
    pub errors: Vec<FlashMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum RouteData {
    Home,
    PostTypeCatalog(Vec<PostType>),
    PostList(PostListing),
    PostCreateForm(PostCreateForm),
    PostDetail(Post),
}

/// Discriminant of [`RouteData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteDataKind {
    Home,
    PostTypeCatalog,
    PostList,
    PostCreateForm,
    PostDetail,
}

impl fmt::Display for RouteDataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RouteDataKind::Home => "home",
            RouteDataKind::PostTypeCatalog => "post_type_catalog",
            RouteDataKind::PostList => "post_list",
            RouteDataKind::PostCreateForm => "post_create_form",
            RouteDataKind::PostDetail => "post_detail",
        };
        f.write_str(name)
    }
}

impl RouteData {
    pub fn kind(&self) -> RouteDataKind {
        match self {
            RouteData::Home => RouteDataKind::Home,
            RouteData::PostTypeCatalog(_) => RouteDataKind::PostTypeCatalog,
            RouteData::PostList(_) => RouteDataKind::PostList,
            RouteData::PostCreateForm(_) => RouteDataKind::PostCreateForm,
            RouteData::PostDetail(_) => RouteDataKind::PostDetail,
        }
    }

    /// Decode an untagged JSON payload produced by an external loader for a
    /// route whose expected kind is already known.
    pub fn decode(kind: RouteDataKind, value: serde_json::Value) -> serde_json::Result<Self> {
        Ok(match kind {
            RouteDataKind::Home => RouteData::Home,
            RouteDataKind::PostTypeCatalog => RouteData::PostTypeCatalog(serde_json::from_value(value)?),
            RouteDataKind::PostList => RouteData::PostList(serde_json::from_value(value)?),
            RouteDataKind::PostCreateForm => RouteData::PostCreateForm(serde_json::from_value(value)?),
            RouteDataKind::PostDetail => RouteData::PostDetail(serde_json::from_value(value)?),
        })
    }
}

/// A payload shape a view can borrow out of [`RouteData`].
pub trait RoutePayload {
    const KIND: RouteDataKind;

    fn from_route_data(data: &RouteData) -> Option<&Self>;
}

impl RoutePayload for Vec<PostType> {
    const KIND: RouteDataKind = RouteDataKind::PostTypeCatalog;

    fn from_route_data(data: &RouteData) -> Option<&Self> {
        match data {
            RouteData::PostTypeCatalog(types) => Some(types),
            _ => None,
        }
    }
}

impl RoutePayload for PostListing {
    const KIND: RouteDataKind = RouteDataKind::PostList;

    fn from_route_data(data: &RouteData) -> Option<&Self> {
        match data {
            RouteData::PostList(listing) => Some(listing),
            _ => None,
        }
    }
}

impl RoutePayload for PostCreateForm {
    const KIND: RouteDataKind = RouteDataKind::PostCreateForm;

    fn from_route_data(data: &RouteData) -> Option<&Self> {
        match data {
            RouteData::PostCreateForm(form) => Some(form),
            _ => None,
        }
    }
}

impl RoutePayload for Post {
    const KIND: RouteDataKind = RouteDataKind::PostDetail;

    fn from_route_data(data: &RouteData) -> Option<&Self> {
        match data {
            RouteData::PostDetail(post) => Some(post),
            _ => None,
        }
    }
}
