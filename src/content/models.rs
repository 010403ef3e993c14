//! Content models shared by the store, the loader and the views.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A kind of content (pages, posts, ...) with its display names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PostType {
    pub id: String,
    #[serde(default)]
    pub singular: String,
    #[serde(default)]
    pub plural: String,
    /// Public URL prefix for posts of this type, e.g. "/posts/".
    #[serde(default)]
    pub path_prefix: Option<String>,
}

impl PostType {
    pub fn new(id: impl Into<String>, singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            singular: singular.into(),
            plural: plural.into(),
            path_prefix: None,
        }
    }

    pub fn with_path_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.path_prefix = Some(prefix.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub status: String,
    #[serde(rename = "type", default)]
    pub post_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl fmt::Display for FlashLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FlashLevel::Info => "info",
            FlashLevel::Success => "success",
            FlashLevel::Warning => "warning",
            FlashLevel::Error => "error",
        };
        f.write_str(label)
    }
}

impl FromStr for FlashLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(FlashLevel::Info),
            "success" => Ok(FlashLevel::Success),
            "warning" => Ok(FlashLevel::Warning),
            "error" => Ok(FlashLevel::Error),
            other => Err(format!("unknown flash level `{other}`")),
        }
    }
}

/// A one-shot message shown on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub message: String,
}

impl FlashMessage {
    pub fn new(level: FlashLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(FlashLevel::Error, message)
    }
}

/// Input for creating a post.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPost {
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub post_type: String,
}
