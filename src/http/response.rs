//! Failure responses.
//!
//! # Responsibilities
//! - Distinguish route-not-found, load and render failures
//! - Map each to an HTTP status
//! - Render a complete status document in the site shell
//!
//! # Design Decisions
//! - Route markup is never sent partially; failures replace the whole body
//! - Render failures are logged with detail but shown generically

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::content::LoadError;
use crate::render::{RenderError, StaticRenderer};
use crate::routing::RouteNotFound;

/// Everything that can stop a page from being served.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    RouteNotFound(#[from] RouteNotFound),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Load(LoadError::UnknownPostType(_) | LoadError::PostNotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            AppError::Load(LoadError::Invalid(_)) => StatusCode::BAD_REQUEST,
            AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the client.
    fn public_message(&self) -> String {
        match self {
            AppError::RouteNotFound(_) => "Page not found".to_string(),
            AppError::Load(e) => e.to_string(),
            AppError::Render(_) => "The page could not be rendered".to_string(),
        }
    }

    /// Status document rendered in the site shell.
    pub fn into_page(self, renderer: &StaticRenderer) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let markup = renderer.render_status(status.as_u16(), &self.public_message());
        (status, Html(markup.into_string())).into_response()
    }
}
