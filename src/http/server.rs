//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, body limit, request ID)
//! - Bind server to listener
//! - Dispatch page requests: resolve → load → render
//! - Accept post creation forms and redirect, carrying errors as flashes

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{DefaultBodyLimit, FromRef, State},
    http::{header, HeaderValue, Uri},
    middleware,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use axum_extra::extract::cookie::{Key, SignedCookieJar};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::content::{load_route_data, ContentStore, FlashMessage, LoadError, NewPost, RouteQuery};
use crate::http::flash;
use crate::http::request::{request_span, track_requests};
use crate::http::response::AppError;
use crate::lifecycle::shutdown_signal;
use crate::observability::metrics;
use crate::render::{DocumentShell, StaticRenderer};
use crate::routing::{RoutePath, RouteTable, RouteTableError};
use crate::views::href_with_query;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
    pub renderer: Arc<StaticRenderer>,
    pub store: ContentStore,
    /// Signs flash cookies; regenerated on every start.
    pub flash_key: Key,
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.flash_key.clone()
    }
}

impl AppState {
    /// Build state from configuration, seeding the store if requested.
    pub fn from_config(config: &ServerConfig) -> Result<Self, RouteTableError> {
        let routes = RouteTable::from_config(&config.routes.entries)?;
        let store = ContentStore::new();
        if config.content.seed {
            store.seed_defaults();
        }

        Ok(Self {
            routes: Arc::new(routes),
            renderer: Arc::new(StaticRenderer::new(DocumentShell::from_config(&config.site))),
            store,
            flash_key: Key::generate(),
        })
    }

    /// Resolve, load and render one request target.
    pub fn render_page(
        &self,
        path: &RoutePath,
        query: &RouteQuery,
        flashes: &[FlashMessage],
    ) -> Result<String, AppError> {
        let resolution = self.routes.resolve(path).inspect_err(|_| metrics::record_route_miss())?;
        let module = resolution.module;

        let data = load_route_data(module.view(), query, flashes, &self.store)?;
        let markup = self.renderer.render(module, data)?;
        Ok(markup.into_string())
    }
}

/// HTTP server for the render service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Result<Self, RouteTableError> {
        let state = AppState::from_config(&config)?;
        let router = Self::build_router(&config, state.clone());

        if state.routes.is_empty() {
            tracing::warn!("Route table is empty; every page will be not found");
        } else {
            tracing::info!(routes = state.routes.len(), "Route table compiled");
        }
        Ok(Self { router })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        let middleware_stack = ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http().make_span_with(request_span))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)));

        Router::new()
            .route("/admin/posts", get(page_handler).post(create_post))
            .route("/", get(page_handler))
            .route("/{*path}", get(page_handler))
            .with_state(state)
            .layer(middleware::from_fn(track_requests))
            .layer(DefaultBodyLimit::max(config.limits.max_body_bytes))
            .layer(middleware_stack)
    }

    /// Run the server until Ctrl+C, SIGTERM or `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Serve any GET path through the route table. Pending flashes are consumed
/// by whichever page renders next.
async fn page_handler(State(state): State<AppState>, jar: SignedCookieJar, uri: Uri) -> Response {
    let path = RoutePath::parse(uri.path());
    let query = RouteQuery::parse(uri.query().unwrap_or_default());
    let (jar, flashes) = flash::take(jar);

    match state.render_page(&path, &query, &flashes) {
        Ok(html) => (jar, Html(html)).into_response(),
        Err(err) => (jar, err.into_page(&state.renderer)).into_response(),
    }
}

/// Create a post from the admin form and redirect.
async fn create_post(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(input): Form<NewPost>,
) -> (SignedCookieJar, Redirect) {
    let post_type = input.post_type.clone();

    match state.store.create_post(input) {
        Ok(post) => (
            jar,
            Redirect::to(&href_with_query("/admin/posts", &[("type", post.post_type.as_str())])),
        ),
        Err(err) => {
            tracing::warn!(post_type = %post_type, error = %err, "Post creation rejected");
            match err {
                // No form to return to for a type that does not exist.
                LoadError::UnknownPostType(_) => (jar, Redirect::to("/admin")),
                other => (
                    flash::push(jar, &[FlashMessage::error(other.to_string())]),
                    Redirect::to(&href_with_query("/admin/posts/create", &[("type", post_type.as_str())])),
                ),
            }
        }
    }
}
