//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, request span, request metrics)
//!     → flash.rs (signed one-shot messages between redirect and page)
//!     → routing (RoutePath → RouteModule)
//!     → content (RouteData for the resolved view)
//!     → render (full document)
//!     → response.rs (map failures to status documents)
//!     → Send to client
//! ```

pub mod flash;
pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use response::AppError;
pub use server::{AppState, HttpServer};
