//! Static rendering subsystem.
//!
//! # Data Flow
//! ```text
//! RouteModule + RouteData (already loaded)
//!     → renderer.rs (check data kind against the module's view)
//!     → context.rs (publish data into a fresh RenderContext)
//!     → views (leaf component reads the context, returns a Node)
//!     → shell.rs (wrap in document chrome)
//!     → markup.rs (serialize to a single HTML string)
//! ```
//!
//! # Design Decisions
//! - Synchronous and CPU-bound; no I/O happens inside a pass
//! - Context is a value threaded through the pass, never a global
//! - A pass returns a whole document or an error, never partial markup

pub mod context;
pub mod data;
pub mod markup;
pub mod renderer;
pub mod shell;

use thiserror::Error;

pub use context::RenderContext;
pub use data::{PostCreateForm, PostListing, RouteData, RouteDataKind, RoutePayload};
pub use markup::{el, text, Element, Node};
pub use renderer::{Markup, StaticRenderer};
pub use shell::DocumentShell;

/// Failures of a single render pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Route data was read before it was published for this pass.
    #[error("route data read before it was published")]
    DataUnavailable,

    /// The pass could not produce a complete document.
    #[error("render failed: {0}")]
    RenderFailure(String),
}
