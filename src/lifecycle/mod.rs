//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     Ctrl+C / SIGTERM / Shutdown::trigger
//!         → server stops accepting
//!         → in-flight renders complete
//!         → exit
//! ```
//!
//! # Design Decisions
//! - One broadcast channel fans the signal out to every long-running task
//! - OS signals and programmatic triggers end the server the same way

pub mod shutdown;

pub use shutdown::{shutdown_signal, Shutdown};
