//! CMS admin render server.
//!
//! # Architecture Overview
//!
//! ```text
//!     GET /admin/posts?type=post
//!         │
//!         ▼
//!     ┌─────────┐    ┌──────────┐    ┌──────────┐    ┌──────────────────┐
//!     │  http   │───▶│ routing  │───▶│ content  │───▶│     render       │
//!     │ server  │    │  table   │    │  loader  │    │ context + views  │
//!     └─────────┘    └──────────┘    └──────────┘    │ + shell + markup │
//!         ▲               │                          └────────┬─────────┘
//!         │          RouteNotFound                            │
//!         └───────────────┴───────────── HTML document ◀──────┘
//! ```
//!
//! Subcommands:
//! - `serve` (default): run the HTTP server
//! - `routes`: print the compiled route table
//! - `render <PATH> [--data FILE]`: render one path to stdout

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use cms_render::config::{load_config, validate_config, ConfigError, ServerConfig};
use cms_render::content::RouteQuery;
use cms_render::http::{AppState, HttpServer};
use cms_render::lifecycle::Shutdown;
use cms_render::observability::{logging, metrics};
use cms_render::render::RouteData;
use cms_render::routing::split_target;

#[derive(Parser)]
#[command(name = "cms-render")]
#[command(about = "Route resolution and static rendering for the CMS admin", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server
    Serve,
    /// Print the compiled route table
    Routes,
    /// Render one logical path to stdout
    Render {
        /// Request target, e.g. "/admin/posts?type=post"
        path: String,

        /// JSON payload for the resolved view instead of the built-in store
        #[arg(long)]
        data: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => {
            let config = ServerConfig::default();
            validate_config(&config).map_err(ConfigError::Validation)?;
            config
        }
    };

    logging::init_logging(&config.observability);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Routes => {
            let state = AppState::from_config(&config)?;
            for module in state.routes.modules() {
                println!("{:<24} {}", module.location().to_string(), module.view());
            }
            Ok(())
        }
        Command::Render { path, data } => {
            let state = AppState::from_config(&config)?;
            let (route_path, query) = split_target(&path);

            let html = match data {
                Some(file) => {
                    let resolution = state.routes.resolve(&route_path)?;
                    let module = resolution.module;
                    let payload: serde_json::Value = serde_json::from_str(&fs::read_to_string(file)?)?;
                    let data = RouteData::decode(module.view().accepts(), payload)?;
                    state.renderer.render(module, data)?.into_string()
                }
                None => state.render_page(&route_path, &RouteQuery::parse(query), &[])?,
            };

            println!("{html}");
            Ok(())
        }
    }
}

async fn serve(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("cms-render v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        routes = config.routes.entries.len(),
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        metrics::init_metrics(config.observability.metrics_address.parse()?)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
