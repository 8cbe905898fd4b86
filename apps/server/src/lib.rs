//! # Vitrine Server
//!
//! SSR front end for a headless CMS, built on `Axum`.
//!
//! ## Example
//! ```no_run
//! use vitrine_server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder()
//!         .port(8080)
//!         .build()?
//!         .run()
//!         .await
//! }
//! ```

mod router;
mod state;

pub use state::AppState;

use anyhow::{Context, Result};
use axum_server::Handle;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};
use vitrine_cms::CmsClient;
use vitrine_domain::config::AppConfig;
use vitrine_globals::Globals;
use vitrine_pages::{Pages, Renderer};

/// A fluent builder for configuring and initializing the [`Server`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: AppConfig,
}

impl ServerBuilder {
    /// Set up the server's configuration.
    pub fn config(mut self, cfg: AppConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    /// Consumes the builder and initializes the server.
    ///
    /// Constructs the CMS client, the global-settings cache, the page
    /// controller, and the template renderer, then assembles them into the
    /// shared application state.
    ///
    /// # Errors
    /// Returns an error if the CMS configuration is invalid or the embedded
    /// templates fail to compile.
    pub fn build(self) -> Result<Server> {
        let address = SocketAddr::new(self.cfg.server.address, self.cfg.server.port);
        info!(address = %address, cms = %self.cfg.cms.base_url, "Initializing server");

        let cms = CmsClient::builder()
            .config(&self.cfg.cms)
            .init()
            .context("Failed to initialize CMS client")?;

        let globals = Globals::new(cms.clone(), &self.cfg.cache);
        let pages = Pages::new(cms.clone(), self.cfg.site.home_slug.clone());
        let renderer = Renderer::new().context("Failed to compile templates")?;

        let state = AppState::new(self.cfg, cms, globals, pages, renderer);
        Ok(Server { state })
    }
}

/// A fully initialized server instance ready to run.
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    state: AppState,
}

impl Server {
    /// Returns a new [`ServerBuilder`] to configure the server.
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// Starts the server and runs until the shutdown signal is received.
    ///
    /// # Errors
    /// Returns an error if the server fails to bind to the configured
    /// address.
    pub async fn run(self) -> Result<()> {
        let cfg = self.state.config().clone();
        let address = SocketAddr::new(cfg.server.address, cfg.server.port);

        // Warm the settings cache so the first request doesn't pay the fetch.
        let globals = self.state.globals().clone();
        tokio::spawn(async move { globals.preload().await });

        let app = router::init(self.state);

        let handle = Handle::<SocketAddr>::new();
        let shutdown_handle = handle.clone();

        tokio::spawn(async move {
            if let Err(e) = shutdown_signal().await {
                error!("Error while waiting for shutdown signal: {e}");
                return;
            }
            info!("Shutdown signal received, starting graceful shutdown...");
            shutdown_handle.graceful_shutdown(Some(std::time::Duration::from_secs(30)));
        });

        info!("Starting HTTP server on http://{address}");

        axum_server::bind(address)
            .handle(handle)
            .serve(app.into_make_service())
            .await
            .context("HTTP server failed")?;

        info!("Server shutdown complete");
        Ok(())
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }
}

/// Listens for shutdown signals (Ctrl+C, SIGTERM).
async fn shutdown_signal() -> Result<()> {
    let ctrl_c = async { signal::ctrl_c().await.context("Failed to install Ctrl+C handler") };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = ctrl_c => {
            res.context("Ctrl+C signal received")?;
        },
        res = terminate => {
            res.context("SIGTERM signal received")?;
        },
    }

    Ok(())
}
