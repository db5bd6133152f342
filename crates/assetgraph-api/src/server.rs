//! HTTP server implementation

use axum::Router;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::handlers::AppState;
use crate::monitor::GraphHealthMonitor;
use crate::routes::create_router;
use assetgraph_core::{load_graph, GraphStore, LoadError};
use assetgraph_observability::RequestCounter;

/// Asset graph HTTP server
pub struct AssetGraphServer {
    config: ServerConfig,
    app_state: AppState,
}

impl AssetGraphServer {
    /// Load the configured data file and build the server around it
    pub fn load(config: ServerConfig) -> Result<Self, LoadError> {
        let graph = load_graph(&config.data_path)?;
        Ok(Self::with_graph(graph, config))
    }

    /// Build a server around an already loaded graph
    pub fn with_graph(graph: GraphStore, config: ServerConfig) -> Self {
        let requests = Arc::new(RequestCounter::new());
        let monitoring = Arc::new(GraphHealthMonitor::new(&graph, requests.clone()));

        let app_state = AppState {
            graph: Arc::new(graph),
            config: Arc::new(config.clone()),
            monitoring,
            requests,
            start_time: Instant::now(),
        };

        Self { config, app_state }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Shared state handed to every handler
    pub fn state(&self) -> Arc<AppState> {
        Arc::new(self.app_state.clone())
    }

    /// Create the application router
    pub fn create_app(&self) -> Router {
        create_router(self.state())
    }

    async fn bind(&self) -> anyhow::Result<TcpListener> {
        let address = self.config.bind_address();
        info!(
            "Starting asset graph server on {} ({} triples)",
            address,
            self.app_state.graph.len()
        );

        let listener = TcpListener::bind(&address).await?;
        info!("Server listening on {}", listener.local_addr()?);
        Ok(listener)
    }

    /// Run the server with graceful shutdown
    pub async fn run_with_shutdown(
        self,
        shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
    ) -> anyhow::Result<()> {
        let listener = self.bind().await?;
        let app = self.create_app();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(|e| {
                error!("Server error: {}", e);
                e.into()
            })
    }
}

/// Utility function to create a shutdown signal
pub async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
