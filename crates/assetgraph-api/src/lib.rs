//! # Asset Graph API
//!
//! Serves the asset inventory graph: an interactive HTML page plus JSON
//! endpoints for the projection, the vulnerability roll-up and single
//! entities. The graph is loaded once and shared read-only by every request.

pub mod config;
pub mod handlers;
pub mod models;
pub mod monitor;
pub mod page;
pub mod routes;
pub mod server;

pub use config::*;
pub use handlers::*;
pub use models::*;
pub use monitor::GraphHealthMonitor;
pub use routes::*;
pub use server::*;
