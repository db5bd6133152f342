//! # assetgraph core
//!
//! Triple model, indexed in-memory store and RDF loading for asset
//! inventory graphs. The store is built once and only read afterwards.

pub mod loader;
pub mod model;
pub mod query;
pub mod store;
pub mod vocab;

pub use loader::{load_graph, LoadError, RdfFormat};
pub use model::*;
pub use query::GraphRead;
pub use store::*;
